pub fn profile_query(token: &str) -> Vec<(&'static str, String)> {
    vec![("token", token.to_string())]
}

pub fn vcard_query(token: &str) -> Vec<(&'static str, String)> {
    vec![("action", "vcf".to_string()), ("token", token.to_string())]
}
