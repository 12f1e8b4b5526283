use serde::Deserialize;

use crate::api::models::lenient_string;
use crate::error::AppResult;

pub const MEDIA_TYPE: &str = "text/vcard;charset=utf-8";

/// Contact fields returned by the `action=vcf` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VCardData {
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
}

impl VCardData {
    pub fn from_json(body: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Renders a vCard 3.0 record. Missing fields become empty values.
pub fn generate(data: &VCardData, organization: &str) -> String {
    let lines = [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", field(data.full_name.as_deref())),
        format!("ORG:{}", field(Some(organization))),
        format!("TITLE:{}", field(data.designation.as_deref())),
        format!("TEL;TYPE=CELL:{}", field(data.phone.as_deref())),
        format!("EMAIL;TYPE=WORK:{}", field(data.email.as_deref())),
        "END:VCARD".to_string(),
    ];

    lines.join("\n")
}

fn field(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .chars()
        .filter(|value| *value != '\r' && *value != '\n')
        .collect()
}
