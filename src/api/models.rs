use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

/// Validated employee contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    pub full_name: String,
    pub designation: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub phone_label: Option<String>,
    pub photo_url: Option<String>,
    pub linkedin: Option<String>,
    pub address: Option<String>,
}

/// Profile document as the remote endpoint sends it. Every field is optional
/// on the wire; `into_record` decides what counts as a usable profile.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_label: Option<String>,
    #[serde(rename = "photoURL", default, deserialize_with = "lenient_string")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub error: Option<String>,
}

impl ProfileResponse {
    /// Parses a profile body. `null`, `false`, `0` and `""` are treated as an
    /// empty answer from the endpoint.
    pub fn from_body(body: &str) -> AppResult<ProfileRecord> {
        let value: serde_json::Value = serde_json::from_str(body)?;
        if is_falsy(&value) {
            return Err(AppError::ProfileNotFound);
        }

        let response: ProfileResponse = serde_json::from_value(value)?;
        response.into_record()
    }

    pub fn into_record(self) -> AppResult<ProfileRecord> {
        if let Some(message) = present(self.error) {
            return Err(AppError::ProfileError(message));
        }

        let full_name = present(self.full_name).ok_or(AppError::MissingField("fullName"))?;

        Ok(ProfileRecord {
            full_name,
            designation: present(self.designation),
            company: present(self.company),
            email: present(self.email),
            phone: present(self.phone),
            phone_label: present(self.phone_label),
            photo_url: present(self.photo_url),
            linkedin: present(self.linkedin),
            address: present(self.address),
        })
    }
}

/// Accepts a string, number or bool and keeps it as text. Sheet-backed
/// endpoints send phone numbers as JSON numbers. `false` and `0` read as
/// absent, like an empty string.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string, number or bool, got {other}"
        ))),
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn is_falsy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Bool(flag) => !flag,
        serde_json::Value::Number(number) => number.as_f64() == Some(0.0),
        serde_json::Value::String(text) => text.is_empty(),
        _ => false,
    }
}
