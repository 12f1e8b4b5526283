use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{AppError, AppResult};

use super::endpoints;
use super::models::{ProfileRecord, ProfileResponse};

#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: Client,
    base_url: Url,
}

impl ProfileClient {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "profile endpoint must be an http(s) url, got `{base_url}`"
            )));
        }

        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn profile_url(&self, token: &str) -> Url {
        self.endpoint_url(&endpoints::profile_query(token))
    }

    pub fn vcard_url(&self, token: &str) -> Url {
        self.endpoint_url(&endpoints::vcard_query(token))
    }

    pub async fn fetch_profile(&self, token: &str) -> AppResult<ProfileRecord> {
        let url = self.profile_url(token);
        tracing::debug!(%url, "requesting profile");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                code = status.as_u16(),
                reason = %status_text(status),
                "profile request failed"
            );
            return Err(status_error(status));
        }

        let body = response.text().await?;
        ProfileResponse::from_body(&body)
    }

    pub async fn fetch_vcard_text(&self, endpoint: &Url) -> AppResult<String> {
        tracing::debug!(url = %endpoint, "requesting vcard");

        let response = self.http.get(endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Download(status_text(status)));
        }

        Ok(response.text().await?)
    }

    fn endpoint_url(&self, query: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

fn status_error(status: StatusCode) -> AppError {
    AppError::Status {
        code: status.as_u16(),
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| status.as_u16().to_string())
}
