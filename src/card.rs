use html_escape::{encode_double_quoted_attribute, encode_text};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Serialize;
use url::Url;

use crate::api::client::ProfileClient;
use crate::api::models::ProfileRecord;
use crate::config::Settings;
use crate::download::IDLE_LABEL;
use crate::error::{AppError, AppResult};

pub const CONTAINER_ID: &str = "profileCard";
pub const NO_TOKEN_MESSAGE: &str = "No token provided.";
pub const NOT_FOUND_MESSAGE: &str = "Profile not found.";
pub const DEFAULT_ROLE: &str = "Staff";

const LINKEDIN_SEARCH_URL: &str = "https://www.linkedin.com/search/results/all/";
const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/";
const LINKEDIN_PLACEHOLDER: &str = "#";

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The element a render writes into. Each render replaces the whole body.
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    inner_html: String,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inner_html: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn replace(&mut self, html: String) {
        self.inner_html = html;
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div id=\"{}\" class=\"profile-card\">{}</div>\n",
            encode_double_quoted_attribute(&self.id),
            self.inner_html
        )
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(CONTAINER_ID)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Rendered {
    Card(CardView),
    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    Email,
    Phone,
    Location,
    #[serde(rename = "linkedin")]
    LinkedIn,
}

impl RowKind {
    fn icon_class(self) -> &'static str {
        match self {
            RowKind::Email => "fas fa-at icon",
            RowKind::Phone => "fas fa-phone-alt icon",
            RowKind::Location => "fas fa-map-marker-alt icon",
            RowKind::LinkedIn => "fab fa-linkedin icon",
        }
    }

    fn opens_new_tab(self) -> bool {
        matches!(self, RowKind::Location | RowKind::LinkedIn)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub kind: RowKind,
    pub href: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveLink {
    pub endpoint: Url,
    pub file_name: String,
}

/// Everything the card markup needs, already resolved against defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub photo_url: String,
    pub full_name: String,
    pub role: String,
    pub organization: String,
    pub save: SaveLink,
    pub rows: Vec<ContactRow>,
}

impl CardView {
    pub fn from_record(
        record: &ProfileRecord,
        settings: &Settings,
        vcard_endpoint: Url,
    ) -> AppResult<Self> {
        let organization = record
            .company
            .clone()
            .unwrap_or_else(|| settings.organization().to_string());
        let photo_url = record
            .photo_url
            .as_deref()
            .and_then(web_url)
            .map(String::from)
            .unwrap_or_else(|| settings.placeholder_photo().to_string());

        let mut rows = Vec::new();
        if let Some(email) = &record.email {
            rows.push(ContactRow {
                kind: RowKind::Email,
                href: format!("mailto:{email}"),
                text: email.clone(),
            });
        }
        if let Some(phone) = &record.phone {
            let text = match &record.phone_label {
                Some(label) => format!("{phone} ({label})"),
                None => phone.clone(),
            };
            rows.push(ContactRow {
                kind: RowKind::Phone,
                href: format!("tel:{phone}"),
                text,
            });
        }
        if let Some(href) = location_target(record.address.as_deref())? {
            rows.push(ContactRow {
                kind: RowKind::Location,
                href,
                text: record.address.clone().unwrap_or_default(),
            });
        }
        rows.push(ContactRow {
            kind: RowKind::LinkedIn,
            href: linkedin_target(record.linkedin.as_deref(), &record.full_name, &organization)?,
            text: "LinkedIn Profile".to_string(),
        });

        Ok(Self {
            photo_url,
            full_name: record.full_name.clone(),
            role: record
                .designation
                .clone()
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            organization,
            save: SaveLink {
                endpoint: vcard_endpoint,
                file_name: vcf_file_name(&record.full_name),
            },
            rows,
        })
    }
}

/// Reads the `token` query parameter as given. An empty value counts as absent.
pub fn token_from_location(location: &Url) -> Option<String> {
    location
        .query_pairs()
        .find(|(key, _)| key == "token")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

pub fn vcf_file_name(full_name: &str) -> String {
    let mut stem = String::with_capacity(full_name.len());
    let mut in_run = false;
    for ch in full_name.chars() {
        if ch.is_whitespace() {
            if !in_run {
                stem.push('_');
            }
            in_run = true;
        } else {
            stem.push(ch);
            in_run = false;
        }
    }
    format!("{stem}.vcf")
}

pub fn linkedin_target(
    linkedin: Option<&str>,
    full_name: &str,
    organization: &str,
) -> AppResult<String> {
    if let Some(profile) = linkedin
        .filter(|value| *value != LINKEDIN_PLACEHOLDER)
        .and_then(web_url)
    {
        return Ok(profile.into());
    }

    Ok(format!(
        "{LINKEDIN_SEARCH_URL}?keywords={}%20{}",
        utf8_percent_encode(full_name, URI_COMPONENT),
        utf8_percent_encode(organization, URI_COMPONENT)
    ))
}

pub fn location_target(address: Option<&str>) -> AppResult<Option<String>> {
    let Some(address) = address else {
        return Ok(None);
    };

    let mut url = Url::parse(MAP_SEARCH_URL)?;
    url.query_pairs_mut()
        .append_pair("api", "1")
        .append_pair("query", address);
    Ok(Some(url.into()))
}

fn web_url(value: &str) -> Option<Url> {
    Url::parse(value)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

pub fn render_card(view: &CardView) -> String {
    let mut html = format!(
        "<div class=\"profile-header\">\
<div class=\"profile-image-container\"><img src=\"{photo}\" alt=\"Profile Picture\" class=\"profile-image\" /></div>\
<div class=\"profile-info\"><h2>{name}</h2><p class=\"role\">{role}</p><p class=\"company\">{organization}</p></div>\
</div>",
        photo = encode_double_quoted_attribute(&view.photo_url),
        name = encode_text(&view.full_name),
        role = encode_text(&view.role),
        organization = encode_text(&view.organization),
    );

    html.push_str(&format!(
        "<a href=\"{href}\" download=\"{file}\" data-vcf-endpoint=\"{href}\" data-file-name=\"{file}\" class=\"save-contact-btn\">{label}</a>",
        href = encode_double_quoted_attribute(view.save.endpoint.as_str()),
        file = encode_double_quoted_attribute(&view.save.file_name),
        label = IDLE_LABEL,
    ));

    html.push_str("<section class=\"contact-details\">");
    for row in &view.rows {
        let target = if row.kind.opens_new_tab() {
            " target=\"_blank\" rel=\"noopener\""
        } else {
            ""
        };
        html.push_str(&format!(
            "<a href=\"{href}\"{target} class=\"contact-item\"><i class=\"{icon}\"></i><span>{text}</span><i class=\"fas fa-chevron-right arrow\"></i></a>",
            href = encode_double_quoted_attribute(&row.href),
            icon = row.kind.icon_class(),
            text = encode_text(&row.text),
        ));
    }
    html.push_str("</section>");

    html
}

pub fn render_error(message: &str) -> String {
    format!(
        "<div class=\"loading-error-message\"><p>{}</p></div>",
        encode_text(message)
    )
}

/// User-facing text for a failed render.
pub fn error_message(error: &AppError) -> String {
    match error {
        AppError::MissingToken => NO_TOKEN_MESSAGE.to_string(),
        AppError::ProfileNotFound => NOT_FOUND_MESSAGE.to_string(),
        AppError::ProfileError(message) => message.clone(),
        other => format!("Could not load profile. ({other})"),
    }
}

/// Resolves the page location into a card view without touching any container.
pub async fn load_view(
    client: &ProfileClient,
    settings: &Settings,
    location: &Url,
) -> AppResult<CardView> {
    let token = token_from_location(location).ok_or(AppError::MissingToken)?;
    let record = client.fetch_profile(&token).await?;
    CardView::from_record(&record, settings, client.vcard_url(&token))
}

/// Loads the profile named by `location` and writes either the card or an
/// error fragment into `container`.
pub async fn mount(
    client: &ProfileClient,
    settings: &Settings,
    location: &Url,
    container: &mut Container,
) -> Rendered {
    match load_view(client, settings, location).await {
        Ok(view) => {
            tracing::info!(name = %view.full_name, "rendered profile card");
            container.replace(render_card(&view));
            Rendered::Card(view)
        }
        Err(err) => {
            match &err {
                AppError::MissingToken
                | AppError::ProfileNotFound
                | AppError::ProfileError(_) => tracing::warn!("profile unavailable: {err}"),
                _ => tracing::error!("error fetching profile: {err}"),
            }
            let message = error_message(&err);
            container.replace(render_error(&message));
            Rendered::Error { message }
        }
    }
}
