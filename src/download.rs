use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use url::Url;

use crate::api::client::ProfileClient;
use crate::error::{AppError, AppResult};
use crate::vcard::{self, VCardData};

pub const IDLE_LABEL: &str = "SAVE CONTACT";
pub const BUSY_LABEL: &str = "Downloading...";

/// The save-contact button state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveControl {
    label: String,
    enabled: bool,
}

impl SaveControl {
    pub fn new() -> Self {
        Self {
            label: IDLE_LABEL.to_string(),
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn busy(&mut self) -> BusyGuard<'_> {
        self.label = BUSY_LABEL.to_string();
        self.enabled = false;
        BusyGuard { control: self }
    }
}

impl Default for SaveControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores the control to idle when dropped.
struct BusyGuard<'a> {
    control: &'a mut SaveControl,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.control.label = IDLE_LABEL.to_string();
        self.control.enabled = true;
    }
}

pub trait Notifier {
    fn alert(&self, message: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// A file being written next to its final location. Until `commit` succeeds
/// the partial file is removed on drop.
#[derive(Debug)]
pub struct PendingFile {
    part: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl PendingFile {
    pub fn write(dir: &Path, file_name: &str, contents: &[u8]) -> AppResult<Self> {
        validate_file_name(file_name)?;

        let pending = Self {
            part: dir.join(format!(".{file_name}.part")),
            target: dir.join(file_name),
            committed: false,
        };
        fs::write(&pending.part, contents)?;
        Ok(pending)
    }

    pub fn part_path(&self) -> &Path {
        &self.part
    }

    pub fn commit(mut self) -> AppResult<PathBuf> {
        fs::rename(&self.part, &self.target)?;
        self.committed = true;
        Ok(self.target.clone())
    }
}

impl Drop for PendingFile {
    fn drop(&mut self) {
        if !self.committed {
            if let Err(err) = fs::remove_file(&self.part) {
                tracing::debug!(path = %self.part.display(), "partial file cleanup failed: {err}");
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DownloadRequest<'a> {
    pub endpoint: &'a Url,
    pub file_name: &'a str,
    pub dir: &'a Path,
    pub organization: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DownloadOutcome {
    Saved { path: PathBuf },
    Failed { message: String },
    Skipped,
}

/// Fetches the contact behind `request.endpoint` and saves it as a vCard.
///
/// The control reads busy while the download runs and is back to idle and
/// enabled once this returns, whatever the outcome. Failures are reported
/// through `notifier` rather than returned.
pub async fn download_vcard<N: Notifier + ?Sized>(
    client: &ProfileClient,
    request: DownloadRequest<'_>,
    control: Option<&mut SaveControl>,
    notifier: &N,
) -> DownloadOutcome {
    let Some(control) = control else {
        tracing::debug!("no save control attached, skipping download");
        return DownloadOutcome::Skipped;
    };

    let _busy = control.busy();
    match save_vcard(client, request).await {
        Ok(path) => {
            tracing::info!(path = %path.display(), "saved contact");
            DownloadOutcome::Saved { path }
        }
        Err(err) => {
            tracing::error!("vcard download error: {err}");
            let message = format!("Failed to save contact. {err}");
            notifier.alert(&message);
            DownloadOutcome::Failed { message }
        }
    }
}

async fn save_vcard(client: &ProfileClient, request: DownloadRequest<'_>) -> AppResult<PathBuf> {
    validate_file_name(request.file_name)?;

    let body = client.fetch_vcard_text(request.endpoint).await?;
    let data = VCardData::from_json(&body)?;
    let text = vcard::generate(&data, request.organization);

    fs::create_dir_all(request.dir)?;
    let pending = PendingFile::write(request.dir, request.file_name, text.as_bytes())?;
    pending.commit()
}

fn validate_file_name(file_name: &str) -> AppResult<()> {
    let invalid = file_name.is_empty()
        || file_name == "."
        || file_name == ".."
        || file_name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(AppError::InvalidInput(format!(
            "`{file_name}` is not a usable file name"
        )));
    }

    Ok(())
}
