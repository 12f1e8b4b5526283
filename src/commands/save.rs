use std::path::PathBuf;

use serde::Serialize;

use crate::card;
use crate::cli::SaveArgs;
use crate::context::AppContext;
use crate::download::{self, DownloadOutcome, DownloadRequest, SaveControl, StderrNotifier};
use crate::error::{AppError, AppResult};
use crate::vcard;

#[derive(Debug, Serialize)]
struct SaveResult {
    path: PathBuf,
    file_name: String,
    media_type: &'static str,
}

pub async fn run(ctx: &AppContext, args: SaveArgs) -> AppResult<()> {
    let view = card::load_view(&ctx.client, &ctx.settings, &args.url).await?;
    let file_name = args
        .file_name
        .unwrap_or_else(|| view.save.file_name.clone());
    let dir = args.dir.unwrap_or_else(|| ctx.settings.download_dir());

    let request = DownloadRequest {
        endpoint: &view.save.endpoint,
        file_name: &file_name,
        dir: &dir,
        organization: ctx.settings.organization(),
    };
    let mut control = SaveControl::new();
    let outcome =
        download::download_vcard(&ctx.client, request, Some(&mut control), &StderrNotifier).await;

    let DownloadOutcome::Saved { path } = outcome else {
        return Err(AppError::NotSaved);
    };

    let text = format!("saved contact to {}", path.display());
    let result = SaveResult {
        path,
        file_name,
        media_type: vcard::MEDIA_TYPE,
    };
    ctx.output.emit(&text, &result)
}
