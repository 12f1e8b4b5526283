use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::card::{self, Container, Rendered};
use crate::cli::RenderArgs;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct RenderReport {
    #[serde(flatten)]
    rendered: Rendered,
    #[serde(skip_serializing_if = "Option::is_none")]
    out: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<String>,
}

pub async fn run(ctx: &AppContext, args: RenderArgs) -> AppResult<()> {
    let mut container = Container::default();
    let rendered = card::mount(&ctx.client, &ctx.settings, &args.url, &mut container).await;
    let html = container.to_html();

    if let Some(path) = args.out {
        fs::write(&path, &html)?;
        let text = format!("wrote {} to {}", summarize(&rendered), path.display());
        let report = RenderReport {
            rendered,
            out: Some(path),
            html: None,
        };
        return ctx.output.emit(&text, &report);
    }

    let report = RenderReport {
        rendered,
        out: None,
        html: Some(html.clone()),
    };
    ctx.output.emit_block(&html, &report)
}

fn summarize(rendered: &Rendered) -> String {
    match rendered {
        Rendered::Card(view) => format!("profile card for {}", view.full_name),
        Rendered::Error { message } => format!("error card ({message})"),
    }
}
