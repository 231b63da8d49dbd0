use axum::response::Html;
use std::path::{Component, Path, PathBuf};

use crate::error::AppError;
use crate::routes::{render_page, site_pages, AppState};

/// Writes `index.html` for every page into `out_dir`, mirroring the route layout.
///
/// Returns the written files in page order. Routes that would escape `out_dir` are skipped.
pub async fn export_site(state: &AppState, out_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut written = Vec::new();
    for page in site_pages(state) {
        let relative = Path::new(page.route.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            tracing::warn!("Skipping export of {}, it leaves the output directory", page.route);
            continue;
        }

        let dir = out_dir.join(relative);
        tokio::fs::create_dir_all(&dir).await?;
        let file = dir.join("index.html");
        let (_, Html(html)) = render_page(state, &page.route);
        tokio::fs::write(&file, html).await?;
        tracing::info!("Exported {} to {}", page.route, file.display());
        written.push(file);
    }
    Ok(written)
}
