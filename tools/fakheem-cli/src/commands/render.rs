//! Render the storefront page.

use anyhow::{Context as _, Result};
use fakheem_storefront::CatalogState;

use super::{load_view, RenderArgs};
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut view = load_view(&args.grid, ctx).await?;

    if let CatalogState::Failed(ref reason) = *view.catalog() {
        ctx.output.warn(&format!("Catalog not loaded: {}", reason));
    }

    if args.dark && !view.theme().is_dark() {
        view.toggle_theme();
    }

    let html = view.render();
    let shown = view.displayed().len();

    match args.out {
        Some(ref out) => {
            let path = ctx.resolve_path(out);
            std::fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "bytes": html.len(),
                    "products": shown,
                }));
            } else {
                ctx.output
                    .success(&format!("Wrote {} ({} products)", path.display(), shown));
            }
        }
        None => println!("{}", html),
    }

    Ok(())
}
