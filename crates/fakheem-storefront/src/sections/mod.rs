//! Page sections rendered as HTML fragments.

mod footer;
mod grid;
mod header;
mod hero;
mod toast;

pub use footer::render_footer;
pub use grid::{render_grid, render_grid_loading, render_product_card};
pub use header::render_header;
pub use hero::render_hero;
pub use toast::render_toasts;

use crate::view::StorefrontView;

/// Render the full storefront page for the view's current state.
pub fn render_page(view: &StorefrontView) -> String {
    let config = view.config();
    let theme_class = if view.theme().is_dark() { r#" class="dark""# } else { "" };

    let grid = if view.is_loading() {
        render_grid_loading()
    } else {
        render_grid(
            &view.displayed(),
            &config.listing.categories,
            view.selection(),
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ar" dir="rtl"{}>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
</head>
<body>
{}
<main>
{}
{}
</main>
{}
{}
</body>
</html>"#,
        theme_class,
        html_escape(&config.store.name),
        render_header(
            &config.store,
            view.theme(),
            &view.params().search_query,
            view.selection(),
        ),
        render_hero(&config.store),
        grid,
        render_footer(&config.store),
        render_toasts(view.pending_notifications()),
    )
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
