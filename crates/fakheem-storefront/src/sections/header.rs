//! Header section - brand, search box, theme toggle, badges and cart total.

use fakheem_commerce::selection::SelectionState;

use super::html_escape;
use crate::config::StoreConfig;
use crate::theme::Theme;

/// Render the sticky site header.
pub fn render_header(
    store: &StoreConfig,
    theme: Theme,
    search_query: &str,
    selection: &SelectionState,
) -> String {
    let theme_icon = if theme.is_dark() { "sun" } else { "moon" };
    let logo_letter = store.name.split_whitespace().last().and_then(|w| w.chars().next());

    format!(
        r#"<header class="site-header" data-section="header">
    <div class="brand">
        <span class="brand-mark">{}</span>
        <div class="brand-text">
            <h1 class="brand-name">{}</h1>
            <p class="brand-tagline">{}</p>
        </div>
    </div>
    <form class="search-form" role="search">
        <input type="text" name="q" value="{}" placeholder="ابحث عن المنتجات..." dir="rtl" aria-label="بحث">
    </form>
    <nav class="header-actions">
        <button class="theme-toggle" data-action="toggle-theme" data-icon="{}" aria-label="تبديل المظهر"></button>
        <button class="favorites" aria-label="المفضلة">{}</button>
        <button class="cart" aria-label="السلة">{}{}</button>
    </nav>
</header>"#,
        logo_letter.map(|c| html_escape(&c.to_string())).unwrap_or_default(),
        html_escape(&store.name),
        html_escape(&store.tagline),
        html_escape(search_query),
        theme_icon,
        render_badge(selection.favorite_count()),
        render_badge(selection.cart_count()),
        render_subtotal(store, selection),
    )
}

/// Cart total in the store currency, hidden while the cart is empty.
///
/// A cart that cannot be totalled in the store currency shows the count only.
fn render_subtotal(store: &StoreConfig, selection: &SelectionState) -> String {
    if selection.cart_count() == 0 {
        return String::new();
    }
    match selection.cart_subtotal(store.currency) {
        Ok(total) => format!(r#"<span class="cart-total">{}</span>"#, html_escape(&total.display())),
        Err(e) => {
            tracing::warn!(error = %e, "cart subtotal unavailable");
            String::new()
        }
    }
}

/// Count badge, hidden at zero.
fn render_badge(count: usize) -> String {
    if count == 0 {
        String::new()
    } else {
        format!(r#"<span class="badge">{}</span>"#, count)
    }
}
