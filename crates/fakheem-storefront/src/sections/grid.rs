//! Product grid section - category buttons, sort select and product cards.

use fakheem_commerce::catalog::Product;
use fakheem_commerce::search::{Listing, SortKey};
use fakheem_commerce::selection::SelectionState;

use super::html_escape;
use crate::config::CategoryOption;

/// Render the product grid for a listing.
pub fn render_grid(
    listing: &Listing<'_>,
    categories: &[CategoryOption],
    selection: &SelectionState,
) -> String {
    let params = listing.params();

    let category_buttons: String = categories
        .iter()
        .map(|option| {
            let active = option.filter() == params.category;
            format!(
                r#"<button class="category-button{}" data-category="{}" aria-pressed="{}">{}</button>"#,
                if active { " active" } else { "" },
                html_escape(&option.value),
                active,
                html_escape(&option.label)
            )
        })
        .collect();

    let sort_options: String = SortKey::ALL
        .iter()
        .map(|key| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                key.as_str(),
                if *key == params.sort_key { " selected" } else { "" },
                key.display_name()
            )
        })
        .collect();

    let body = if listing.is_empty() {
        r#"<div class="empty-state"><p>لا توجد منتجات متطابقة مع البحث</p></div>"#.to_string()
    } else {
        let cards: String = listing
            .iter()
            .map(|p| render_product_card(p, selection.is_favorite(&p.id)))
            .collect();
        format!(r#"<div class="product-grid">{}</div>"#, cards)
    };

    format!(
        r#"<section class="products" id="products" data-section="grid">
    <div class="section-heading" dir="rtl">
        <h2>مجموعتنا <span class="accent">المميزة</span></h2>
        <p>اكتشف أجمل قطع المجوهرات والإكسسوارات المصنوعة بعناية فائقة وجودة استثنائية</p>
    </div>
    <div class="grid-controls">
        <div class="category-filters">{}</div>
        <select class="sort-select" name="sort" dir="rtl">{}</select>
    </div>
    <span class="result-count">{} منتج</span>
    {}
</section>"#,
        category_buttons,
        sort_options,
        listing.len(),
        body
    )
}

/// Render the grid while the catalog is loading.
pub fn render_grid_loading() -> String {
    r#"<section class="products loading" id="products" data-section="grid">
    <div class="spinner" aria-hidden="true"></div>
    <span>جاري التحميل...</span>
</section>"#
        .to_string()
}

/// Render a single product card.
pub fn render_product_card(product: &Product, is_favorite: bool) -> String {
    let featured_badge = if product.featured {
        r#"<span class="badge featured">مميز</span>"#
    } else {
        ""
    };

    let unavailable_overlay = if product.is_available {
        ""
    } else {
        r#"<div class="unavailable-overlay"><span class="badge">غير متوفر</span></div>"#
    };

    let description = product
        .description
        .as_deref()
        .map(|d| format!(r#"<p class="product-description" dir="rtl">{}</p>"#, html_escape(d)))
        .unwrap_or_default();

    let (cart_label, disabled) = if product.is_available {
        ("أضف للسلة", "")
    } else {
        ("غير متوفر", " disabled")
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    {featured}
    <div class="product-image">
        <img src="{image}" alt="{name}" loading="lazy">
        <button class="favorite-toggle{fav_class}" data-action="toggle-favorite" data-product-id="{id}" aria-pressed="{fav}"></button>
        {overlay}
    </div>
    <div class="product-info">
        <span class="badge category">{category}</span>
        <h3 class="product-name" dir="rtl">{name}</h3>
        {description}
        <p class="product-price">{price}</p>
        <button class="add-to-cart" data-action="add-to-cart" data-product-id="{id}"{disabled}>{cart_label}</button>
    </div>
</article>"#,
        id = html_escape(product.id.as_str()),
        featured = featured_badge,
        image = html_escape(&product.image_url),
        name = html_escape(&product.name),
        fav_class = if is_favorite { " active" } else { "" },
        fav = is_favorite,
        overlay = unavailable_overlay,
        category = html_escape(product.category.label()),
        description = description,
        price = html_escape(&product.price.display()),
        disabled = disabled,
        cart_label = cart_label,
    )
}
