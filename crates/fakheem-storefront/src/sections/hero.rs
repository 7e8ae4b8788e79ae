//! Hero banner section.

use super::html_escape;
use crate::config::StoreConfig;

/// Render the hero banner.
pub fn render_hero(store: &StoreConfig) -> String {
    format!(
        r##"<section class="hero" data-section="hero">
    <div class="hero-content">
        <span class="hero-eyebrow">مجموعة حصرية</span>
        <h1 class="hero-headline">{}</h1>
        <p class="hero-subheadline">اكتشف مجموعة استثنائية من المجوهرات الفاخرة والإكسسوارات الراقية المصممة خصيصاً لتلبي ذوقك الرفيع وتضفي لمسة من الأناقة على إطلالتك</p>
        <div class="hero-actions">
            <a href="#products" class="hero-cta secondary">تصفح المجموعات</a>
            <a href="#products" class="hero-cta">تسوق الآن</a>
        </div>
        <ul class="hero-stats">
            <li><strong>500+</strong> منتج فاخر</li>
            <li><strong>5000+</strong> عميل سعيد</li>
            <li><strong>10+</strong> سنوات خبرة</li>
        </ul>
    </div>
</section>"##,
        html_escape(&store.name)
    )
}
