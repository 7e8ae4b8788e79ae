//! Footer section.

use super::html_escape;
use crate::config::StoreConfig;

/// Render the site footer.
pub fn render_footer(store: &StoreConfig) -> String {
    let links: String = ["الرئيسية", "المنتجات", "العروض", "من نحن", "اتصل بنا"]
        .iter()
        .map(|label| format!(r##"<li><a href="#">{}</a></li>"##, label))
        .collect();

    format!(
        r#"<footer class="site-footer" data-section="footer">
    <div class="footer-brand">
        <h2>{}</h2>
        <p>{}</p>
    </div>
    <nav class="footer-links">
        <h3>روابط سريعة</h3>
        <ul>{}</ul>
    </nav>
    <address class="footer-contact">
        <h3>معلومات التواصل</h3>
        <p dir="ltr">{}</p>
        <p>{}</p>
        <p>{}</p>
    </address>
    <p class="footer-legal">© {}. جميع الحقوق محفوظة.</p>
</footer>"#,
        html_escape(&store.name),
        html_escape(&store.tagline),
        links,
        html_escape(&store.contact.phone),
        html_escape(&store.contact.email),
        html_escape(&store.contact.address),
        html_escape(&store.name),
    )
}
