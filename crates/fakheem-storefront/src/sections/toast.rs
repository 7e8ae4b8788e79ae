//! Toast region for pending notifications.

use super::html_escape;
use crate::notification::{Notification, NotificationVariant};

/// Render pending notifications; empty when there are none.
pub fn render_toasts(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return String::new();
    }

    let items: String = notifications
        .iter()
        .map(|n| {
            let variant = match n.variant {
                NotificationVariant::Default => "default",
                NotificationVariant::Destructive => "destructive",
            };
            format!(
                r#"<li class="toast {}" role="status"><strong>{}</strong><p>{}</p></li>"#,
                variant,
                html_escape(&n.title),
                html_escape(&n.description)
            )
        })
        .collect();

    format!(r#"<ol class="toasts" aria-live="polite">{}</ol>"#, items)
}
