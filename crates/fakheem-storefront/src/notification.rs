//! Transient user notifications (toasts).

use serde::Serialize;

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient message shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    /// Catalog could not be loaded.
    pub fn fetch_failed() -> Self {
        Self::destructive("خطأ", "حدث خطأ أثناء تحميل المنتجات")
    }

    /// A product was added to the cart.
    pub fn added_to_cart(product_name: &str) -> Self {
        Self::new("تم إضافة المنتج", format!("تم إضافة {} إلى السلة", product_name))
    }

    pub fn favorite_added() -> Self {
        Self::new("تم الإضافة", "تم إضافة المنتج إلى المفضلة")
    }

    pub fn favorite_removed() -> Self {
        Self::new("تم الإزالة", "تم إزالة المنتج من المفضلة")
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Pending notifications, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.pending.push(notification);
    }

    /// Remove and return everything pending.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
