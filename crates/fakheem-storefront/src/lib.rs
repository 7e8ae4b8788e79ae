//! Storefront view binding for Fakheem.
//!
//! This crate provides:
//! - `StorefrontView` - grid parameters, catalog snapshot and selection for one session
//! - `StorefrontConfig` - store, listing, logging and theme settings
//! - `sections` - HTML fragments for the header, hero, product grid and footer
//! - `Notification` - toasts queued by view actions
//!
//! # Example
//!
//! ```no_run
//! use fakheem_data::StaticSource;
//! use fakheem_storefront::{StorefrontConfig, StorefrontView};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let source = StaticSource::from_json(r#"[]"#)?;
//! let mut view = StorefrontView::new(StorefrontConfig::default());
//! view.mount(&source).await;
//! let html = view.render();
//! # let _ = html;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod notification;
pub mod sections;
pub mod theme;
pub mod view;

pub use config::StorefrontConfig;
pub use error::ViewError;
pub use notification::{Notification, NotificationVariant};
pub use theme::{MemoryThemeStore, Theme, ThemeStore};
pub use view::{CatalogState, StorefrontView, ViewEvent};
