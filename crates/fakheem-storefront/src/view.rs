//! Storefront view binding.
//!
//! `StorefrontView` owns the grid parameters, the catalog snapshot, the
//! shopper's selection and the pending notifications. Every parameter change
//! is picked up the next time [`StorefrontView::displayed`] or
//! [`StorefrontView::render`] runs; nothing is cached between calls.

use std::time::Instant;

use fakheem_commerce::prelude::*;
use fakheem_data::ProductSource;
use fakheem_observability::StructuredLogger;

use crate::config::StorefrontConfig;
use crate::error::ViewError;
use crate::notification::{Notification, NotificationQueue};
use crate::sections;
use crate::theme::{MemoryThemeStore, Theme, ThemeStore};

/// Where the catalog fetch stands.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// Fetch not finished.
    Loading,
    /// Catalog loaded.
    Ready(Vec<Product>),
    /// Fetch failed; the catalog is treated as empty.
    Failed(String),
}

impl CatalogState {
    /// Loaded products, empty unless the fetch succeeded.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Ready(products) => products,
            CatalogState::Loading | CatalogState::Failed(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CatalogState::Failed(_))
    }
}

/// A shopper interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Search box text changed.
    SearchChanged(String),
    /// Category button clicked (`"all"` or a tag).
    CategorySelected(String),
    /// Sort dropdown changed.
    SortSelected(SortKey),
    /// Add-to-cart clicked on a product card.
    AddToCart(ProductId),
    /// Heart clicked on a product card.
    ToggleFavorite(ProductId),
    /// Theme button clicked.
    ToggleTheme,
}

/// The product grid page and its state for one session.
pub struct StorefrontView {
    config: StorefrontConfig,
    params: FilterSortParams,
    catalog: CatalogState,
    selection: SelectionState,
    notifications: NotificationQueue,
    theme: Theme,
    theme_store: Box<dyn ThemeStore>,
    engine: FilterSortEngine,
    logger: StructuredLogger,
}

impl StorefrontView {
    /// Create a view with in-memory theme storage.
    pub fn new(config: StorefrontConfig) -> Self {
        let logger = build_logger(&config, "local");
        let params = default_params(&config);
        let theme = config.theme.default;

        Self {
            config,
            params,
            catalog: CatalogState::Loading,
            selection: SelectionState::new(),
            notifications: NotificationQueue::new(),
            theme,
            theme_store: Box::new(MemoryThemeStore::new()),
            engine: FilterSortEngine::new(),
            logger,
        }
    }

    /// Tag log entries with a session ID.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.logger = build_logger(&self.config, session_id);
        self
    }

    /// Use a theme store, reading the stored preference from it.
    pub fn with_theme_store(mut self, store: Box<dyn ThemeStore>) -> Self {
        self.theme = Theme::from_stored(store.load().as_deref()).unwrap_or(self.config.theme.default);
        self.theme_store = store;
        self
    }

    /// Reset parameters and load the catalog.
    ///
    /// Parameters go back to an empty query, all categories and
    /// `listing.default_sort` from the config, which is `name` unless
    /// configured otherwise. A failed fetch leaves the catalog empty and
    /// queues an error notification; it is not retried.
    pub async fn mount(&mut self, source: &dyn ProductSource) {
        self.params = default_params(&self.config);
        self.load(source).await;
    }

    /// Load the catalog again, keeping the current parameters.
    pub async fn refresh(&mut self, source: &dyn ProductSource) {
        self.load(source).await;
    }

    async fn load(&mut self, source: &dyn ProductSource) {
        self.catalog = CatalogState::Loading;
        let started = Instant::now();

        match source.list_available_products().await {
            Ok(products) => {
                self.logger
                    .info_builder("catalog loaded")
                    .field("source", source.name())
                    .field("products", products.len())
                    .duration_ms("fetch_ms", started.elapsed())
                    .emit();
                let currency = self.config.store.currency;
                if let Some(p) = products.iter().find(|p| p.price.currency != currency) {
                    self.logger
                        .warn_builder("product priced outside store currency")
                        .field("product_id", p.id.as_str())
                        .field("price_currency", p.price.currency.code())
                        .field("store_currency", currency.code())
                        .emit();
                }
                self.catalog = CatalogState::Ready(products);
            }
            Err(e) => {
                self.logger
                    .error_builder("catalog fetch failed")
                    .field("source", source.name())
                    .field("error", e.to_string())
                    .duration_ms("fetch_ms", started.elapsed())
                    .emit();
                self.notifications.push(Notification::fetch_failed());
                self.catalog = CatalogState::Failed(e.to_string());
            }
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.params.search_query = query.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.params.category = category;
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.params.sort_key = sort_key;
    }

    /// The products the grid shows for the current parameters.
    pub fn displayed(&self) -> Listing<'_> {
        self.engine.listing(self.catalog.products(), &self.params)
    }

    /// Add a catalog product to the cart.
    ///
    /// Returns the new cart size. Unavailable products are refused here;
    /// the selection state itself does not check availability.
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<usize, ViewError> {
        let product = self
            .catalog
            .products()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| ViewError::ProductNotFound(id.clone()))?;

        if !product.is_available {
            return Err(ViewError::ProductUnavailable(id.clone()));
        }

        self.notifications
            .push(Notification::added_to_cart(&product.name));
        self.selection.add_to_cart(product);

        self.logger
            .debug_builder("added to cart")
            .field("product_id", id.as_str())
            .field("cart_count", self.selection.cart_count())
            .emit();

        Ok(self.selection.cart_count())
    }

    /// Add or remove a product from favorites.
    pub fn toggle_favorite(&mut self, id: &ProductId) -> ToggleOutcome {
        let outcome = self.selection.toggle_favorite(id);

        self.notifications.push(if outcome.added {
            Notification::favorite_added()
        } else {
            Notification::favorite_removed()
        });

        self.logger
            .debug_builder("favorite toggled")
            .field("product_id", id.as_str())
            .field("added", outcome.added)
            .emit();

        outcome
    }

    /// Switch between light and dark and store the choice.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme_store.save(self.theme.as_str());
        self.theme
    }

    /// Apply a shopper interaction.
    pub fn handle(&mut self, event: ViewEvent) -> Result<(), ViewError> {
        match event {
            ViewEvent::SearchChanged(query) => self.set_search_query(query),
            ViewEvent::CategorySelected(value) => self.set_category(CategoryFilter::parse(&value)),
            ViewEvent::SortSelected(sort_key) => self.set_sort_key(sort_key),
            ViewEvent::AddToCart(id) => {
                self.add_to_cart(&id)?;
            }
            ViewEvent::ToggleFavorite(id) => {
                self.toggle_favorite(&id);
            }
            ViewEvent::ToggleTheme => {
                self.toggle_theme();
            }
        }
        Ok(())
    }

    /// Remove and return pending notifications.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    pub fn pending_notifications(&self) -> &[Notification] {
        self.notifications.pending()
    }

    /// Render the whole page.
    pub fn render(&self) -> String {
        sections::render_page(self)
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn params(&self) -> &FilterSortParams {
        &self.params
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.catalog.is_loading()
    }

    pub fn cart_count(&self) -> usize {
        self.selection.cart_count()
    }

    /// Cart total in the store currency.
    pub fn cart_subtotal(&self) -> Result<Money, CommerceError> {
        self.selection.cart_subtotal(self.config.store.currency)
    }
}

fn default_params(config: &StorefrontConfig) -> FilterSortParams {
    FilterSortParams::new().with_sort(config.listing.default_sort)
}

fn build_logger(config: &StorefrontConfig, session_id: impl Into<String>) -> StructuredLogger {
    StructuredLogger::new(session_id)
        .with_component("storefront")
        .with_format(config.logging.format)
        .with_min_level(config.logging.min_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_view() -> StorefrontView {
        let mut view = StorefrontView::new(StorefrontConfig::default());
        view.catalog = CatalogState::Ready(vec![
            Product::new("1", "خاتم", Money::new(10000, Currency::SAR), "women"),
            Product::new("2", "ساعة", Money::new(5000, Currency::SAR), "men")
                .with_featured(true),
            Product::new("3", "سوار", Money::new(7000, Currency::SAR), "women")
                .with_available(false),
        ]);
        view
    }

    #[test]
    fn test_starts_loading_with_empty_listing() {
        let view = StorefrontView::new(StorefrontConfig::default());
        assert!(view.is_loading());
        assert!(view.displayed().is_empty());
        assert_eq!(view.params(), &FilterSortParams::new());
    }

    #[test]
    fn test_parameter_changes_recompute() {
        let mut view = ready_view();
        view.set_sort_key(SortKey::PriceLow);
        let ids: Vec<&str> = view.displayed().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);

        view.set_category(CategoryFilter::only("women"));
        view.set_search_query("سوار");
        let ids: Vec<&str> = view.displayed().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn test_add_to_cart_notifies() {
        let mut view = ready_view();
        assert_eq!(view.add_to_cart(&ProductId::new("1")), Ok(1));
        assert_eq!(view.add_to_cart(&ProductId::new("1")), Ok(2));

        let notifications = view.take_notifications();
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0], Notification::added_to_cart("خاتم"));
    }

    #[test]
    fn test_add_unavailable_is_refused() {
        let mut view = ready_view();
        let id = ProductId::new("3");
        assert_eq!(view.add_to_cart(&id), Err(ViewError::ProductUnavailable(id)));
        assert_eq!(view.cart_count(), 0);
        assert!(view.pending_notifications().is_empty());
    }

    #[test]
    fn test_add_unknown_is_refused() {
        let mut view = ready_view();
        let id = ProductId::new("nope");
        assert_eq!(view.add_to_cart(&id), Err(ViewError::ProductNotFound(id)));
    }

    #[test]
    fn test_toggle_favorite_notifies_both_ways() {
        let mut view = ready_view();
        let id = ProductId::new("1");

        assert!(view.toggle_favorite(&id).added);
        assert!(!view.toggle_favorite(&id).added);
        assert!(!view.selection().is_favorite(&id));

        let notifications = view.take_notifications();
        assert_eq!(
            notifications,
            vec![Notification::favorite_added(), Notification::favorite_removed()]
        );
    }

    #[test]
    fn test_cart_subtotal_in_store_currency() {
        let mut view = ready_view();
        assert_eq!(view.cart_subtotal(), Ok(Money::zero(Currency::SAR)));

        view.add_to_cart(&ProductId::new("1")).unwrap();
        view.add_to_cart(&ProductId::new("2")).unwrap();
        assert_eq!(view.cart_subtotal(), Ok(Money::new(15000, Currency::SAR)));
        assert!(view.render().contains("150.00 ر.س"));
    }

    #[tokio::test]
    async fn test_mount_resets_to_configured_sort() {
        let mut config = StorefrontConfig::default();
        config.listing.default_sort = SortKey::PriceHigh;
        let mut view = StorefrontView::new(config);

        view.set_sort_key(SortKey::Featured);
        view.set_search_query("خاتم");
        view.mount(&fakheem_data::StaticSource::default()).await;

        assert_eq!(view.params(), &FilterSortParams::new().with_sort(SortKey::PriceHigh));
    }

    #[tokio::test]
    async fn test_mount_resets_to_name_by_default() {
        let mut view = StorefrontView::new(StorefrontConfig::default());
        view.set_sort_key(SortKey::PriceLow);
        view.mount(&fakheem_data::StaticSource::default()).await;

        assert_eq!(view.params().sort_key, SortKey::Name);
    }

    #[test]
    fn test_theme_store_is_read_and_written() {
        let mut view = StorefrontView::new(StorefrontConfig::default())
            .with_theme_store(Box::new(MemoryThemeStore::with_value("dark")));
        assert_eq!(view.theme(), Theme::Dark);

        assert_eq!(view.toggle_theme(), Theme::Light);
        assert_eq!(view.theme_store.load().as_deref(), Some("light"));
    }

    #[test]
    fn test_handle_events() {
        let mut view = ready_view();
        view.handle(ViewEvent::CategorySelected("men".to_string())).unwrap();
        view.handle(ViewEvent::AddToCart(ProductId::new("2"))).unwrap();
        view.handle(ViewEvent::ToggleTheme).unwrap();

        assert_eq!(view.params().category, CategoryFilter::only("men"));
        assert_eq!(view.cart_count(), 1);
        assert_eq!(view.theme(), Theme::Dark);
        assert!(view.handle(ViewEvent::AddToCart(ProductId::new("3"))).is_err());
    }
}
