//! CLI command implementations.

pub mod config;
pub mod list;
pub mod render;

use std::str::FromStr;

use anyhow::Result;
use clap::{Args, Subcommand};
use fakheem_commerce::search::SortKey;
use fakheem_data::JsonFileSource;
use fakheem_storefront::{StorefrontView, ViewEvent};

use crate::context::Context;

/// Catalog and grid parameters shared by `render` and `list`.
#[derive(Args)]
pub struct GridArgs {
    /// JSON export of the products table.
    #[arg(short = 'p', long, default_value = "products.json")]
    pub products: String,

    /// Search text matched against names and descriptions.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category tag, or "all".
    #[arg(long)]
    pub category: Option<String>,

    /// Sort order: name, price-low, price-high or featured.
    #[arg(long)]
    pub sort: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Write the page here instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,

    /// Render with the dark theme.
    #[arg(long)]
    pub dark: bool,
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub grid: GridArgs,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default configuration file.
    Init {
        /// Output path.
        #[arg(default_value = "fakheem.toml")]
        path: String,
        /// Overwrite without asking.
        #[arg(short, long)]
        force: bool,
    },
    /// Check that a configuration file parses.
    Validate {
        /// Config path (default: the loaded config).
        path: Option<String>,
    },
}

/// Mount a view over the catalog file and apply the grid arguments.
pub(crate) async fn load_view(args: &GridArgs, ctx: &Context) -> Result<StorefrontView> {
    let path = ctx.resolve_path(&args.products);
    let source = JsonFileSource::new(&path).with_currency(ctx.config.store.currency);
    ctx.output.debug(&format!("Reading catalog from {}", path.display()));

    let mut view = StorefrontView::new(ctx.config.clone()).with_session_id("cli");

    let spinner = ctx.output.spinner("Loading products...");
    view.mount(&source).await;
    spinner.finish_and_clear();

    for event in grid_events(args)? {
        view.handle(event)?;
    }

    Ok(view)
}

fn grid_events(args: &GridArgs) -> Result<Vec<ViewEvent>> {
    let mut events = Vec::new();
    if let Some(ref query) = args.search {
        events.push(ViewEvent::SearchChanged(query.clone()));
    }
    if let Some(ref category) = args.category {
        events.push(ViewEvent::CategorySelected(category.clone()));
    }
    if let Some(ref sort) = args.sort {
        events.push(ViewEvent::SortSelected(SortKey::from_str(sort)?));
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(sort: Option<&str>) -> GridArgs {
        GridArgs {
            products: "products.json".to_string(),
            search: Some("خاتم".to_string()),
            category: Some("women".to_string()),
            sort: sort.map(str::to_string),
        }
    }

    #[test]
    fn test_grid_events_in_order() {
        let events = grid_events(&grid(Some("price-high"))).unwrap();
        assert_eq!(
            events,
            vec![
                ViewEvent::SearchChanged("خاتم".to_string()),
                ViewEvent::CategorySelected("women".to_string()),
                ViewEvent::SortSelected(SortKey::PriceHigh),
            ]
        );
    }

    #[test]
    fn test_unknown_sort_rejected() {
        let err = grid_events(&grid(Some("cheapest"))).unwrap_err();
        assert!(err.to_string().contains("cheapest"));
    }
}
