//! Print the products the grid would show.

use anyhow::{bail, Result};
use fakheem_storefront::CatalogState;
use serde::Serialize;

use super::{load_view, ListArgs};
use crate::context::Context;
use crate::output::product_flags;

#[derive(Serialize)]
struct ListedProduct<'a> {
    id: &'a str,
    name: &'a str,
    category: &'a str,
    price: String,
    featured: bool,
    is_available: bool,
}

/// Run the list command.
pub async fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let view = load_view(&args.grid, ctx).await?;

    if let CatalogState::Failed(ref reason) = *view.catalog() {
        bail!("Failed to load products: {}", reason);
    }

    let listing = view.displayed();

    if ctx.output.is_json() {
        let rows: Vec<ListedProduct<'_>> = listing
            .iter()
            .map(|p| ListedProduct {
                id: p.id.as_str(),
                name: &p.name,
                category: p.category.as_str(),
                price: p.price.display(),
                featured: p.featured,
                is_available: p.is_available,
            })
            .collect();
        ctx.output.json(&rows);
        return Ok(());
    }

    let params = listing.params();
    ctx.output.header(&format!(
        "{} of {} products ({}, {})",
        listing.len(),
        listing.catalog_size(),
        params.category.as_str(),
        params.sort_key.as_str()
    ));

    if listing.is_empty() {
        ctx.output.info("No products match the search");
        return Ok(());
    }

    let widths = [6, 28, 10, 14, 0];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", ""], &widths);
    for product in listing.iter() {
        let price = product.price.display();
        let flags = product_flags(product);
        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.name,
                product.category.label(),
                &price,
                &flags,
            ],
            &widths,
        );
    }

    Ok(())
}
