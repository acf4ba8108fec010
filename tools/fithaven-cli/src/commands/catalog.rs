//! Catalog listing command.

use anyhow::Result;
use fithaven_commerce::catalog::render_stars;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::{price_tag, truncate};

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let mut page = store.catalog_page();

    if args.categories {
        let categories = page.categories();
        if ctx.output.is_json() {
            ctx.output.json(&categories);
            return Ok(());
        }
        ctx.output.header("Categories");
        for category in &categories {
            ctx.output.list_item(category);
        }
        return Ok(());
    }

    page.set_search(args.search);
    page.set_category(args.category);
    page.set_sort(args.sort);
    ctx.output.debug(&format!(
        "Query: search='{}' category={} sort={}",
        page.query().search_term,
        page.query().category.as_str(),
        page.query().sort
    ));

    let has_filters = page.query().has_filters();
    let results = page.results();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "summary": results.summary(),
            "total": results.total,
            "products": results.items,
        }));
        return Ok(());
    }

    ctx.output.header("Our Products");
    if results.is_empty() {
        ctx.output.warn(&results.summary());
        if has_filters {
            ctx.output
                .info("Try adjusting your search or filters (--search \"\" --category all)");
        }
        return Ok(());
    }

    let widths = [4, 28, 14, 10, 6];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "RATING"], &widths);
    for product in &results.items {
        let id = product.id.to_string();
        let name = truncate(&product.name, widths[1]);
        let price = product.price.display();
        let stars = render_stars(product.rating);
        ctx.output.table_row(
            &[&id, &name, &product.category, &price, &stars],
            &widths,
        );
    }

    let on_sale: Vec<String> = results
        .items
        .iter()
        .filter(|p| p.is_on_sale())
        .map(|p| {
            let original = p.original_price.map(|m| m.display());
            format!(
                "{} {} (-{}%)",
                p.name,
                price_tag(&p.price.display(), original.as_deref()),
                p.discount_percent()
            )
        })
        .collect();
    if !on_sale.is_empty() {
        ctx.output.header("On sale");
        for line in &on_sale {
            ctx.output.list_item(line);
        }
    }

    println!();
    ctx.output.info(&results.summary());
    Ok(())
}
