//! Product detail command.

use anyhow::Result;
use fithaven_commerce::catalog::render_stars;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{percent_bar, price_tag};

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;
    let mut page = store.product_page(args.id)?;

    if let Some(quantity) = args.quantity {
        page.quantity.set(quantity);
    }
    let notice = match args.quantity {
        Some(_) => Some(page.add_to_cart(&mut store.cart)?),
        None => None,
    };

    let product = page.product();
    let summary = page.reviews().summary();

    if ctx.output.is_json() {
        let pricing = store.cart_page().summary()?;
        ctx.output.json(&serde_json::json!({
            "product": product,
            "discount_percent": page.discount_percent(),
            "reviews": summary,
            "cart": pricing.pricing(),
        }));
        return Ok(());
    }

    ctx.output.header(&product.name);
    let original = product.original_price.map(|m| m.display());
    ctx.output.kv(
        "Price",
        &price_tag(&product.price.display(), original.as_deref()),
    );
    if let Some(savings) = page.savings() {
        ctx.output.kv(
            "You save",
            &format!("{} ({}% off)", savings.display(), page.discount_percent()),
        );
    }
    ctx.output.kv("Rating", &render_stars(product.rating));
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Images", &page.images().len().to_string());
    if let Some(description) = &product.description {
        println!("\n  {}", description);
    }

    if !product.features.is_empty() {
        ctx.output.header("Key Features");
        for feature in &product.features {
            ctx.output.list_item(feature);
        }
    }

    if !product.specifications.is_empty() {
        ctx.output.header("Specifications");
        for spec in &product.specifications {
            ctx.output.kv(&spec.name, &spec.value);
        }
    }

    ctx.output.header("Customer Reviews");
    ctx.output.kv(
        "Average",
        &format!("{} {}", summary.average_display(), summary.render_stars()),
    );
    ctx.output
        .kv("Based on", &format!("{} reviews", summary.total_reviews));
    for (stars, count, percent) in summary.bars() {
        ctx.output.table_row(
            &[
                &format!("{} star", stars),
                &percent_bar(percent, 20),
                &count.to_string(),
            ],
            &[6, 20, 4],
        );
    }

    if let Some(notice) = notice {
        println!();
        ctx.output.notice(&notice);
        if let Some(pricing) = store.cart_page().summary()?.pricing() {
            ctx.output.kv("Cart total", &pricing.total.display());
        }
    }
    Ok(())
}
