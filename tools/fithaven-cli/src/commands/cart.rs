//! Cart pricing command.

use std::str::FromStr;

use anyhow::{bail, Result};
use fithaven_commerce::cart::CartSummary;
use fithaven_commerce::ProductId;
use fithaven_storefront::pages::EMPTY_CART_MESSAGE;

use super::CartArgs;
use crate::context::Context;

/// A `--add` value: a product and how many of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartEntry {
    pub id: ProductId,
    pub quantity: i64,
}

impl FromStr for CartEntry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, quantity) = match s.split_once(':') {
            Some((id, quantity)) => (id, quantity),
            None => (s, "1"),
        };
        let id = id
            .parse::<ProductId>()
            .map_err(|e| format!("invalid product id '{}': {}", id, e))?;
        let quantity = quantity
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid quantity '{}': {}", quantity, e))?;
        Ok(Self { id, quantity })
    }
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    if args.items.is_empty() {
        store.seed_demo_cart()?;
        ctx.output.debug("No --add given, using the demo cart");
    }

    for entry in &args.items {
        if entry.quantity < 1 {
            bail!("Quantity for product {} must be at least 1", entry.id);
        }
        let product = match store.catalog().product(entry.id) {
            Some(product) => product.clone(),
            None => bail!("Product not found: {}", entry.id),
        };
        let notice = store.cart.add_item(&product, entry.quantity)?;
        ctx.output.debug(&notice.message);
    }

    let mut page = store.cart_page();
    for id in &args.remove {
        let notice = page.remove(*id)?;
        ctx.output.debug(&notice.message);
    }

    let summary = page.summary()?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": page.lines(),
            "pricing": summary.pricing(),
        }));
        return Ok(());
    }

    ctx.output.header("Shopping Cart");
    let pricing = match &summary {
        CartSummary::Empty => {
            ctx.output.info(EMPTY_CART_MESSAGE);
            return Ok(());
        }
        CartSummary::Priced(pricing) => pricing,
    };

    let widths = [28, 10, 4, 10];
    ctx.output
        .table_row(&["ITEM", "PRICE", "QTY", "TOTAL"], &widths);
    for (line, priced) in page.lines().iter().zip(&pricing.line_items) {
        ctx.output.table_row(
            &[
                &line.product_name,
                &line.unit_price.display(),
                &line.quantity.to_string(),
                &priced.line_total.display(),
            ],
            &widths,
        );
    }

    ctx.output.header("Order Summary");
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    ctx.output.kv("Shipping", &pricing.shipping_label());
    ctx.output.kv("Tax", &pricing.tax.display());
    ctx.output.kv("Total", &pricing.total.display());
    if let Some(hint) = page.free_shipping_hint(pricing) {
        println!();
        ctx.output.info(&hint);
    }
    Ok(())
}
