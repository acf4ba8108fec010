//! Product comparison command.

use anyhow::Result;
use fithaven_storefront::pages::{ComparisonPage, NO_COMPARISON_MESSAGE};

use super::CompareArgs;
use crate::context::Context;
use crate::output::truncate;

const LABEL_WIDTH: usize = 14;
const CELL_WIDTH: usize = 24;

/// Run the compare command.
pub async fn run(args: CompareArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let page = if args.ids.is_empty() {
        store.comparison_page()?
    } else {
        ComparisonPage::open(store.catalog(), &args.ids)?
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "products": page.set().products(),
            "rows": page.rows(),
        }));
        return Ok(());
    }

    ctx.output.header("Compare Products");
    if page.is_empty() {
        ctx.output.info(NO_COMPARISON_MESSAGE);
        return Ok(());
    }

    let names: Vec<String> = page
        .set()
        .products()
        .iter()
        .map(|p| truncate(&p.name, CELL_WIDTH))
        .collect();
    let mut widths = vec![LABEL_WIDTH];
    widths.extend(std::iter::repeat(CELL_WIDTH).take(names.len()));

    let mut header: Vec<&str> = vec![""];
    header.extend(names.iter().map(String::as_str));
    ctx.output.table_row(&header, &widths);

    for row in page.rows() {
        let cells: Vec<String> = row
            .values
            .iter()
            .map(|v| truncate(v.as_deref().unwrap_or("-"), CELL_WIDTH))
            .collect();
        let label = truncate(&row.label, LABEL_WIDTH);
        let mut cols: Vec<&str> = vec![label.as_str()];
        cols.extend(cells.iter().map(String::as_str));
        ctx.output.table_row(&cols, &widths);
    }
    Ok(())
}
