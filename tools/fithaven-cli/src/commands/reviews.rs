//! Product reviews command.

use anyhow::Result;
use fithaven_commerce::reviews::ReviewDraft;
use fithaven_commerce::ReviewId;

use super::ReviewsArgs;
use crate::context::Context;
use crate::output::percent_bar;

/// Run the reviews command.
pub async fn run(args: ReviewsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let mut page = store.product_page(args.product)?;

    if let Some(review_id) = args.helpful {
        let count = page.reviews_mut().mark_helpful(ReviewId::new(review_id))?;
        ctx.output
            .success(&format!("Marked review {} helpful ({})", review_id, count));
    }

    if let Some(rating) = args.rating {
        let board = page.reviews_mut();
        board.toggle_form();
        board.draft = ReviewDraft {
            author: args.name,
            rating,
            title: args.title,
            body: args.body,
        };
        let notice = page.submit_review()?;
        ctx.output.notice(&notice);
    }

    let board = page.reviews();
    let summary = board.summary();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product_id": board.product_id(),
            "summary": summary,
            "reviews": board.reviews(),
        }));
        return Ok(());
    }

    ctx.output
        .header(&format!("Customer Reviews: {}", page.product().name));
    if summary.is_empty() {
        ctx.output.info(&summary.average_display());
        return Ok(());
    }

    ctx.output.kv(
        "Average",
        &format!(
            "{} {} ({} reviews)",
            summary.average_display(),
            summary.render_stars(),
            summary.total_reviews
        ),
    );
    for (stars, count, percent) in summary.bars() {
        ctx.output.table_row(
            &[
                &format!("{} star", stars),
                &percent_bar(percent, 20),
                &format!("{:.0}%", percent),
                &count.to_string(),
            ],
            &[6, 20, 4, 4],
        );
    }

    for review in board.reviews().iter().rev() {
        ctx.output.header(&format!("{} {}", review.render_stars(), review.title));
        let verified = if review.verified { " (Verified Purchase)" } else { "" };
        ctx.output.kv(
            "By",
            &format!("{}{} on {}", review.author, verified, review.date),
        );
        println!("  {}", review.body);
        ctx.output.kv(
            "Helpful",
            &format!("{} (review {})", review.helpful, review.id),
        );
    }
    Ok(())
}
