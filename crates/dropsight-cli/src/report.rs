//! Presentation of analyzed results: search, sort, pagination, table render,
//! and CSV export.
//!
//! Views borrow from the analyzed set and never mutate it; re-sorting or
//! filtering is always recomputed from the full list.

use clap::ValueEnum;
use dropsight_core::{AnalyzedProduct, CRITERIA};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Highest total score first.
    Highest,
    /// Lowest total score first.
    Lowest,
}

/// Applies search, sort, and pagination, in that order.
///
/// Search is a case-insensitive substring match on the product name. Sorting
/// is stable, so products with equal totals keep their pipeline order.
/// `page` is 1-based; without a `page_size` the whole filtered set is shown.
#[must_use]
pub fn apply_view<'a>(
    records: &'a [AnalyzedProduct],
    search: Option<&str>,
    sort: SortOrder,
    page: usize,
    page_size: Option<usize>,
) -> Vec<&'a AnalyzedProduct> {
    let needle = search.map(str::to_lowercase);

    let mut view: Vec<&AnalyzedProduct> = records
        .iter()
        .filter(|r| {
            needle
                .as_deref()
                .is_none_or(|n| r.product_name.to_lowercase().contains(n))
        })
        .collect();

    match sort {
        SortOrder::Highest => view.sort_by(|a, b| b.total_score.cmp(&a.total_score)),
        SortOrder::Lowest => view.sort_by(|a, b| a.total_score.cmp(&b.total_score)),
    }

    if let Some(size) = page_size {
        let size = size.max(1);
        let start = page.saturating_sub(1).saturating_mul(size);
        view = view.into_iter().skip(start).take(size).collect();
    }

    view
}

/// Renders the view as a plain terminal table.
#[must_use]
pub fn render_table(view: &[&AnalyzedProduct]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<40} {:>5}  {}\n",
        "#", "Product", "Score", "Insights"
    ));

    for (position, record) in view.iter().enumerate() {
        let name = truncate(&record.product_name, 40);
        out.push_str(&format!(
            "{:<4} {:<40} {:>5}  {}\n",
            position + 1,
            name,
            record.total_score,
            record.insights
        ));
    }

    out
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_owned()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

/// Serializes the view as CSV in display order.
///
/// Header: `Product Name`, `Total Score`, the ten canonical criterion names,
/// `Insights`. String fields are double-quote-wrapped (embedded quotes
/// doubled); numeric fields are bare. A criterion missing from a record's
/// score set leaves its cell empty.
#[must_use]
pub fn to_csv(view: &[&AnalyzedProduct]) -> String {
    let mut out = String::new();

    let mut header: Vec<String> = Vec::with_capacity(CRITERIA.len() + 3);
    header.push(quote("Product Name"));
    header.push(quote("Total Score"));
    header.extend(CRITERIA.iter().map(|name| quote(name)));
    header.push(quote("Insights"));
    out.push_str(&header.join(","));
    out.push('\n');

    for record in view {
        let mut row: Vec<String> = Vec::with_capacity(CRITERIA.len() + 3);
        row.push(quote(&record.product_name));
        row.push(record.total_score.to_string());
        for criterion in CRITERIA {
            let cell = record
                .scores
                .iter()
                .find(|s| s.name == criterion)
                .map(|s| s.score.to_string())
                .unwrap_or_default();
            row.push(cell);
        }
        row.push(quote(&record.insights));
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
