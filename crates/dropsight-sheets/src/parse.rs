//! Strict row decoding: raw cell grid → `ProductStub` records.

use dropsight_core::{ColumnOrder, ProductStub};

/// Decodes raw sheet rows into product stubs.
///
/// The first row is always treated as a header and discarded. For each
/// remaining row the name and creative-link cells are selected per
/// `column_order`, trimmed, and validated: rows with fewer than two cells or
/// with either field empty after trim are dropped without error. Survivors
/// keep their input order.
#[must_use]
pub fn parse_rows(values: &[Vec<String>], column_order: ColumnOrder) -> Vec<ProductStub> {
    let mut stubs = Vec::new();

    for (row_index, row) in values.iter().enumerate().skip(1) {
        let (name_cell, link_cell) = match column_order {
            ColumnOrder::NameThenLink => (row.first(), row.get(1)),
            ColumnOrder::LinkThenName => (row.get(1), row.first()),
        };

        let name = name_cell.map(|c| c.trim()).unwrap_or_default();
        let link = link_cell.map(|c| c.trim()).unwrap_or_default();

        if name.is_empty() || link.is_empty() {
            tracing::debug!(row = row_index, "dropping row with missing name or creative link");
            continue;
        }

        stubs.push(ProductStub::new(name.to_owned(), link.to_owned()));
    }

    stubs
}

#[cfg(test)]
mod tests {
    use dropsight_core::AnalysisStatus;

    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| (*c).to_string()).collect())
            .collect()
    }

    #[test]
    fn header_row_is_always_discarded() {
        let values = grid(&[&["Product", "Creative Folder"]]);
        assert!(parse_rows(&values, ColumnOrder::NameThenLink).is_empty());
    }

    #[test]
    fn valid_rows_become_analyzing_stubs() {
        let values = grid(&[
            &["Product", "Creative Folder"],
            &["Widget", "https://drive.google.com/folder/a"],
            &["Gadget", "https://drive.google.com/folder/b"],
        ]);
        let stubs = parse_rows(&values, ColumnOrder::NameThenLink);
        assert_eq!(stubs.len(), 2);
        assert_eq!(stubs[0].product_name, "Widget");
        assert_eq!(stubs[1].product_name, "Gadget");
        assert_eq!(stubs[0].status, AnalysisStatus::Analyzing);
        assert_eq!(
            stubs[0].video_creative_folder_link,
            "https://drive.google.com/folder/a"
        );
    }

    #[test]
    fn rows_with_empty_name_or_link_are_dropped() {
        let values = grid(&[
            &["Product", "Creative Folder"],
            &["", "driveLinkX"],
            &["Widget", "driveLinkX"],
            &["Widget", ""],
        ]);
        let stubs = parse_rows(&values, ColumnOrder::NameThenLink);
        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].product_name, "Widget");
    }

    #[test]
    fn whitespace_only_cells_count_as_empty() {
        let values = grid(&[
            &["Product", "Creative Folder"],
            &["  ", "driveLinkX"],
            &["  Widget  ", "  driveLinkX  "],
        ]);
        let stubs = parse_rows(&values, ColumnOrder::NameThenLink);
        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].product_name, "Widget");
        assert_eq!(stubs[0].video_creative_folder_link, "driveLinkX");
    }

    #[test]
    fn short_rows_are_dropped_not_indexed_past() {
        let values = grid(&[
            &["Product", "Creative Folder"],
            &["Widget"],
            &[],
            &["Gadget", "driveLinkY"],
        ]);
        let stubs = parse_rows(&values, ColumnOrder::NameThenLink);
        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].product_name, "Gadget");
    }

    #[test]
    fn survivor_order_matches_input_order() {
        let values = grid(&[
            &["Product", "Creative Folder"],
            &["A", "l1"],
            &["", "l2"],
            &["B", "l3"],
            &["C", ""],
            &["D", "l5"],
        ]);
        let names: Vec<String> = parse_rows(&values, ColumnOrder::NameThenLink)
            .into_iter()
            .map(|s| s.product_name)
            .collect();
        assert_eq!(names, ["A", "B", "D"]);
    }

    #[test]
    fn legacy_layout_swaps_the_columns() {
        let values = grid(&[
            &["Creative Folder", "Product"],
            &["https://drive.google.com/folder/a", "Widget"],
        ]);
        let stubs = parse_rows(&values, ColumnOrder::LinkThenName);
        assert_eq!(stubs.len(), 1);
        assert_eq!(stubs[0].product_name, "Widget");
        assert_eq!(
            stubs[0].video_creative_folder_link,
            "https://drive.google.com/folder/a"
        );
    }

    #[test]
    fn empty_grid_yields_no_stubs() {
        assert!(parse_rows(&[], ColumnOrder::NameThenLink).is_empty());
    }
}
