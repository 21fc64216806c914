//! Data table extraction.

use super::{Extraction, Intent};
use crate::text::list_item_text;
use centaur_core::{Item, TableRow};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_COLUMNS: [&str; 4] = ["ID", "Name", "Email", "Status"];

static COLUMNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bcolumns?\s*:\s*(.+)$").unwrap());

fn split_on(text: &str, separators: &[char]) -> Vec<String> {
    text.split(separators)
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect()
}

fn split_cells(text: &str) -> Vec<String> {
    split_on(text, &['|', ','])
}

pub fn extract(intent: &Intent<'_>) -> Extraction {
    let from_directive = intent
        .directive_text("columns")
        .map(|value| split_on(value, &[',']))
        .filter(|cols| !cols.is_empty());

    let columns_line = intent.each_line().find(|line| COLUMNS.is_match(line));
    let from_description = columns_line
        .and_then(|line| COLUMNS.captures(line))
        .map(|c| split_cells(&c[1]))
        .filter(|cols| !cols.is_empty());

    let columns = from_directive
        .or(from_description)
        .unwrap_or_else(|| DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect());

    let rows = intent
        .each_line()
        .filter(|line| Some(*line) != columns_line)
        .filter(|line| line.contains('|') || line.contains(','))
        .map(|line| split_cells(list_item_text(line)))
        .filter(|cells| !cells.is_empty())
        .map(|cells| Item::TableRow(TableRow { cells }));

    let mut out = Extraction::new();
    out.items = rows.collect();
    out.set("columns", columns);
    out.set("sortable", intent.mentions("sort"));
    out.set("searchable", intent.mentions_any(&["search", "filter"]));
    out.set("paginated", intent.mentions_any(&["paginat", "pages"]));
    out.set("striped", intent.mentions("stripe"));
    out.set("hoverable", intent.mentions("hover"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::test_support::{run, run_with};
    use centaur_core::{ComponentKind, OptionValue};

    fn rows(out: &Extraction) -> Vec<Vec<String>> {
        out.items
            .iter()
            .filter_map(|item| match item {
                Item::TableRow(row) => Some(row.cells.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_default_columns() {
        let out = run(ComponentKind::Table, "A table of users");
        assert_eq!(
            out.options.get("columns"),
            Some(&OptionValue::List(vec!["ID".into(), "Name".into(), "Email".into(), "Status".into()]))
        );
        assert!(out.items.is_empty());
    }

    #[test]
    fn test_columns_phrase_and_rows() {
        let text = "Columns: Product, Price, Stock\n- Widget | 9.99 | 12\n- Gadget, 19.99, \nSortable, striped rows";
        let out = run(ComponentKind::Table, text);
        assert_eq!(
            out.options.get("columns"),
            Some(&OptionValue::List(vec!["Product".into(), "Price".into(), "Stock".into()]))
        );
        let rows = rows(&out);
        assert_eq!(rows[0], vec!["Widget", "9.99", "12"]);
        assert_eq!(rows[1], vec!["Gadget", "19.99"]);
        // The flags line contains a comma too.
        assert_eq!(rows[2], vec!["Sortable", "striped rows"]);
        assert_eq!(out.options.get("sortable"), Some(&OptionValue::Bool(true)));
        assert_eq!(out.options.get("striped"), Some(&OptionValue::Bool(true)));
        assert_eq!(out.options.get("searchable"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn test_directive_columns_win() {
        let out = run_with(
            ComponentKind::Table,
            "Columns: A, B\nSearch and pagination, hover",
            &[("columns", "Id, , Title")],
        );
        assert_eq!(
            out.options.get("columns"),
            Some(&OptionValue::List(vec!["Id".into(), "Title".into()]))
        );
        assert_eq!(out.options.get("searchable"), Some(&OptionValue::Bool(true)));
        assert_eq!(out.options.get("paginated"), Some(&OptionValue::Bool(true)));
        assert_eq!(out.options.get("hoverable"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn test_directive_columns_split_on_commas_only() {
        let out = run_with(ComponentKind::Table, "A table", &[("columns", "A|B, C")]);
        assert_eq!(
            out.options.get("columns"),
            Some(&OptionValue::List(vec!["A|B".into(), "C".into()]))
        );
    }
}
