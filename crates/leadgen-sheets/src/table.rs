use leadgen_core::CellValue;

/// One sheet: the first non-empty row is the header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// `path` or `path#sheet`, used in error messages.
    pub label: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Builds a table from raw rows. Rows with no content are dropped.
    pub fn from_rows<I>(label: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<CellValue>>,
    {
        let mut rows = rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()));

        let headers = rows
            .next()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        cell.as_text()
                            .map(|text| text.trim_start_matches('\u{feff}').to_string())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            label: label.into(),
            headers,
            rows: rows.collect(),
        }
    }

    /// Column index of a header, compared case-insensitively.
    pub fn column(&self, header: &str) -> Option<usize> {
        let wanted = header.trim();
        self.headers
            .iter()
            .position(|candidate| candidate.trim().eq_ignore_ascii_case(wanted))
    }
}

pub(crate) fn cell_at(row: &[CellValue], column: Option<usize>) -> CellValue {
    column
        .and_then(|idx| row.get(idx))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{cell_at, Table};
    use leadgen_core::CellValue;

    fn text_row(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|value| CellValue::from(*value)).collect()
    }

    #[test]
    fn from_rows_skips_blank_rows_and_strips_bom() {
        let table = Table::from_rows(
            "owners.csv",
            vec![
                text_row(&["", ""]),
                text_row(&["\u{feff}P-NUMBER", "NAME"]),
                text_row(&["1", "Ada"]),
                text_row(&["  ", ""]),
                text_row(&["2", "Bob"]),
            ],
        );
        assert_eq!(table.headers, vec!["P-NUMBER", "NAME"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn column_lookup_ignores_case() {
        let table = Table::from_rows("owners.csv", vec![text_row(&["p-number", " Name "])]);
        assert_eq!(table.column("P-NUMBER"), Some(0));
        assert_eq!(table.column("NAME"), Some(1));
        assert_eq!(table.column("EMAIL"), None);
    }

    #[test]
    fn cell_at_pads_short_rows() {
        let row = text_row(&["1"]);
        assert_eq!(cell_at(&row, Some(0)), CellValue::text("1"));
        assert_eq!(cell_at(&row, Some(4)), CellValue::Empty);
        assert_eq!(cell_at(&row, None), CellValue::Empty);
    }
}
