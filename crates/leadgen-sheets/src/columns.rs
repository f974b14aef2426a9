use crate::error::{Result, SheetError};
use crate::table::{cell_at, Table};
use leadgen_core::{CellValue, OwnerHeaders, OwnerRow, PropertyHeaders, PropertyRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyColumns {
    pub key: usize,
    pub location: Option<usize>,
    pub name: Option<usize>,
    pub bedrooms: Option<usize>,
    pub size: Option<usize>,
}

impl PropertyColumns {
    /// Only the key column is mandatory.
    pub fn locate(table: &Table, headers: &PropertyHeaders) -> Result<Self> {
        Ok(Self {
            key: required(table, &headers.key)?,
            location: table.column(&headers.location),
            name: table.column(&headers.name),
            bedrooms: table.column(&headers.bedrooms),
            size: table.column(&headers.size),
        })
    }

    pub fn row(&self, cells: &[CellValue]) -> PropertyRow {
        PropertyRow {
            key: cell_at(cells, Some(self.key)),
            name: cell_at(cells, self.name),
            location: cell_at(cells, self.location),
            bedrooms: cell_at(cells, self.bedrooms),
            size: cell_at(cells, self.size),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerColumns {
    pub key: usize,
    pub name: usize,
    pub sex: Option<usize>,
    pub email: Option<usize>,
    pub phones: Vec<usize>,
}

impl OwnerColumns {
    /// Key and name columns are mandatory; absent phone headers are skipped.
    pub fn locate(table: &Table, headers: &OwnerHeaders) -> Result<Self> {
        Ok(Self {
            key: required(table, &headers.key)?,
            name: required(table, &headers.name)?,
            sex: table.column(&headers.sex),
            email: table.column(&headers.email),
            phones: headers
                .phones
                .iter()
                .filter_map(|header| table.column(header))
                .collect(),
        })
    }

    pub fn row(&self, cells: &[CellValue]) -> OwnerRow {
        OwnerRow {
            key: cell_at(cells, Some(self.key)),
            name: cell_at(cells, Some(self.name)),
            sex: cell_at(cells, self.sex),
            email: cell_at(cells, self.email),
            phones: self
                .phones
                .iter()
                .map(|idx| cell_at(cells, Some(*idx)))
                .collect(),
        }
    }
}

pub fn property_rows(table: &Table, headers: &PropertyHeaders) -> Result<Vec<PropertyRow>> {
    let columns = PropertyColumns::locate(table, headers)?;
    Ok(table.rows.iter().map(|cells| columns.row(cells)).collect())
}

pub fn owner_rows(table: &Table, headers: &OwnerHeaders) -> Result<Vec<OwnerRow>> {
    let columns = OwnerColumns::locate(table, headers)?;
    Ok(table.rows.iter().map(|cells| columns.row(cells)).collect())
}

fn required(table: &Table, header: &str) -> Result<usize> {
    table
        .column(header)
        .ok_or_else(|| SheetError::MissingColumn {
            table: table.label.clone(),
            column: header.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{owner_rows, property_rows, OwnerColumns};
    use crate::error::SheetError;
    use crate::table::Table;
    use leadgen_core::{CellValue, OwnerHeaders, PropertyHeaders};

    fn text_row(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|value| CellValue::from(*value)).collect()
    }

    #[test]
    fn owner_columns_collect_every_phone_header_present() {
        let table = Table::from_rows(
            "owners",
            vec![text_row(&["NAME", "MOBILE", "P-NUMBER", "PHONE", "EMAIL"])],
        );
        let columns = OwnerColumns::locate(&table, &OwnerHeaders::default()).expect("columns");
        assert_eq!(columns.key, 2);
        assert_eq!(columns.name, 0);
        assert_eq!(columns.phones, vec![3, 1]);
        assert_eq!(columns.email, Some(4));
        assert_eq!(columns.sex, None);
    }

    #[test]
    fn owner_rows_require_name_column() {
        let table = Table::from_rows("owners.csv", vec![text_row(&["P-NUMBER", "EMAIL"])]);
        let err = owner_rows(&table, &OwnerHeaders::default()).unwrap_err();
        assert!(matches!(
            err,
            SheetError::MissingColumn { ref column, .. } if column == "NAME"
        ));
    }

    #[test]
    fn property_rows_map_cells_by_header() {
        let table = Table::from_rows(
            "props.csv",
            vec![
                text_row(&["PROJECT", "P-NUMBER", "ACTUAL AREA"]),
                text_row(&["Zahra", "10", "1450.5"]),
                text_row(&["Hayat", "11"]),
            ],
        );
        let rows = property_rows(&table, &PropertyHeaders::default()).expect("rows");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, CellValue::text("10"));
        assert_eq!(rows[0].name, CellValue::text("Zahra"));
        assert_eq!(rows[0].size, CellValue::text("1450.5"));
        assert_eq!(rows[0].location, CellValue::Empty);
        assert_eq!(rows[1].size, CellValue::Empty);
    }

    #[test]
    fn property_rows_require_key_column() {
        let table = Table::from_rows("props.csv", vec![text_row(&["PROJECT"])]);
        let err = property_rows(&table, &PropertyHeaders::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing column \"P-NUMBER\" in props.csv"
        );
    }
}
