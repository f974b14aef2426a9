use crate::error::{Result, SheetError};
use crate::table::Table;
use calamine::{open_workbook_auto, Data, Reader};
use leadgen_core::CellValue;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Tsv,
    Workbook,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "tsv" | "tab" => Ok(SourceFormat::Tsv),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SourceFormat::Workbook),
            _ => Err(SheetError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Reads one sheet of a workbook, or a whole delimited file (sheet 0).
pub fn read_table(path: &Path, sheet: usize) -> Result<Table> {
    let format = SourceFormat::from_path(path)?;
    if !path.exists() {
        return Err(SheetError::NotFound(path.to_path_buf()));
    }

    match format {
        SourceFormat::Csv => read_delimited(path, sheet, b','),
        SourceFormat::Tsv => read_delimited(path, sheet, b'\t'),
        SourceFormat::Workbook => read_workbook(path, sheet),
    }
}

fn read_delimited(path: &Path, sheet: usize, delimiter: u8) -> Result<Table> {
    if sheet != 0 {
        return Err(SheetError::SheetNotFound {
            path: path.to_path_buf(),
            index: sheet,
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    // Lossy decode: cells in legacy code pages keep their rows.
    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| CellValue::from(String::from_utf8_lossy(field).as_ref()))
                .collect(),
        );
    }

    Ok(Table::from_rows(path.display().to_string(), rows))
}

fn read_workbook(path: &Path, sheet: usize) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_vec();
    let Some(sheet_name) = sheet_names.get(sheet) else {
        return Err(SheetError::SheetNotFound {
            path: path.to_path_buf(),
            index: sheet,
        });
    };

    let range = workbook.worksheet_range(sheet_name)?;
    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_from_data).collect::<Vec<_>>());

    Ok(Table::from_rows(
        format!("{}#{} ({})", path.display(), sheet, sheet_name),
        rows,
    ))
}

fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(value) => CellValue::from(value.as_str()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::{cell_from_data, SourceFormat};
    use calamine::Data;
    use leadgen_core::CellValue;
    use std::path::Path;

    #[test]
    fn source_format_follows_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("owners.CSV")).unwrap(),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("owners.tsv")).unwrap(),
            SourceFormat::Tsv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("town_square.xlsx")).unwrap(),
            SourceFormat::Workbook
        );
        assert!(SourceFormat::from_path(Path::new("owners.json")).is_err());
        assert!(SourceFormat::from_path(Path::new("owners")).is_err());
    }

    #[test]
    fn cell_from_data_keeps_numbers_numeric() {
        assert_eq!(cell_from_data(&Data::Float(1204.0)), CellValue::Number(1204.0));
        assert_eq!(cell_from_data(&Data::Int(7)), CellValue::Number(7.0));
        assert_eq!(
            cell_from_data(&Data::String("Ada".to_string())),
            CellValue::text("Ada")
        );
        assert_eq!(cell_from_data(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_from_data(&Data::Bool(true)), CellValue::text("true"));
    }
}
