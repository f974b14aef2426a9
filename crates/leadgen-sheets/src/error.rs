use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("input file not found: {0}")]
    NotFound(PathBuf),
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("sheet {index} not found in {path}")]
    SheetNotFound { path: PathBuf, index: usize },
    #[error("missing column {column:?} in {table}")]
    MissingColumn { table: String, column: String },
}

pub type Result<T> = std::result::Result<T, SheetError>;
