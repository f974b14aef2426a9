pub mod columns;
pub mod error;
pub mod read;
pub mod table;
pub mod write;

pub use columns::{owner_rows, property_rows, OwnerColumns, PropertyColumns};
pub use error::{Result, SheetError};
pub use read::{read_table, SourceFormat};
pub use table::Table;
pub use write::{
    render_text, write_csv, write_csv_file, write_xlsx, OutputFormat, OutputScope, HOMEOWNER_SHEET,
    INVESTOR_SHEET,
};
