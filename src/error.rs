use std::path::PathBuf;

use rust_xlsxwriter::XlsxError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to open workbook {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read worksheet '{sheet}': {source}")]
    Worksheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("Cannot convert header cell {cell} on sheet '{sheet}' to text: {value}")]
    Conversion {
        sheet: String,
        cell: String,
        value: String,
    },

    #[error("Report error: {0}")]
    Report(#[from] XlsxError),

    #[error("Failed to save report to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: XlsxError,
    },
}
