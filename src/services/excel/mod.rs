pub mod analyzer;
pub mod types;
pub mod utils;
pub mod writer;

pub use analyzer::ExcelAnalyzer;
pub use types::{CellKind, ColumnInfo, ColumnType, WorksheetSummary};
pub use utils::clean_column_name;
pub use writer::write_report;
