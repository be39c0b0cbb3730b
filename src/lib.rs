pub mod config;
pub mod error;
pub mod logging;
pub mod services;

pub use config::{output_path_for, Config};
pub use error::AppError;
pub use services::excel::{ColumnInfo, ColumnType, ExcelAnalyzer, WorksheetSummary};

/// Analyzes `config.input_path` and writes the report to `config.output_path`.
///
/// Nothing is written unless every worksheet was analyzed.
pub fn run(config: &Config) -> Result<Vec<WorksheetSummary>, AppError> {
    let summaries = ExcelAnalyzer.analyze_file(&config.input_path)?;
    services::excel::write_report(&summaries, &config.output_path)?;
    Ok(summaries)
}
