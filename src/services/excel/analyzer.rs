use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};
use rust_xlsxwriter::utility::row_col_to_cell;

use super::types::*;
use super::utils::*;
use crate::error::AppError;

pub struct ExcelAnalyzer;

impl ExcelAnalyzer {
    /// Reads every worksheet of the workbook at `path`, in workbook order.
    pub fn analyze_file(&self, path: &Path) -> Result<Vec<WorksheetSummary>, AppError> {
        let start = std::time::Instant::now();
        tracing::info!("Opening workbook {}", path.display());

        let mut workbook = open_workbook_auto(path).map_err(|e| {
            tracing::error!("Failed to open workbook {}: {}", path.display(), e);
            AppError::Load {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
        tracing::info!("Found {} sheets: {:?}", sheet_names.len(), sheet_names);

        if sheet_names.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "{} contains no worksheets",
                path.display()
            )));
        }

        let mut summaries = Vec::with_capacity(sheet_names.len());
        for sheet_name in &sheet_names {
            let range = workbook
                .worksheet_range(sheet_name)
                .map_err(|e| AppError::Worksheet {
                    sheet: sheet_name.clone(),
                    source: e,
                })?;

            let rows = rows_from_a1(&range);
            summaries.push(self.analyze_sheet(sheet_name, &rows)?);
        }

        tracing::info!("Analysis completed in {:?}", start.elapsed());
        Ok(summaries)
    }

    /// Builds the summary for one worksheet. The first row is the header row
    /// whatever it contains; every later row is data.
    pub fn analyze_sheet(
        &self,
        sheet_name: &str,
        rows: &[Vec<Data>],
    ) -> Result<WorksheetSummary, AppError> {
        let mut summary = WorksheetSummary::new(sheet_name);

        let Some((header, data_rows)) = rows.split_first() else {
            tracing::warn!("Sheet {} is empty", sheet_name);
            return Ok(summary);
        };

        for (idx, cell) in header.iter().enumerate() {
            summary.push_column(self.header_column(sheet_name, idx, cell)?);
        }

        for row in data_rows {
            summary.observe_row(row);
        }

        tracing::info!(
            "Analyzed sheet {}: {} columns, {} data rows",
            sheet_name,
            summary.columns.len(),
            data_rows.len()
        );
        for column in &summary.columns {
            tracing::debug!(
                "{}.{}: type={:?} max_length={} max_value={}",
                sheet_name,
                column.name,
                column.data_type.as_str(),
                column.max_length,
                column.max_value
            );
        }

        Ok(summary)
    }

    fn header_column(
        &self,
        sheet_name: &str,
        idx: usize,
        cell: &Data,
    ) -> Result<ColumnInfo, AppError> {
        let col = u16::try_from(idx).map_err(|_| {
            AppError::InvalidInput(format!("Sheet {} has too many columns", sheet_name))
        })?;

        let text = if is_blank_header(cell) {
            column_letter(col)
        } else {
            header_text(cell).ok_or_else(|| AppError::Conversion {
                sheet: sheet_name.to_string(),
                cell: row_col_to_cell(0, col),
                value: cell.to_string(),
            })?
        };

        Ok(ColumnInfo::new(clean_column_name(&text), cell.clone()))
    }
}

/// Rows as seen from cell A1: calamine trims leading empty rows and columns
/// off the used range, those are put back as empty cells. A sheet without
/// cells still has an empty A1.
pub fn rows_from_a1(range: &Range<Data>) -> Vec<Vec<Data>> {
    let Some((start_row, start_col)) = range.start() else {
        return vec![vec![Data::Empty]];
    };

    let mut rows: Vec<Vec<Data>> = Vec::with_capacity(start_row as usize + range.height());
    let width = start_col as usize + range.width();

    for _ in 0..start_row {
        rows.push(vec![Data::Empty; width]);
    }

    for row in range.rows() {
        let mut padded = vec![Data::Empty; start_col as usize];
        padded.extend_from_slice(row);
        rows.push(padded);
    }

    rows
}
