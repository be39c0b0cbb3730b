//! Writes worksheet summaries into the structure report workbook.

use std::path::Path;

use calamine::Data;
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet, XlsxError};

use super::types::{ColumnInfo, WorksheetSummary};
use crate::error::AppError;

/// Report columns, in output order.
pub const REPORT_HEADERS: [&str; 5] = [
    "name",
    "data_type",
    "max_length",
    "max_value",
    "original_name",
];

mod cols {
    pub const NAME: u16 = 0;
    pub const DATA_TYPE: u16 = 1;
    pub const MAX_LENGTH: u16 = 2;
    pub const MAX_VALUE: u16 = 3;
    pub const ORIGINAL_NAME: u16 = 4;
}

const HEADER_COLOR: u32 = 0x000033;
const DATETIME_NUM_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Builds the whole report in memory and saves it once. A fresh
/// `rust_xlsxwriter` workbook has no sheets, so only the summary sheets end up
/// in the file.
pub fn write_report(summaries: &[WorksheetSummary], path: &Path) -> Result<(), AppError> {
    tracing::info!("Writing report for {} sheets to {}", summaries.len(), path.display());

    let mut workbook = Workbook::new();
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(HEADER_COLOR));
    let datetime_format = Format::new().set_num_format(DATETIME_NUM_FORMAT);

    for summary in summaries {
        let sheet = workbook.add_worksheet();
        sheet.set_name(&summary.name)?;

        write_header(sheet, &header_format)?;

        let mut row: u32 = 1;
        for column in &summary.columns {
            write_column(sheet, row, column, &datetime_format)?;
            row += 1;
        }

        sheet.autofit();
    }

    workbook.save(path).map_err(|e| AppError::Save {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Report saved to {}", path.display());
    Ok(())
}

fn write_header(sheet: &mut Worksheet, format: &Format) -> Result<(), XlsxError> {
    for (col, title) in (0u16..).zip(REPORT_HEADERS) {
        sheet.write_string_with_format(0, col, title, format)?;
    }
    Ok(())
}

fn write_column(
    sheet: &mut Worksheet,
    row: u32,
    column: &ColumnInfo,
    datetime_format: &Format,
) -> Result<(), XlsxError> {
    sheet.write_string(row, cols::NAME, &column.name)?;
    sheet.write_string(row, cols::DATA_TYPE, column.data_type.as_str())?;
    sheet.write_number(row, cols::MAX_LENGTH, column.max_length as f64)?;
    write_value(sheet, row, cols::MAX_VALUE, &column.max_value, datetime_format)?;
    write_value(sheet, row, cols::ORIGINAL_NAME, &column.original_name, datetime_format)?;
    Ok(())
}

/// Writes a cell value keeping its spreadsheet type; empty values leave the
/// cell blank.
fn write_value(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Data,
    datetime_format: &Format,
) -> Result<(), XlsxError> {
    match value {
        Data::Empty => {}
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => {
            sheet.write_string(row, col, s)?;
        }
        Data::Int(i) => {
            sheet.write_number(row, col, *i as f64)?;
        }
        Data::Float(f) => {
            sheet.write_number(row, col, *f)?;
        }
        Data::Bool(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
        Data::DateTime(dt) => {
            sheet.write_number_with_format(row, col, dt.as_f64(), datetime_format)?;
        }
        Data::Error(e) => {
            sheet.write_string(row, col, e.to_string())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::excel::types::ColumnType;
    use calamine::{open_workbook, Reader, Xlsx};

    fn summary(name: &str) -> WorksheetSummary {
        let mut summary = WorksheetSummary::new(name);

        let mut first = ColumnInfo::new("FirstName", Data::String("First Name".into()));
        first.observe(&Data::String("Alice".into()));
        summary.push_column(first);

        let mut age = ColumnInfo::new("Age", Data::String("Age".into()));
        age.observe(&Data::Int(30));
        summary.push_column(age);

        summary.push_column(ColumnInfo::new("C", Data::Empty));
        summary
    }

    fn as_number(value: &Data) -> Option<f64> {
        match value {
            Data::Int(i) => Some(*i as f64),
            Data::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[test]
    fn writes_one_sheet_per_summary_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        write_report(&[summary("Zeta"), summary("Alpha")], &path).unwrap();

        let workbook: Xlsx<_> = open_workbook(&path).unwrap();
        assert_eq!(workbook.sheet_names().to_vec(), vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn writes_header_and_column_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        write_report(&[summary("People")], &path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("People").unwrap();
        let rows: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();

        let header: Vec<String> = rows[0].iter().map(|c| c.to_string()).collect();
        assert_eq!(header, REPORT_HEADERS);

        assert_eq!(rows[1][0], Data::String("FirstName".into()));
        assert_eq!(rows[1][1], Data::String(ColumnType::Str.as_str().into()));
        assert_eq!(as_number(&rows[1][2]), Some(5.0));
        assert_eq!(rows[1][3], Data::String("Alice".into()));
        assert_eq!(rows[1][4], Data::String("First Name".into()));

        assert_eq!(rows[2][1], Data::String("int".into()));
        assert_eq!(as_number(&rows[2][2]), Some(-1.0));
        assert_eq!(as_number(&rows[2][3]), Some(30.0));

        assert_eq!(rows[3][0], Data::String("C".into()));
        assert_eq!(as_number(&rows[3][2]), Some(0.0));
        assert_eq!(rows[3][4], Data::Empty);
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.xlsx");

        let err = write_report(&[summary("People")], &path).unwrap_err();
        assert!(matches!(err, AppError::Save { .. }));
        assert!(!path.exists());
    }
}
