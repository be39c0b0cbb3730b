use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::AppError;

/// Appended to the input file stem to name the report.
pub const OUTPUT_SUFFIX: &str = "-structure";
pub const OUTPUT_EXTENSION: &str = "xlsx";

#[derive(Debug, Parser)]
#[command(name = "xlsx-structure")]
#[command(about = "Summarize the columns of every worksheet in a workbook")]
#[command(
    long_about = "Summarize the columns of every worksheet in a workbook.\n\n\
                  For each column the report lists its cleaned name, data type \
                  (str, int or mixed), maximum length, the value with that length \
                  and the original header. The report is written next to the input \
                  as <input>-structure.xlsx."
)]
#[command(version)]
pub struct Cli {
    /// Workbook to analyze
    pub input: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Config {
    pub fn from_input(input_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let input_path = input_path.into();
        let output_path = output_path_for(&input_path)?;

        Ok(Config {
            input_path,
            output_path,
        })
    }
}

impl TryFrom<Cli> for Config {
    type Error = AppError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Config::from_input(cli.input)
    }
}

/// `dir/data.xlsx` becomes `dir/data-structure.xlsx`.
pub fn output_path_for(input: &Path) -> Result<PathBuf, AppError> {
    let stem = input.file_stem().ok_or_else(|| {
        AppError::InvalidInput(format!("'{}' does not name a file", input.display()))
    })?;

    let mut file_name = stem.to_os_string();
    file_name.push(OUTPUT_SUFFIX);
    file_name.push(".");
    file_name.push(OUTPUT_EXTENSION);

    Ok(input.with_file_name(file_name))
}
