use std::fmt;

use calamine::Data;

use super::utils::as_integer;

/// Length reported by integer cells; they never compete with text lengths.
pub const INTEGER_LENGTH: i64 = -1;

/// How a single data cell takes part in column classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Text,
    Integer,
    Untyped,
}

impl CellKind {
    pub fn of(value: &Data) -> Self {
        match value {
            Data::String(_) => CellKind::Text,
            Data::Int(_) => CellKind::Integer,
            Data::Float(f) if as_integer(*f).is_some() => CellKind::Integer,
            _ => CellKind::Untyped,
        }
    }

    pub fn column_type(self) -> Option<ColumnType> {
        match self {
            CellKind::Text => Some(ColumnType::Str),
            CellKind::Integer => Some(ColumnType::Int),
            CellKind::Untyped => None,
        }
    }
}

/// Length a cell competes with for a column's `max_length`.
pub fn data_length(value: &Data) -> i64 {
    match (CellKind::of(value), value) {
        (CellKind::Text, Data::String(s)) => s.chars().count() as i64,
        (CellKind::Integer, _) => INTEGER_LENGTH,
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnType {
    /// No text or integer value seen yet.
    #[default]
    Unknown,
    Str,
    Int,
    /// Terminal.
    Mixed,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Unknown => "",
            ColumnType::Str => "str",
            ColumnType::Int => "int",
            ColumnType::Mixed => "mixed",
        }
    }

    fn merge(self, seen: ColumnType) -> ColumnType {
        match self {
            ColumnType::Unknown => seen,
            current if current == seen => current,
            _ => ColumnType::Mixed,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    pub name: String,
    pub original_name: Data,
    pub data_type: ColumnType,
    pub max_length: i64,
    pub max_value: Data,
    updated: bool,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, original_name: Data) -> Self {
        Self {
            name: name.into(),
            original_name,
            data_type: ColumnType::Unknown,
            max_length: 0,
            max_value: Data::String(String::new()),
            updated: false,
        }
    }

    /// Folds one data cell into the column.
    ///
    /// `max_length`/`max_value` move together and only when the new length is
    /// strictly greater, except that an integer claims them while the column
    /// has never been updated. Integers are not compared by magnitude.
    pub fn observe(&mut self, value: &Data) {
        let kind = CellKind::of(value);
        let length = data_length(value);

        let claims_sentinel = kind == CellKind::Integer && !self.updated;
        if length > self.max_length || claims_sentinel {
            self.max_length = length;
            self.max_value = value.clone();
            self.updated = true;
        }

        if let Some(seen) = kind.column_type() {
            self.data_type = self.data_type.merge(seen);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorksheetSummary {
    pub name: String,
    pub headers: Vec<String>,
    pub columns: Vec<ColumnInfo>,
}

impl WorksheetSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headers: Vec::new(),
            columns: Vec::new(),
        }
    }

    pub fn push_column(&mut self, column: ColumnInfo) {
        self.headers.push(column.name.clone());
        self.columns.push(column);
    }

    /// Only positions covered by the header row are considered.
    pub fn observe_row(&mut self, row: &[Data]) {
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.observe(value);
        }
    }
}
