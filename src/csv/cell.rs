use anyhow::anyhow;
use anyhow::Result;
use chrono::NaiveDate;

/// Represents a single cell of a CSV row.
///
/// The cell refers to its row and column by index; navigation goes through
/// the owning [`CsvFile`](crate::CsvFile).
#[derive(Clone, Debug, PartialEq)]
pub struct CsvCell {
    /// Index of the owning row
    pub(crate) row: usize,
    /// Index of the associated column, fixed at creation
    pub(crate) column: usize,
    /// Cell value as string
    pub(crate) value: String,
}

impl CsvCell {
    pub fn row_index(&self) -> usize {
        self.row
    }

    pub fn column_index(&self) -> usize {
        self.column
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value<V: ToString>(&mut self, value: V) {
        self.value = value.to_string();
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

// Conversions behind the typed accessors of `CsvFile`. Surrounding whitespace is ignored.

pub(crate) fn to_i32(value: &str) -> Result<i32> {
    Ok(value.trim().parse::<i32>()?)
}

pub(crate) fn to_i64(value: &str) -> Result<i64> {
    Ok(value.trim().parse::<i64>()?)
}

pub(crate) fn to_f64(value: &str) -> Result<f64> {
    Ok(value.trim().parse::<f64>()?)
}

/// Accepts "true"/"false" in any case, or "1"/"0".
pub(crate) fn to_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(anyhow!("expected true/false or 1/0")),
    }
}

/// Parses a date with a chrono format string such as "%Y-%m-%d".
pub(crate) fn to_date(value: &str, format: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), format)?)
}
