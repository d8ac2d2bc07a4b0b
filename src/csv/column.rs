/// Represents a column of a CSV file: its position and its header name.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvColumn {
    /// Column index (0-based), assigned at creation and never renumbered
    pub(crate) index: usize,
    /// Header name, may be empty or shared with other columns
    pub(crate) name: String,
}

impl CsvColumn {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Addresses a column either by index or by header name.
///
/// Name lookups return the first column with that name.
pub trait ColumnKey {
    /// Returns the index of the addressed column, if it exists
    fn locate(&self, columns: &[CsvColumn]) -> Option<usize>;

    /// Returns a label for error messages
    fn describe(&self) -> String;
}

impl ColumnKey for usize {
    fn locate(&self, columns: &[CsvColumn]) -> Option<usize> {
        (*self < columns.len()).then_some(*self)
    }

    fn describe(&self) -> String {
        format!("#{}", self)
    }
}

impl ColumnKey for &str {
    fn locate(&self, columns: &[CsvColumn]) -> Option<usize> {
        columns.iter().position(|column| column.name == *self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl ColumnKey for &String {
    fn locate(&self, columns: &[CsvColumn]) -> Option<usize> {
        self.as_str().locate(columns)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}
