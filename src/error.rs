use thiserror::Error;

/// Main error type for the Rusty CSV library.
/// Covers structural parse failures, table model misuse, cell conversions and I/O.
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    // Parsing errors
    #[error("Empty content or content with only whitespace")]
    EmptyContentError,

    #[error("Invalid separator '{}' in sep= directive", .0.escape_debug())]
    InvalidDirectiveSeparatorError(char),

    #[error("Unknown separator '{0}'")]
    UnknownSeparatorError(String),

    #[error("Unknown code page '{0}'")]
    UnknownCodePageError(u16),

    // Table model errors
    #[error("Cannot add column '{0}' after rows have been added")]
    ColumnsFrozenError(String),

    #[error("Column '{0}' not found")]
    ColumnNotFoundError(String),

    #[error("Cell of column '{column}' not found in row {row}")]
    CellNotFoundError { row: usize, column: String },

    #[error("Invalid value '{value}' in column '{column}': {source}")]
    InvalidCellValueError {
        column: String,
        value: String,
        #[source]
        source: anyhow::Error,
    },

    // File errors
    #[error("Cannot save: the file has no known path")]
    MissingPathError,
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, CsvError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| CsvError::WithContextError(format!("{}: {}", message, e)))
    }
}
