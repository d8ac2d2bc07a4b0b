//! # Rusty CSV
//!
//! A CSV reading and writing library that loads a whole file into an in-memory
//! table, lets callers inspect and edit it, and writes it back out.
//!
//! ## Features
//!
//! - **Encoding detection**: Byte order marks for UTF-7, UTF-8, UTF-16 and UTF-32,
//!   with a Western-European heuristic (UTF-8, Windows-1252, ISO-8859-1) for files without one
//! - **Separator detection**: Honors an Excel-style `sep=X` directive line and otherwise
//!   picks the first of colon, comma, semicolon, space or tab found in the text
//! - **Quoting**: Fields may contain separators, doubled quotes and line breaks when enclosed in quotes
//! - **Tolerant parsing**: Short rows are padded with empty cells instead of being rejected
//! - **Table model**: Columns, rows and cells addressed by index or by column name
//! - **Typed access**: Integer, floating point, boolean, date and custom parser accessors
//!   that separate missing cells from unparsable values
//! - **Round trips**: Written files reparse to the same values with the same separator
//!
//! ## Example
//!
//! ```
//! use rusty_csv::CsvFile;
//! use rusty_csv::Separator;
//!
//! let file = CsvFile::parse("sep=,\nName,Age\nAlice,42", Separator::Auto)?;
//! assert_eq!(file.separator(), Separator::Comma);
//! assert_eq!(file.value_as_i32(0, "Age")?, 42);
//! # Ok::<(), rusty_csv::CsvError>(())
//! ```
mod csv;
mod error;
mod helpers;

pub use crate::csv::cell::CsvCell;
pub use crate::csv::column::ColumnKey;
pub use crate::csv::column::CsvColumn;
pub use crate::csv::encoding::Encoding;
pub use crate::csv::file::CsvFile;
pub use crate::csv::options::LoadOptions;
pub use crate::csv::row::CsvRow;
pub use crate::csv::row::RowMut;
pub use crate::csv::separator::Separator;
pub use crate::error::CsvError;
