use crate::csv::cell::to_bool;
use crate::csv::cell::to_date;
use crate::csv::cell::to_f64;
use crate::csv::cell::to_i32;
use crate::csv::cell::to_i64;
use crate::csv::cell::CsvCell;
use crate::csv::column::ColumnKey;
use crate::csv::column::CsvColumn;
use crate::csv::encoding::Encoding;
use crate::csv::options::LoadOptions;
use crate::csv::row::CsvRow;
use crate::csv::row::RowMut;
use crate::csv::separator::Separator;
use crate::csv::tokenizer::normalize_line_endings;
use crate::csv::tokenizer::tokenize;
use crate::csv::writer;
use crate::csv::LINE_FEED;
use crate::csv::WHITESPACE_CHARACTERS;
use crate::csv::ZERO_WIDTH_NO_BREAK_SPACE;
use crate::error::CsvError;
use crate::error::ResultMessage;
use crate::helpers::file_reader::write_file;
use crate::helpers::file_reader::UnifiedReader;
use chrono::NaiveDate;
use log::info;
use log::warn;
use std::fmt::Display;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

/// An in-memory CSV table: ordered columns, ordered rows, and the separator
/// and encoding used when the table is rendered or saved.
///
/// Columns and rows are owned by the file. Rows and cells refer to columns by
/// index, so every lookup goes through the file.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvFile {
    separator: Separator,
    encoding: Encoding,
    /// Origin path, `None` for tables that only live in memory
    path: Option<PathBuf>,
    pub(crate) columns: Vec<CsvColumn>,
    pub(crate) rows: Vec<CsvRow>,
}

impl Default for CsvFile {
    fn default() -> Self {
        CsvFile::with_separator_and_encoding(Separator::DEFAULT, Encoding::default())
    }
}

impl CsvFile {
    /// Creates an empty table using semicolon and UTF-8.
    pub fn new() -> CsvFile {
        CsvFile::default()
    }

    /// Creates an empty table with the given separator and UTF-8.
    pub fn with_separator(separator: Separator) -> CsvFile {
        CsvFile::with_separator_and_encoding(separator, Encoding::default())
    }

    /// Creates an empty table with the given encoding and semicolon.
    pub fn with_encoding(encoding: Encoding) -> CsvFile {
        CsvFile::with_separator_and_encoding(Separator::DEFAULT, encoding)
    }

    /// Creates an empty table with the given separator and encoding.
    pub fn with_separator_and_encoding(separator: Separator, encoding: Encoding) -> CsvFile {
        CsvFile {
            separator,
            encoding,
            path: None,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Returns the separator used for rendering and saving.
    pub fn separator(&self) -> Separator {
        self.separator
    }

    /// Changes the separator used for rendering and saving.
    pub fn set_separator(&mut self, separator: Separator) {
        self.separator = separator;
    }

    /// Returns the encoding used for saving.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Changes the encoding used for saving.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    /// Returns the path the table was loaded from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns true if the table was loaded from a file.
    pub fn has_path(&self) -> bool {
        self.path.is_some()
    }

    /// Returns the columns in index order.
    pub fn columns(&self) -> &[CsvColumn] {
        &self.columns
    }

    /// Returns the data rows in index order, header excluded.
    pub fn rows(&self) -> &[CsvRow] {
        &self.rows
    }

    /// Returns a column by index, or the first column with the given name.
    pub fn column<K: ColumnKey>(&self, column: K) -> Option<&CsvColumn> {
        column.locate(&self.columns).map(|index| &self.columns[index])
    }

    /// Returns a data row by index.
    pub fn row(&self, index: usize) -> Option<&CsvRow> {
        self.rows.get(index)
    }

    /// Returns an editing handle on a data row.
    pub fn row_mut(&mut self, index: usize) -> Option<RowMut<'_>> {
        if index < self.rows.len() {
            Some(RowMut::new(self, index))
        } else {
            None
        }
    }

    /// Resolves the column a cell belongs to.
    pub fn column_of(&self, cell: &CsvCell) -> Option<&CsvColumn> {
        self.columns.get(cell.column)
    }

    /// Resolves the row a cell belongs to.
    pub fn row_of(&self, cell: &CsvCell) -> Option<&CsvRow> {
        self.rows.get(cell.row)
    }

    /// Appends a column with the next index.
    ///
    /// # Errors
    ///
    /// Returns an error once any row exists, as the column count is fixed from then on.
    pub fn add_column<S: Into<String>>(&mut self, name: S) -> Result<&mut Self, CsvError> {
        let name = name.into();
        if !self.rows.is_empty() {
            return Err(CsvError::ColumnsFrozenError(name));
        }
        self.columns.push(CsvColumn {
            index: self.columns.len(),
            name,
        });
        Ok(self)
    }

    /// Appends an empty row and returns a handle for filling in its cells.
    pub fn add_row(&mut self) -> RowMut<'_> {
        let index = self.rows.len();
        self.rows.push(CsvRow {
            index,
            cells: Vec::new(),
        });
        RowMut::new(self, index)
    }

    /// Returns the cell of a row in the given column, if both exist and the row has that cell.
    pub fn cell<K: ColumnKey>(&self, row: usize, column: K) -> Option<&CsvCell> {
        self.lookup(row, &column).ok().flatten()
    }

    /// Returns the value of a cell as text.
    ///
    /// A row that is short of the column reads as an empty string, the same
    /// way it is written out.
    ///
    /// # Errors
    ///
    /// Returns an error if the column or the row does not exist.
    pub fn value<K: ColumnKey>(&self, row: usize, column: K) -> Result<&str, CsvError> {
        let cell = self.lookup(row, &column)?;
        Ok(cell.map(CsvCell::value).unwrap_or_default())
    }

    /// Converts the value of a cell with a caller-supplied parser.
    ///
    /// # Arguments
    ///
    /// * `row` - Row index
    /// * `column` - Column index or name
    /// * `parse` - Conversion applied to the raw cell text
    ///
    /// # Errors
    ///
    /// * `ColumnNotFoundError` if the column does not exist
    /// * `CellNotFoundError` if the row does not exist or has no cell in the column
    /// * `InvalidCellValueError` if the parser rejects the value
    pub fn value_with<K, T, E, F>(&self, row: usize, column: K, parse: F) -> Result<T, CsvError>
    where
        K: ColumnKey,
        E: Into<anyhow::Error>,
        F: FnOnce(&str) -> Result<T, E>,
    {
        let cell = self.lookup(row, &column)?.ok_or_else(|| CsvError::CellNotFoundError {
            row,
            column: column.describe(),
        })?;
        parse(cell.value()).map_err(|e| CsvError::InvalidCellValueError {
            column: column.describe(),
            value: cell.value().to_string(),
            source: e.into(),
        })
    }

    /// Reads a cell as `i32`, ignoring surrounding whitespace.
    pub fn value_as_i32<K: ColumnKey>(&self, row: usize, column: K) -> Result<i32, CsvError> {
        self.value_with(row, column, to_i32)
    }

    /// Reads a cell as `i64`, ignoring surrounding whitespace.
    pub fn value_as_i64<K: ColumnKey>(&self, row: usize, column: K) -> Result<i64, CsvError> {
        self.value_with(row, column, to_i64)
    }

    /// Reads a cell as `f64`, ignoring surrounding whitespace.
    pub fn value_as_f64<K: ColumnKey>(&self, row: usize, column: K) -> Result<f64, CsvError> {
        self.value_with(row, column, to_f64)
    }

    /// Reads "true"/"false" (any case) or "1"/"0".
    pub fn value_as_bool<K: ColumnKey>(&self, row: usize, column: K) -> Result<bool, CsvError> {
        self.value_with(row, column, to_bool)
    }

    /// Reads a date using a chrono format string such as "%Y-%m-%d".
    pub fn value_as_date<K: ColumnKey>(&self, row: usize, column: K, format: &str) -> Result<NaiveDate, CsvError> {
        self.value_with(row, column, |value| to_date(value, format))
    }

    /// Sets the value of a cell, creating it if the row is short of the column.
    pub fn set_value<K: ColumnKey, V: ToString>(&mut self, row: usize, column: K, value: V) -> Result<&mut Self, CsvError> {
        let mut handle = self.row_mut(row).ok_or_else(|| CsvError::CellNotFoundError {
            row,
            column: column.describe(),
        })?;
        handle.set_value(column, value)?;
        Ok(self)
    }

    fn lookup<K: ColumnKey>(&self, row: usize, column: &K) -> Result<Option<&CsvCell>, CsvError> {
        let index = column
            .locate(&self.columns)
            .ok_or_else(|| CsvError::ColumnNotFoundError(column.describe()))?;
        let cells = self.rows.get(row).ok_or_else(|| CsvError::CellNotFoundError {
            row,
            column: column.describe(),
        })?;
        Ok(cells.cell(index))
    }

    /// Parses decoded text into a table.
    ///
    /// With `Separator::Auto` the separator is taken from a leading `sep=X`
    /// directive or detected from the text; the table keeps the separator it
    /// ended up using. An explicit separator disables both.
    ///
    /// # Errors
    ///
    /// * `EmptyContentError` if the text is empty or whitespace only
    /// * `InvalidDirectiveSeparatorError` if a directive names an unsupported character
    pub fn parse(text: &str, separator: Separator) -> Result<CsvFile, CsvError> {
        let mut file = CsvFile::with_separator(separator);
        file.assemble(text)?;
        Ok(file)
    }

    /// Decodes and parses raw bytes. Unset options are detected.
    ///
    /// A byte order mark is dropped after decoding; [`CsvFile::parse`] keeps text as given.
    pub fn from_bytes(bytes: &[u8], options: LoadOptions) -> Result<CsvFile, CsvError> {
        let encoding = options.encoding.unwrap_or_else(|| Encoding::detect(bytes));
        let text = encoding.decode(bytes);
        let text = text.strip_prefix(ZERO_WIDTH_NO_BREAK_SPACE).unwrap_or(text.as_str());
        let mut file = CsvFile::with_separator_and_encoding(options.separator, encoding);
        file.assemble(text)?;
        Ok(file)
    }

    /// Reads a whole stream into memory and parses it.
    pub fn from_reader<R: Read>(mut reader: R, options: LoadOptions) -> Result<CsvFile, CsvError> {
        let bytes = UnifiedReader::stream(&mut reader).read_bytes()?;
        CsvFile::from_bytes(&bytes, options)
    }

    /// Loads a file, detecting its encoding and separator.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<CsvFile, CsvError> {
        CsvFile::load_with(path, LoadOptions::default())
    }

    /// Loads a file with explicit options. The table remembers the path for [`CsvFile::save`].
    pub fn load_with<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<CsvFile, CsvError> {
        let path = path.as_ref();
        let prefix = format!("Failed to load {}", path.display());
        let bytes = UnifiedReader::open(path).and_then(UnifiedReader::read_bytes).with_prefix(&prefix)?;
        let mut file = CsvFile::from_bytes(&bytes, options).with_prefix(&prefix)?;
        file.path = Some(path.to_path_buf());
        info!(
            "Loaded {} ({} bytes, {}, {}): {} columns, {} rows",
            path.display(),
            bytes.len(),
            file.encoding,
            file.separator,
            file.columns.len(),
            file.rows.len()
        );
        Ok(file)
    }

    /// Saves the table back to the path it was loaded from.
    ///
    /// # Errors
    ///
    /// Returns `MissingPathError` for tables that were not loaded from a file.
    pub fn save(&self) -> Result<&Self, CsvError> {
        let path = self.path.as_deref().ok_or(CsvError::MissingPathError)?;
        self.save_with(path, self.separator, self.encoding)
    }

    /// Saves the table to another path with its own separator and encoding.
    /// The remembered path is left unchanged.
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<&Self, CsvError> {
        self.save_with(path, self.separator, self.encoding)
    }

    /// Saves the table with the given separator and encoding, prefixed by the encoding's byte order mark.
    pub fn save_with<P: AsRef<Path>>(&self, path: P, separator: Separator, encoding: Encoding) -> Result<&Self, CsvError> {
        let path = path.as_ref();
        let bytes = self.to_bytes_with(separator, encoding);
        write_file(path, &bytes).with_prefix(&format!("Failed to save {}", path.display()))?;
        info!("Saved {} ({} bytes, {}, {})", path.display(), bytes.len(), encoding, separator.resolve());
        Ok(self)
    }

    /// Renders the table and encodes it, byte order mark included.
    pub fn to_bytes_with(&self, separator: Separator, encoding: Encoding) -> Vec<u8> {
        let mut bytes = encoding.bom().to_vec();
        bytes.extend(encoding.encode(&self.to_string_with(separator)));
        bytes
    }

    /// Renders the table as CSV text. `Auto` renders with semicolons.
    pub fn to_string_with(&self, separator: Separator) -> String {
        writer::write(self, separator.as_char())
    }

    /// Replaces the content of this table with the records of `text`.
    fn assemble(&mut self, text: &str) -> Result<(), CsvError> {
        if text.chars().all(|character| WHITESPACE_CHARACTERS.contains(&character)) {
            Err(CsvError::EmptyContentError)?
        }

        let normalized = normalize_line_endings(text);
        let normalized = normalized.trim_end_matches(LINE_FEED);
        let (separator, body) = match self.separator {
            Separator::Auto => Separator::detect(normalized)?,
            separator => (separator, normalized),
        };
        self.separator = separator;

        let records = tokenize(body, separator.as_char());
        let Some((header, records)) = records.split_first() else {
            return Err(CsvError::EmptyContentError);
        };
        let width = records.iter().map(Vec::len).chain([header.len()]).max().unwrap_or_default();

        self.columns = (0..width)
            .map(|index| CsvColumn {
                index,
                name: header.get(index).cloned().unwrap_or_default(),
            })
            .collect();

        let mut ragged = 0;
        self.rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                if record.len() < width {
                    ragged += 1;
                }
                let cells = (0..width)
                    .map(|column| CsvCell {
                        row: index,
                        column,
                        value: record.get(column).cloned().unwrap_or_default(),
                    })
                    .collect();
                CsvRow { index, cells }
            })
            .collect();

        if ragged > 0 {
            warn!("Padded {} of {} rows with empty cells up to {} columns", ragged, self.rows.len(), width);
        }
        Ok(())
    }
}

impl Display for CsvFile {
    /// Renders the table with its own separator.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string_with(self.separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(file: &CsvFile) -> Vec<&str> {
        file.columns().iter().map(CsvColumn::name).collect()
    }

    fn values(row: &CsvRow) -> Vec<&str> {
        row.cells().iter().map(CsvCell::value).collect()
    }

    #[test]
    fn test_parse_auto_separator() {
        let file = CsvFile::parse("Hello:World\nHej:Verden", Separator::Auto).unwrap();
        assert_eq!(file.separator(), Separator::Colon);
        assert_eq!(names(&file), vec!["Hello", "World"]);
        assert_eq!(values(&file.rows()[0]), vec!["Hej", "Verden"]);
    }

    #[test]
    fn test_parse_explicit_separator() {
        let file = CsvFile::parse("a,b;c\n1,2;3", Separator::SemiColon).unwrap();
        assert_eq!(names(&file), vec!["a,b", "c"]);
        assert_eq!(file.separator(), Separator::SemiColon);
    }

    #[test]
    fn test_parse_directive() {
        let file = CsvFile::parse("sep=,\nHello,World\nHej,Verden", Separator::Auto).unwrap();
        assert_eq!(file.separator(), Separator::Comma);
        assert_eq!(names(&file), vec!["Hello", "World"]);
        assert_eq!(file.rows().len(), 1);
    }

    #[test]
    fn test_parse_crlf_and_trailing_newlines() {
        let file = CsvFile::parse("A;B\r\n1;2\r\n\r\n", Separator::Auto).unwrap();
        assert_eq!(file.rows().len(), 1);
        assert_eq!(values(&file.rows()[0]), vec!["1", "2"]);
    }

    #[test]
    fn test_parse_keeps_leading_bom_character() {
        let file = CsvFile::parse("\u{FEFF}H;B\nX;Y", Separator::SemiColon).unwrap();
        assert_eq!(names(&file), vec!["\u{FEFF}H", "B"]);
    }

    #[test]
    fn test_from_bytes_strips_leading_bom_character() {
        let options = LoadOptions::new().encoding(Encoding::Utf8);
        let file = CsvFile::from_bytes(b"\xEF\xBB\xBFH;B\nX;Y", options).unwrap();
        assert_eq!(names(&file), vec!["H", "B"]);
    }

    #[test]
    fn test_parse_empty() {
        for text in ["", "   ", "\r\n\n", "\u{FEFF}", "\t \n"] {
            let error = CsvFile::parse(text, Separator::Auto).unwrap_err();
            assert!(matches!(error, CsvError::EmptyContentError), "{:?}", text);
        }
    }

    #[test]
    fn test_parse_header_only() {
        let file = CsvFile::parse("A;B;C", Separator::Auto).unwrap();
        assert_eq!(file.columns().len(), 3);
        assert!(file.rows().is_empty());
    }

    #[test]
    fn test_parse_ragged_rows_are_padded() {
        let file = CsvFile::parse("A;B\n1\n1;2;3", Separator::SemiColon).unwrap();
        assert_eq!(names(&file), vec!["A", "B", ""]);
        assert_eq!(values(&file.rows()[0]), vec!["1", "", ""]);
        assert_eq!(values(&file.rows()[1]), vec!["1", "2", "3"]);
        for row in file.rows() {
            for (position, cell) in row.cells().iter().enumerate() {
                assert_eq!(cell.row_index(), row.index());
                assert_eq!(cell.column_index(), position);
            }
        }
    }

    #[test]
    fn test_add_column_after_rows() {
        let mut file = CsvFile::new();
        file.add_column("A").unwrap();
        file.add_row();
        let error = file.add_column("B").unwrap_err();
        assert!(matches!(error, CsvError::ColumnsFrozenError(name) if name == "B"));
        assert_eq!(names(&file), vec!["A"]);
    }

    #[test]
    fn test_build_and_render() {
        let mut file = CsvFile::new();
        file.add_column("Id").unwrap().add_column("Name").unwrap().add_column("Description").unwrap();
        file.add_row()
            .add_cell(1234)
            .unwrap()
            .add_cell("Hej med\ndig")
            .unwrap()
            .add_cell("hello \"world\"")
            .unwrap();
        assert_eq!(
            file.to_string(),
            "Id;Name;Description\n1234;\"Hej med\ndig\";\"hello \"\"world\"\"\""
        );
        assert_eq!(file.to_string_with(Separator::Auto), file.to_string());
    }

    #[test]
    fn test_navigation() {
        let mut file = CsvFile::parse("Id;Name;Id\n1;Alice;2", Separator::Auto).unwrap();
        assert_eq!(file.column("Id").unwrap().index(), 0);
        assert_eq!(file.column(2usize).unwrap().name(), "Id");
        assert!(file.column("Missing").is_none());

        let cell = file.cell(0, "Name").unwrap();
        assert_eq!(cell.value(), "Alice");
        assert_eq!(file.column_of(cell).unwrap().name(), "Name");
        assert_eq!(file.row_of(cell).unwrap().index(), 0);
        assert!(file.cell(1, "Name").is_none());
        assert!(file.row(1).is_none());
        assert!(file.row_mut(1).is_none());
    }

    #[test]
    fn test_value_reads_missing_cell_as_empty() {
        let mut file = CsvFile::new();
        file.add_column("A").unwrap().add_column("B").unwrap();
        file.add_row().add_cell("1").unwrap();
        assert_eq!(file.value(0, "A").unwrap(), "1");
        assert_eq!(file.value(0, 1usize).unwrap(), "");
        assert!(matches!(file.value(0, "C"), Err(CsvError::ColumnNotFoundError(_))));
        assert!(matches!(file.value(5, "A"), Err(CsvError::CellNotFoundError { row: 5, .. })));
    }

    #[test]
    fn test_typed_values() {
        let file = CsvFile::parse(
            "Id;Price;Active;Date;Big\n 42 ;3.25;TRUE;2024-02-29;9000000000\nx;;maybe;02/29/2024;1",
            Separator::Auto,
        )
        .unwrap();
        assert_eq!(file.value_as_i32(0, "Id").unwrap(), 42);
        assert_eq!(file.value_as_f64(0, "Price").unwrap(), 3.25);
        assert!(file.value_as_bool(0, "Active").unwrap());
        assert_eq!(
            file.value_as_date(0, "Date", "%Y-%m-%d").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(file.value_as_i64(0, 4usize).unwrap(), 9_000_000_000);

        let error = file.value_as_i32(1, "Id").unwrap_err();
        assert!(matches!(&error, CsvError::InvalidCellValueError { column, value, .. } if column == "Id" && value == "x"));
        assert!(file.value_as_f64(1, "Price").is_err());
        assert!(file.value_as_bool(1, "Active").is_err());
        assert!(file.value_as_date(1, "Date", "%Y-%m-%d").is_err());
        assert!(matches!(file.value_as_i32(2, "Id"), Err(CsvError::CellNotFoundError { .. })));
    }

    #[test]
    fn test_value_with_callback() {
        let file = CsvFile::parse("Tags\na|b|c", Separator::Auto).unwrap();
        let tags = file
            .value_with(0, "Tags", |value| Ok::<_, anyhow::Error>(value.split('|').count()))
            .unwrap();
        assert_eq!(tags, 3);

        let error = file
            .value_with(0, "Tags", |value| value.parse::<u8>())
            .unwrap_err();
        assert!(matches!(error, CsvError::InvalidCellValueError { .. }));
    }

    #[test]
    fn test_set_value() {
        let mut file = CsvFile::parse("A;B\n1;2", Separator::Auto).unwrap();
        file.set_value(0, "B", 3.5).unwrap().set_value(0, 0usize, "x").unwrap();
        assert_eq!(file.value(0, "A").unwrap(), "x");
        assert_eq!(file.value(0, "B").unwrap(), "3.5");
        assert!(file.set_value(1, "A", "y").is_err());
        assert!(file.set_value(0, "C", "y").is_err());
    }

    #[test]
    fn test_from_bytes_with_bom() {
        let file = CsvFile::from_bytes(b"\xEF\xBB\xBFA;B\nX;Y", LoadOptions::default()).unwrap();
        assert_eq!(file.encoding(), Encoding::Utf8);
        assert_eq!(names(&file), vec!["A", "B"]);
        assert_eq!(values(&file.rows()[0]), vec!["X", "Y"]);
    }

    #[test]
    fn test_from_bytes_explicit_options() {
        let options = LoadOptions::new().separator(Separator::Comma).encoding(Encoding::Windows1252);
        let file = CsvFile::from_bytes(b"Navn,By\nS\xF8ren,K\xF8ge", options).unwrap();
        assert_eq!(file.encoding(), Encoding::Windows1252);
        assert_eq!(values(&file.rows()[0]), vec!["Søren", "Køge"]);
    }

    #[test]
    fn test_from_reader() {
        let file = CsvFile::from_reader(&b"A\tB\n1\t2"[..], LoadOptions::default()).unwrap();
        assert_eq!(file.separator(), Separator::Tab);
        assert!(!file.has_path());
    }

    #[test]
    fn test_to_bytes_with_bom() {
        let file = CsvFile::parse("A;B", Separator::Auto).unwrap();
        assert_eq!(file.to_bytes_with(Separator::Comma, Encoding::Utf8), b"\xEF\xBB\xBFA,B".to_vec());
        assert_eq!(file.to_bytes_with(Separator::Comma, Encoding::Windows1252), b"A,B".to_vec());
        assert_eq!(
            file.to_bytes_with(Separator::SemiColon, Encoding::Utf16Le),
            vec![0xFF, 0xFE, b'A', 0, b';', 0, b'B', 0]
        );
    }

    #[test]
    fn test_save_without_path() {
        let file = CsvFile::new();
        assert!(matches!(file.save(), Err(CsvError::MissingPathError)));
    }
}
