use crate::csv::cell::CsvCell;
use crate::csv::column::ColumnKey;
use crate::csv::file::CsvFile;
use crate::error::CsvError;
use std::ops::Deref;

/// Represents a data row of a CSV file.
#[derive(Clone, Debug, PartialEq)]
pub struct CsvRow {
    /// Row index (0-based), assigned at creation
    pub(crate) index: usize,
    /// Cells in insertion order
    pub(crate) cells: Vec<CsvCell>,
}

impl CsvRow {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cells(&self) -> &[CsvCell] {
        &self.cells
    }

    /// Returns the cell associated with the column at `column`.
    /// Cells normally sit at their column's position, other positions are searched as a fallback.
    pub fn cell(&self, column: usize) -> Option<&CsvCell> {
        self.position(column).map(|position| &self.cells[position])
    }

    pub(crate) fn cell_mut(&mut self, column: usize) -> Option<&mut CsvCell> {
        self.position(column).map(|position| &mut self.cells[position])
    }

    fn position(&self, column: usize) -> Option<usize> {
        match self.cells.get(column) {
            Some(cell) if cell.column == column => Some(column),
            _ => self.cells.iter().position(|cell| cell.column == column),
        }
    }
}

/// Mutable handle on a row, borrowed from its [`CsvFile`].
///
/// Cell creation goes through this handle so every cell is tied to an
/// existing column of the owning file.
pub struct RowMut<'a> {
    file: &'a mut CsvFile,
    index: usize,
}

impl<'a> RowMut<'a> {
    pub(crate) fn new(file: &'a mut CsvFile, index: usize) -> RowMut<'a> {
        RowMut { file, index }
    }

    /// Appends a cell tied to the column whose index equals the current cell count.
    ///
    /// # Errors
    ///
    /// Returns an error if the file has no such column.
    pub fn add_cell<V: ToString>(&mut self, value: V) -> Result<&mut Self, CsvError> {
        let column = self.cells.len();
        self.add_cell_in(column, value)
    }

    /// Appends a cell tied to an explicit column, addressed by index or name.
    pub fn add_cell_in<K: ColumnKey, V: ToString>(&mut self, column: K, value: V) -> Result<&mut Self, CsvError> {
        let column = self.locate(&column)?;
        let index = self.index;
        self.file.rows[index].cells.push(CsvCell {
            row: index,
            column,
            value: value.to_string(),
        });
        Ok(self)
    }

    /// Sets the value of the cell in a column, creating the cell if the row is short of it.
    pub fn set_value<K: ColumnKey, V: ToString>(&mut self, column: K, value: V) -> Result<&mut Self, CsvError> {
        let column = self.locate(&column)?;
        let index = self.index;
        match self.file.rows[index].cell_mut(column) {
            Some(cell) => cell.set_value(value),
            None => self.file.rows[index].cells.push(CsvCell {
                row: index,
                column,
                value: value.to_string(),
            }),
        }
        Ok(self)
    }

    fn locate<K: ColumnKey>(&self, column: &K) -> Result<usize, CsvError> {
        column
            .locate(&self.file.columns)
            .ok_or_else(|| CsvError::ColumnNotFoundError(column.describe()))
    }
}

impl Deref for RowMut<'_> {
    type Target = CsvRow;

    fn deref(&self) -> &CsvRow {
        &self.file.rows[self.index]
    }
}

#[cfg(test)]
mod tests {
    use crate::csv::file::CsvFile;
    use crate::error::CsvError;

    fn file() -> CsvFile {
        let mut file = CsvFile::new();
        file.add_column("Id").unwrap().add_column("Name").unwrap();
        file
    }

    #[test]
    fn test_add_cells_positionally() {
        let mut file = file();
        file.add_row().add_cell(1).unwrap().add_cell("Alice").unwrap();
        let row = &file.rows()[0];
        assert_eq!(row.index(), 0);
        assert_eq!(row.cells().len(), 2);
        assert_eq!(row.cell(1).unwrap().value(), "Alice");
        assert_eq!(row.cell(1).unwrap().column_index(), 1);
    }

    #[test]
    fn test_add_cell_beyond_columns() {
        let mut file = file();
        let mut row = file.add_row();
        row.add_cell("1").unwrap().add_cell("Alice").unwrap();
        let error = row.add_cell("extra").err().unwrap();
        assert!(matches!(error, CsvError::ColumnNotFoundError(_)));
    }

    #[test]
    fn test_add_cell_out_of_order() {
        let mut file = file();
        file.add_row().add_cell_in("Name", "Alice").unwrap().add_cell_in(0, "1").unwrap();
        let row = &file.rows()[0];
        assert_eq!(row.cells()[0].column_index(), 1);
        assert_eq!(row.cell(0).unwrap().value(), "1");
        assert_eq!(row.cell(1).unwrap().value(), "Alice");
    }

    #[test]
    fn test_set_value_creates_missing_cell() {
        let mut file = file();
        let mut row = file.add_row();
        row.add_cell("1").unwrap();
        row.set_value("Name", "Bob").unwrap().set_value(0, 2).unwrap();
        assert_eq!(row.cell(0).unwrap().value(), "2");
        assert_eq!(row.cell(1).unwrap().value(), "Bob");
        assert!(row.set_value("Missing", "x").is_err());
    }
}
