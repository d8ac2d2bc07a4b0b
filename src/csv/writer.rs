//! Serialization of a table back into CSV text.

use crate::csv::file::CsvFile;
use crate::csv::DOUBLE_QUOTE;
use crate::csv::LINE_FEED;
use std::borrow::Cow;

/// Quotes a field if it contains the separator, a double quote or a line feed.
/// Quotes inside a quoted field are doubled. Other fields are returned unchanged.
///
/// Carriage returns are written as they are. Reading normalizes them to line
/// feeds, even inside quotes, so a value holding CR does not survive a round trip.
pub(crate) fn escape(value: &str, separator: char) -> Cow<'_, str> {
    let needs_quotes = value
        .chars()
        .any(|character| character == separator || character == DOUBLE_QUOTE || character == LINE_FEED);
    if !needs_quotes {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push(DOUBLE_QUOTE);
    for character in value.chars() {
        if character == DOUBLE_QUOTE {
            escaped.push(DOUBLE_QUOTE);
        }
        escaped.push(character);
    }
    escaped.push(DOUBLE_QUOTE);
    Cow::Owned(escaped)
}

/// Renders the header line followed by one line per row, joined by LF.
///
/// Every row is written across all columns; cells a row lacks become empty fields.
pub(crate) fn write(file: &CsvFile, separator: char) -> String {
    let mut lines = Vec::with_capacity(file.rows().len() + 1);

    let header: Vec<Cow<str>> = file
        .columns()
        .iter()
        .map(|column| escape(column.name(), separator))
        .collect();
    lines.push(join(&header, separator));

    for row in file.rows() {
        let fields: Vec<Cow<str>> = (0..file.columns().len())
            .map(|column| match row.cell(column) {
                Some(cell) => escape(cell.value(), separator),
                None => Cow::Borrowed(""),
            })
            .collect();
        lines.push(join(&fields, separator));
    }

    lines.join("\n")
}

fn join(fields: &[Cow<str>], separator: char) -> String {
    let mut line = String::new();
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            line.push(separator);
        }
        line.push_str(field);
    }
    line
}
