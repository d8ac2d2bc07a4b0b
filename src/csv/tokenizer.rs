//! Quoting-aware record tokenizer.
//!
//! Splits normalized text into records of fields in a single pass with two
//! states. Outside quotes the separator ends a field and a line feed ends a
//! record. Inside quotes both are literal, and a doubled quote stands for one
//! quote character.
use crate::csv::CARRIAGE_RETURN;
use crate::csv::DOUBLE_QUOTE;
use crate::csv::LINE_FEED;
use log::trace;
use std::mem::take;

/// Rewrites CRLF and lone CR line endings to LF.
pub(crate) fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace(CARRIAGE_RETURN, "\n")
}

/// Splits text with LF line endings into records. Records may differ in length.
///
/// A final line feed terminates the last record without starting an empty one.
pub(crate) fn tokenize(text: &str, separator: char) -> Vec<Vec<String>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut enclosed = false;
    let mut pending = false; // anything consumed since the last record ended

    let mut characters = text.chars().peekable();
    while let Some(character) = characters.next() {
        pending = true;
        match character {
            DOUBLE_QUOTE if enclosed => {
                if characters.peek() == Some(&DOUBLE_QUOTE) {
                    characters.next();
                    field.push(DOUBLE_QUOTE);
                } else {
                    enclosed = false;
                }
            }
            DOUBLE_QUOTE => enclosed = true,
            _ if enclosed => field.push(character),
            LINE_FEED => {
                record.push(take(&mut field));
                records.push(take(&mut record));
                pending = false;
            }
            _ if character == separator => record.push(take(&mut field)),
            _ => field.push(character),
        }
    }
    if pending {
        record.push(field);
        records.push(record);
    }

    trace!("Tokenized {} records with separator {:?}", records.len(), separator);
    records
}
