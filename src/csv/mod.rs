//! # CSV Processing Module
//!
//! This module provides the parsing and serialization engine: encoding
//! detection, separator detection, the quoting-aware tokenizer, the
//! File/Column/Row/Cell table model and the escaping writer that inverts
//! the tokenizer.
pub(crate) mod cell;
pub(crate) mod column;
pub(crate) mod encoding;
pub(crate) mod file;
pub(crate) mod options;
pub(crate) mod row;
pub(crate) mod separator;
pub(crate) mod tokenizer;
pub(crate) mod writer;

pub(crate) const COLON: char = ':';
pub(crate) const COMMA: char = ',';
pub(crate) const SEMICOLON: char = ';';
pub(crate) const SPACE: char = ' ';
pub(crate) const TAB: char = '\t';
pub(crate) const DOUBLE_QUOTE: char = '"';
pub(crate) const LINE_FEED: char = '\n';
pub(crate) const CARRIAGE_RETURN: char = '\r';
pub(crate) const ZERO_WIDTH_NO_BREAK_SPACE: char = '\u{FEFF}';

/// Literal that opens a separator directive line, e.g. `sep=,`
pub(crate) const SEPARATOR_DIRECTIVE: &str = "sep=";

/// Characters that count as blank content
pub(crate) const WHITESPACE_CHARACTERS: [char; 5] = [
    SPACE,
    TAB,
    LINE_FEED,
    CARRIAGE_RETURN,
    ZERO_WIDTH_NO_BREAK_SPACE,
];

/// Western-European letters used to judge whether a decoding produced meaningful text
pub(crate) const REFERENCE_CHARACTERS: [char; 36] = [
    'æ', 'ø', 'å', 'Æ', 'Ø', 'Å',
    'ä', 'ö', 'ü', 'Ä', 'Ö', 'Ü', 'ß',
    'é', 'è', 'ê', 'ë', 'É', 'È', 'Ê',
    'á', 'à', 'â', 'í', 'ì', 'î', 'ï',
    'ó', 'ò', 'ô', 'ú', 'ù', 'û',
    'ñ', 'Ñ', 'ç',
];
