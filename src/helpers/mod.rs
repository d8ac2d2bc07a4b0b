//! Byte-level helpers shared by the CSV engine
pub(crate) mod file_reader;
pub(crate) mod string;
pub(crate) mod utf7;
