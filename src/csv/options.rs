use crate::csv::encoding::Encoding;
use crate::csv::separator::Separator;

/// Options for reading CSV content from bytes, streams or files.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LoadOptions {
    /// Field separator, `Auto` to detect it from the text (default: auto).
    pub separator: Separator,

    /// Text encoding, `None` to detect it from the bytes (default: detect).
    pub encoding: Option<Encoding>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            separator: Separator::Auto,
            encoding: None,
        }
    }
}

impl LoadOptions {
    pub fn new() -> LoadOptions {
        LoadOptions::default()
    }

    pub fn separator(mut self, separator: Separator) -> LoadOptions {
        self.separator = separator;
        self
    }

    pub fn encoding(mut self, encoding: Encoding) -> LoadOptions {
        self.encoding = Some(encoding);
        self
    }
}
