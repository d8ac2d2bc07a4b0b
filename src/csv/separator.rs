use crate::csv::COLON;
use crate::csv::COMMA;
use crate::csv::LINE_FEED;
use crate::csv::SEMICOLON;
use crate::csv::SEPARATOR_DIRECTIVE;
use crate::csv::SPACE;
use crate::csv::TAB;
use crate::error::CsvError;
use log::debug;
use std::fmt::Display;
use std::str::FromStr;

/// Field separator of a CSV file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Separator {
    /// Detect the separator while reading. Writing with `Auto` uses [`Separator::DEFAULT`].
    Auto,
    Comma,
    #[default]
    SemiColon,
    Colon,
    Space,
    Tab,
}

impl Separator {
    /// Separator used when nothing else is known
    pub const DEFAULT: Separator = Separator::SemiColon;

    /// Concrete separators, in the order the directive and heuristic consider them
    pub const CANDIDATES: [Separator; 5] = [
        Separator::Colon,
        Separator::Comma,
        Separator::SemiColon,
        Separator::Space,
        Separator::Tab,
    ];

    /// Returns the separator character; `Auto` resolves to the default separator.
    pub const fn as_char(&self) -> char {
        match self {
            Self::Comma => COMMA,
            Self::SemiColon | Self::Auto => SEMICOLON,
            Self::Colon => COLON,
            Self::Space => SPACE,
            Self::Tab => TAB,
        }
    }

    /// Returns the concrete separator, mapping `Auto` to the default.
    pub const fn resolve(self) -> Separator {
        match self {
            Self::Auto => Self::DEFAULT,
            separator => separator,
        }
    }

    /// Returns the lowercase name of the separator.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Comma => "comma",
            Self::SemiColon => "semicolon",
            Self::Colon => "colon",
            Self::Space => "space",
            Self::Tab => "tab",
        }
    }

    /// Detects the separator of normalized text and returns it with the text left to tokenize.
    ///
    /// A leading `sep=X` directive wins and is stripped together with one line
    /// feed. Otherwise the candidate occurring first anywhere in the text is
    /// chosen; quoting is not considered. Text without any candidate falls back
    /// to the default separator.
    ///
    /// # Errors
    ///
    /// Returns an error if a directive names a character outside the candidate set.
    /// A `sep=` with nothing before the line end is not a directive.
    pub(crate) fn detect(text: &str) -> Result<(Separator, &str), CsvError> {
        if let Some(rest) = text.strip_prefix(SEPARATOR_DIRECTIVE) {
            if let Some(character) = rest.chars().next().filter(|character| *character != LINE_FEED) {
                let separator = Separator::try_from(character)
                    .map_err(|_| CsvError::InvalidDirectiveSeparatorError(character))?;
                let rest = &rest[character.len_utf8()..];
                debug!("Detected separator {} from sep= directive", separator);
                return Ok((separator, rest.strip_prefix(LINE_FEED).unwrap_or(rest)));
            }
        }
        Ok((Self::detect_by_position(text), text))
    }

    fn detect_by_position(text: &str) -> Separator {
        match text.chars().find_map(|character| Separator::try_from(character).ok()) {
            Some(separator) => {
                debug!("Detected separator {} from first occurrence", separator);
                separator
            }
            None => {
                debug!("No separator candidate found, falling back to {}", Self::DEFAULT);
                Self::DEFAULT
            }
        }
    }
}

impl TryFrom<char> for Separator {
    type Error = CsvError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            COMMA => Ok(Self::Comma),
            SEMICOLON => Ok(Self::SemiColon),
            COLON => Ok(Self::Colon),
            SPACE => Ok(Self::Space),
            TAB => Ok(Self::Tab),
            _ => Err(CsvError::UnknownSeparatorError(value.to_string())),
        }
    }
}

impl FromStr for Separator {
    type Err = CsvError;

    /// Parses a separator from its name or its character (case-insensitive):
    /// - Auto: "auto"
    /// - Comma: "comma", ","
    /// - SemiColon: "semicolon", "semi-colon", ";"
    /// - Colon: "colon", ":"
    /// - Space: "space", " "
    /// - Tab: "tab", "\t"
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "," => return Ok(Self::Comma),
            ";" => return Ok(Self::SemiColon),
            ":" => return Ok(Self::Colon),
            " " => return Ok(Self::Space),
            "\t" => return Ok(Self::Tab),
            _ => (),
        }
        match name.trim().to_ascii_uppercase().as_str() {
            "AUTO" => Ok(Self::Auto),
            "COMMA" => Ok(Self::Comma),
            "SEMICOLON" | "SEMI-COLON" => Ok(Self::SemiColon),
            "COLON" => Ok(Self::Colon),
            "SPACE" => Ok(Self::Space),
            "TAB" => Ok(Self::Tab),
            _ => Err(CsvError::UnknownSeparatorError(name.to_string())),
        }
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_first_occurrence() {
        assert_eq!(Separator::detect("Hello:World\nHej:Verden").unwrap().0, Separator::Colon);
        assert_eq!(Separator::detect("Hello,World\nHej,Verden").unwrap().0, Separator::Comma);
        assert_eq!(Separator::detect("Hello;World\nHej;Verden").unwrap().0, Separator::SemiColon);
        assert_eq!(Separator::detect("Hello World\nHej Verden").unwrap().0, Separator::Space);
        assert_eq!(Separator::detect("Hello\tWorld\nHej\tVerden").unwrap().0, Separator::Tab);
        assert_eq!(Separator::detect("a,b;c").unwrap().0, Separator::Comma);
    }

    #[test]
    fn test_detect_fallback() {
        let (separator, rest) = Separator::detect("Hello\nWorld").unwrap();
        assert_eq!(separator, Separator::SemiColon);
        assert_eq!(rest, "Hello\nWorld");
    }

    #[test]
    fn test_detect_counts_quoted_candidates() {
        // The heuristic does not parse quotes, so the comma inside the quoted field wins
        assert_eq!(Separator::detect("\"a,b\";c\n1;2").unwrap().0, Separator::Comma);
    }

    #[test]
    fn test_detect_directive() {
        let (separator, rest) = Separator::detect("sep=,\nHello;World").unwrap();
        assert_eq!(separator, Separator::Comma);
        assert_eq!(rest, "Hello;World");

        let (separator, rest) = Separator::detect("sep=\t").unwrap();
        assert_eq!(separator, Separator::Tab);
        assert_eq!(rest, "");

        let (separator, rest) = Separator::detect("sep= \nHello World").unwrap();
        assert_eq!(separator, Separator::Space);
        assert_eq!(rest, "Hello World");
    }

    #[test]
    fn test_detect_invalid_directive() {
        let error = Separator::detect("sep=|\nHello|World").unwrap_err();
        assert!(matches!(error, CsvError::InvalidDirectiveSeparatorError('|')));
    }

    #[test]
    fn test_detect_bare_directive_is_not_a_directive() {
        let (separator, rest) = Separator::detect("sep=").unwrap();
        assert_eq!(separator, Separator::SemiColon);
        assert_eq!(rest, "sep=");
    }

    #[test]
    fn test_detect_empty_directive_line_is_not_a_directive() {
        let (separator, rest) = Separator::detect("sep=\nA;B").unwrap();
        assert_eq!(separator, Separator::SemiColon);
        assert_eq!(rest, "sep=\nA;B");
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("comma".parse::<Separator>().unwrap(), Separator::Comma);
        assert_eq!("SemiColon".parse::<Separator>().unwrap(), Separator::SemiColon);
        assert_eq!("\t".parse::<Separator>().unwrap(), Separator::Tab);
        assert_eq!(" ".parse::<Separator>().unwrap(), Separator::Space);
        assert_eq!("auto".parse::<Separator>().unwrap(), Separator::Auto);
        assert!("pipe".parse::<Separator>().is_err());
    }

    #[test]
    fn test_as_char() {
        assert_eq!(Separator::Auto.as_char(), ';');
        assert_eq!(Separator::Auto.resolve(), Separator::SemiColon);
        for separator in Separator::CANDIDATES {
            assert_eq!(Separator::try_from(separator.as_char()).unwrap(), separator);
        }
    }
}
