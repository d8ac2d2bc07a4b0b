//! Text encodings understood by the CSV engine and the byte-to-text encoding detector.
use crate::csv::REFERENCE_CHARACTERS;
use crate::error::CsvError;
use crate::helpers::string::decode_utf32;
use crate::helpers::string::encode_utf16;
use crate::helpers::string::encode_utf32;
use crate::helpers::string::Endian;
use crate::helpers::utf7;
use encoding_rs::UTF_16BE;
use encoding_rs::UTF_16LE;
use encoding_rs::UTF_8;
use encoding_rs::WINDOWS_1252;
use log::debug;
use std::fmt::Display;

/// Text encoding of a CSV byte stream.
///
/// The named variants are the encodings the detector can produce. `Other`
/// carries any further `encoding_rs` encoding a caller wants to force.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    Utf7,
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
    Windows1252,
    /// ISO-8859-1, every byte maps to the code point of the same value
    Latin1,
    Other(&'static encoding_rs::Encoding),
}

/// Byte order marks, longest and most specific first so UTF-32LE wins over UTF-16LE.
const BYTE_ORDER_MARKS: [(&[u8], Encoding); 9] = [
    (&[0xFF, 0xFE, 0x00, 0x00], Encoding::Utf32Le),
    (&[0x00, 0x00, 0xFE, 0xFF], Encoding::Utf32Be),
    (&[0x2B, 0x2F, 0x76, 0x38], Encoding::Utf7),
    (&[0x2B, 0x2F, 0x76, 0x39], Encoding::Utf7),
    (&[0x2B, 0x2F, 0x76, 0x2B], Encoding::Utf7),
    (&[0x2B, 0x2F, 0x76, 0x2F], Encoding::Utf7),
    (&[0xEF, 0xBB, 0xBF], Encoding::Utf8),
    (&[0xFF, 0xFE], Encoding::Utf16Le),
    (&[0xFE, 0xFF], Encoding::Utf16Be),
];

/// Encodings tried in order when no byte order mark is present
const HEURISTIC_CANDIDATES: [Encoding; 3] = [Encoding::Utf8, Encoding::Windows1252, Encoding::Latin1];

impl Encoding {
    /// Determines the encoding of raw bytes. Never fails.
    ///
    /// 1. A recognized byte order mark decides immediately.
    /// 2. Otherwise UTF-8, Windows-1252 and ISO-8859-1 are tried in turn and the
    ///    first decoding that yields a Western-European reference letter wins.
    /// 3. Without any signal the result is UTF-8.
    pub fn detect(bytes: &[u8]) -> Encoding {
        if let Some(encoding) = Self::from_bom(bytes) {
            debug!("Detected encoding {} from byte order mark", encoding);
            return encoding;
        }
        for encoding in HEURISTIC_CANDIDATES {
            if encoding.decode(bytes).contains(REFERENCE_CHARACTERS) {
                debug!("Detected encoding {} from reference characters", encoding);
                return encoding;
            }
        }
        debug!("No encoding signal in {} bytes, falling back to {}", bytes.len(), Encoding::Utf8);
        Encoding::Utf8
    }

    /// Returns the encoding announced by a byte order mark at the start of `bytes`, if any.
    pub fn from_bom(bytes: &[u8]) -> Option<Encoding> {
        BYTE_ORDER_MARKS
            .iter()
            .find(|(bom, _)| bytes.starts_with(bom))
            .map(|(_, encoding)| *encoding)
    }

    /// Resolves a Windows code page number, e.g. 65001 for UTF-8 or 1252 for Windows-1252.
    pub fn from_code_page(code_page: u16) -> Result<Encoding, CsvError> {
        match code_page {
            65000 => Ok(Self::Utf7),
            65001 => Ok(Self::Utf8),
            1200 => Ok(Self::Utf16Le),
            1201 => Ok(Self::Utf16Be),
            12000 => Ok(Self::Utf32Le),
            12001 => Ok(Self::Utf32Be),
            1252 => Ok(Self::Windows1252),
            28591 => Ok(Self::Latin1),
            _ => codepage::to_encoding(code_page)
                .map(Self::from_encoding_rs)
                .ok_or(CsvError::UnknownCodePageError(code_page)),
        }
    }

    /// Resolves a WHATWG encoding label such as "utf-8", "latin1" or "shift_jis".
    ///
    /// Note that WHATWG maps "iso-8859-1" to Windows-1252.
    pub fn from_label(label: &str) -> Option<Encoding> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-7" | "utf7" => Some(Self::Utf7),
            "utf-32" | "utf-32le" => Some(Self::Utf32Le),
            "utf-32be" => Some(Self::Utf32Be),
            _ => encoding_rs::Encoding::for_label(label.trim().as_bytes()).map(Self::from_encoding_rs),
        }
    }

    fn from_encoding_rs(encoding: &'static encoding_rs::Encoding) -> Encoding {
        if encoding == UTF_8 {
            Self::Utf8
        } else if encoding == UTF_16LE {
            Self::Utf16Le
        } else if encoding == UTF_16BE {
            Self::Utf16Be
        } else if encoding == WINDOWS_1252 {
            Self::Windows1252
        } else {
            Self::Other(encoding)
        }
    }

    /// Returns the canonical name of the encoding.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf7 => "utf-7",
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
            Self::Utf32Le => "utf-32le",
            Self::Utf32Be => "utf-32be",
            Self::Windows1252 => "windows-1252",
            Self::Latin1 => "iso-8859-1",
            Self::Other(encoding) => encoding.name(),
        }
    }

    /// Returns the byte order mark written in front of saved files.
    pub fn bom(&self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Le => &[0xFF, 0xFE],
            Self::Utf16Be => &[0xFE, 0xFF],
            Self::Utf32Le => &[0xFF, 0xFE, 0x00, 0x00],
            Self::Utf32Be => &[0x00, 0x00, 0xFE, 0xFF],
            _ => &[],
        }
    }

    /// Decodes bytes into text. Malformed sequences become U+FFFD; this never fails.
    ///
    /// A byte order mark is decoded like any other character (U+FEFF) and left
    /// for the caller to strip.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Self::Utf7 => utf7::decode(bytes),
            Self::Utf8 => UTF_8.decode_without_bom_handling(bytes).0.into_owned(),
            Self::Utf16Le => UTF_16LE.decode_without_bom_handling(bytes).0.into_owned(),
            Self::Utf16Be => UTF_16BE.decode_without_bom_handling(bytes).0.into_owned(),
            Self::Utf32Le => decode_utf32(bytes, Endian::Little),
            Self::Utf32Be => decode_utf32(bytes, Endian::Big),
            Self::Windows1252 => WINDOWS_1252.decode_without_bom_handling(bytes).0.into_owned(),
            Self::Latin1 => encoding_rs::mem::decode_latin1(bytes).into_owned(),
            Self::Other(encoding) => encoding.decode_without_bom_handling(bytes).0.into_owned(),
        }
    }

    /// Encodes text into bytes, without a byte order mark.
    ///
    /// Characters the target cannot represent become '?' for ISO-8859-1 and
    /// numeric character references for the `encoding_rs` single-byte encodings.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf7 => utf7::encode(text),
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16Le => encode_utf16(text, Endian::Little),
            Self::Utf16Be => encode_utf16(text, Endian::Big),
            Self::Utf32Le => encode_utf32(text, Endian::Little),
            Self::Utf32Be => encode_utf32(text, Endian::Big),
            Self::Windows1252 => WINDOWS_1252.encode(text).0.into_owned(),
            Self::Latin1 => text
                .chars()
                .map(|character| u8::try_from(character as u32).unwrap_or(b'?'))
                .collect(),
            Self::Other(encoding) => encoding.encode(text).0.into_owned(),
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
