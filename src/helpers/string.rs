//! Binary data conversion utilities for decoding wide Unicode text from byte slices.
//! Provides little-endian and big-endian code unit conversions for the UTF-16/UTF-32 codecs.

/// Byte order of multi-byte code units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Endian {
    Little,
    Big,
}

/// Converts a byte slice into an iterator of 32-bit code units.
/// Processes bytes in 4-byte chunks; an incomplete trailing chunk is ignored.
pub(crate) fn to_u32_iter(bytes: &[u8], endian: Endian) -> impl ExactSizeIterator<Item = u32> + '_ {
    bytes
        .chunks_exact(4)
        .map(move |chunk| to_u32([chunk[0], chunk[1], chunk[2], chunk[3]], endian))
}

#[inline]
fn to_u32(bytes: [u8; 4], endian: Endian) -> u32 {
    match endian {
        Endian::Little => u32::from_le_bytes(bytes),
        Endian::Big => u32::from_be_bytes(bytes),
    }
}

/// Decodes UTF-32 code units, replacing invalid scalar values and a partial trailing unit with U+FFFD.
pub(crate) fn decode_utf32(bytes: &[u8], endian: Endian) -> String {
    let mut text: String = to_u32_iter(bytes, endian)
        .map(|unit| char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if bytes.len() % 4 != 0 {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

/// Encodes text as UTF-16 code units in the given byte order.
pub(crate) fn encode_utf16(text: &str, endian: Endian) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        match endian {
            Endian::Little => bytes.extend_from_slice(&unit.to_le_bytes()),
            Endian::Big => bytes.extend_from_slice(&unit.to_be_bytes()),
        }
    }
    bytes
}

/// Encodes text as UTF-32 code units in the given byte order.
pub(crate) fn encode_utf32(text: &str, endian: Endian) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() * 4);
    for character in text.chars() {
        let unit = character as u32;
        match endian {
            Endian::Little => bytes.extend_from_slice(&unit.to_le_bytes()),
            Endian::Big => bytes.extend_from_slice(&unit.to_be_bytes()),
        }
    }
    bytes
}
