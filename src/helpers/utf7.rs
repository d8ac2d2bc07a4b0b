//! UTF-7 codec (RFC 2152)
//! Direct characters pass through, everything else travels as modified base64 of UTF-16 code units

const BASE64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Characters written as-is (RFC 2152 Set D, Set O and the rule characters)
const DIRECT_CHARACTERS: &str = "'(),-./:? \t\r\n!\"#$%&*;<=>@[]^_`{|}";

fn base64_value(byte: u8) -> Option<u32> {
    match byte {
        b'A'..=b'Z' => Some((byte - b'A') as u32),
        b'a'..=b'z' => Some((byte - b'a') as u32 + 26),
        b'0'..=b'9' => Some((byte - b'0') as u32 + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

fn is_direct(character: char) -> bool {
    character.is_ascii_alphanumeric() || DIRECT_CHARACTERS.contains(character)
}

/// Decodes UTF-7 bytes. Malformed input degrades to U+FFFD instead of failing.
pub(crate) fn decode(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        let byte = bytes[index];
        index += 1;
        if byte != b'+' {
            text.push(if byte.is_ascii() { byte as char } else { char::REPLACEMENT_CHARACTER });
            continue;
        }
        if bytes.get(index) == Some(&b'-') { // "+-" encodes a literal plus sign
            text.push('+');
            index += 1;
            continue;
        }

        let mut bits: u32 = 0;
        let mut count: u32 = 0;
        let mut units: Vec<u16> = Vec::new();
        while let Some(value) = bytes.get(index).copied().and_then(base64_value) {
            bits = (bits << 6) | value;
            count += 6;
            if count >= 16 {
                count -= 16;
                units.push((bits >> count) as u16);
                bits &= (1 << count) - 1;
            }
            index += 1;
        }
        text.extend(char::decode_utf16(units).map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER)));
        if bytes.get(index) == Some(&b'-') {
            index += 1;
        }
    }
    text
}

/// Encodes text as UTF-7, closing every shifted run with an explicit '-'.
pub(crate) fn encode(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut pending: Vec<u16> = Vec::new();
    for character in text.chars() {
        if is_direct(character) {
            flush(&mut bytes, &mut pending);
            bytes.push(character as u8);
        } else if character == '+' {
            flush(&mut bytes, &mut pending);
            bytes.extend_from_slice(b"+-");
        } else {
            let mut buffer = [0u16; 2];
            pending.extend_from_slice(character.encode_utf16(&mut buffer));
        }
    }
    flush(&mut bytes, &mut pending);
    bytes
}

fn flush(bytes: &mut Vec<u8>, pending: &mut Vec<u16>) {
    if pending.is_empty() {
        return;
    }
    bytes.push(b'+');
    let mut bits: u32 = 0;
    let mut count: u32 = 0;
    for unit in pending.drain(..) {
        bits = (bits << 16) | unit as u32;
        count += 16;
        while count >= 6 {
            count -= 6;
            bytes.push(BASE64[((bits >> count) & 0x3F) as usize]);
        }
        bits &= (1 << count) - 1;
    }
    if count > 0 {
        bytes.push(BASE64[((bits << (6 - count)) & 0x3F) as usize]);
    }
    bytes.push(b'-');
}
