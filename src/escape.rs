use crate::options::Quote;

/// Canonical JSON escapes, raw byte to 2-character sequence.
pub const ESCAPE_TABLE: &[(u8, &str)] = &[
    (b'\\', "\\\\"),
    (b'"', "\\\""),
    (b'/', "\\/"),
    (0x08, "\\b"),
    (0x0c, "\\f"),
    (b'\n', "\\n"),
    (b'\r', "\\r"),
    (b'\t', "\\t"),
];

/// JavaScript-only addition, consulted when the active quote is not `"`.
pub const SINGLE_QUOTE_ESCAPE: (u8, &str) = (b'\'', "\\'");

#[inline]
pub fn escape_byte(byte: u8) -> Option<&'static str> {
    ESCAPE_TABLE
        .iter()
        .find(|(raw, _)| *raw == byte)
        .map(|(_, seq)| *seq)
}

#[inline]
pub fn escape_byte_quoted(byte: u8, quote: Quote) -> Option<&'static str> {
    if quote != Quote::Double && byte == SINGLE_QUOTE_ESCAPE.0 {
        return Some(SINGLE_QUOTE_ESCAPE.1);
    }
    escape_byte(byte)
}

/// Inverse of [`ESCAPE_TABLE`], keyed by the character after the backslash.
#[inline]
pub fn unescape_char(ch: char) -> Option<u8> {
    match ch {
        '\\' => Some(b'\\'),
        '"' => Some(b'"'),
        '/' => Some(b'/'),
        'b' => Some(0x08),
        'f' => Some(0x0c),
        'n' => Some(b'\n'),
        'r' => Some(b'\r'),
        't' => Some(b'\t'),
        _ => None,
    }
}
