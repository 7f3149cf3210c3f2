mod scanner;

use memchr::memchr;

use crate::escape::{escape_byte, unescape_char};
use crate::Result;

use scanner::{Scanner, Token};

/// Rewrite a dirty JSON-like string into strict JSON.
///
/// Comments and insignificant whitespace are deleted, trailing commas
/// dropped, bare keys quoted, and string literals re-emitted double-quoted
/// with canonical escapes. Bytes the tokenizer does not recognize pass
/// through untouched, so already-strict input survives byte-for-byte apart
/// from deleted whitespace.
///
/// # Examples
/// ```
/// let fixed = dirty_json::normalize("{a:1, /*c*/ 'b':'x',}")?;
/// assert_eq!(fixed, r#"{"a":1,"b":"x"}"#);
/// # Ok::<(), dirty_json::Error>(())
/// ```
pub fn normalize(input: &str) -> Result<String> {
    let mut scanner = Scanner::new(input);
    let mut out = String::with_capacity(input.len());
    while let Some(token) = scanner.next_token() {
        match token {
            Token::BlockComment
            | Token::LineComment
            | Token::Whitespace
            | Token::TrailingComma => {}
            Token::DoubleQuoted(body) | Token::SingleQuoted(body) => {
                rewrite_string(body, &mut out);
            }
            Token::BareKey(name) => {
                out.push('"');
                out.push_str(name);
                out.push('"');
            }
            Token::Other(text) => out.push_str(text),
        }
    }
    Ok(out)
}

/// Decode whatever escape convention the body uses, then re-encode through
/// the canonical table and wrap in double quotes.
fn rewrite_string(body: &str, out: &mut String) {
    let decoded = decode_escapes(body);
    out.push('"');
    push_escaped(out, &decoded);
    out.push('"');
}

fn decode_escapes(body: &str) -> String {
    let bytes = body.as_bytes();
    let mut out = String::with_capacity(body.len());
    let mut i = 0;
    while i < bytes.len() {
        let Some(rel) = memchr(b'\\', &bytes[i..]) else {
            out.push_str(&body[i..]);
            break;
        };
        let at = i + rel;
        out.push_str(&body[i..at]);
        if at + 1 >= bytes.len() {
            // lone trailing backslash copies through
            out.push('\\');
            break;
        }
        if bytes[at + 1] == b'u' {
            if let Some(codepoint) = hex4(&bytes[at + 2..]) {
                out.push(char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER));
                i = at + 6;
                continue;
            }
        }
        let Some(ch) = body[at + 1..].chars().next() else {
            out.push('\\');
            break;
        };
        match unescape_char(ch) {
            Some(raw) => out.push(raw as char),
            // unrecognized escapes drop the backslash and keep the char
            None => out.push(ch),
        }
        i = at + 1 + ch.len_utf8();
    }
    out
}

fn push_escaped(out: &mut String, s: &str) {
    let bytes = s.as_bytes();
    let mut start = 0;
    for (idx, byte) in bytes.iter().enumerate() {
        let Some(escaped) = escape_byte(*byte) else {
            continue;
        };
        if start < idx {
            out.push_str(&s[start..idx]);
        }
        out.push_str(escaped);
        start = idx + 1;
    }
    if start < s.len() {
        out.push_str(&s[start..]);
    }
}

fn hex4(bytes: &[u8]) -> Option<u32> {
    if bytes.len() < 4 {
        return None;
    }
    let mut value = 0u32;
    for &byte in &bytes[..4] {
        value = value * 16 + (byte as char).to_digit(16)?;
    }
    Some(value)
}
