use memchr::{memchr2, memmem};

/// One classified span of dirty input. Comment, whitespace, and trailing
/// comma tokens carry no text because they are deleted on rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    BlockComment,
    LineComment,
    Whitespace,
    DoubleQuoted(&'a str),
    SingleQuoted(&'a str),
    TrailingComma,
    BareKey(&'a str),
    Other(&'a str),
}

/// Priority-ordered tokenizer over raw bytes. At every position the first
/// matching alternative wins; the order is load-bearing (comments and
/// whitespace before strings, strings before punctuation, punctuation
/// before bare keys, bare keys before the single-character fallback).
pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let bytes = self.input.as_bytes();
        if self.pos >= bytes.len() {
            return None;
        }

        if bytes[self.pos..].starts_with(b"/*") {
            // An unterminated block comment is not a comment at all; the
            // slash falls through to the passthrough rule
            if let Some(rel) = memmem::find(&bytes[self.pos + 2..], b"*/") {
                self.pos += 2 + rel + 2;
                return Some(Token::BlockComment);
            }
        } else if bytes[self.pos..].starts_with(b"//") {
            // The line terminator stays for the whitespace rule
            let rest = &bytes[self.pos..];
            let end = rest
                .iter()
                .position(|b| matches!(b, b'\r' | b'\n'))
                .unwrap_or(rest.len());
            self.pos += end;
            return Some(Token::LineComment);
        } else if is_whitespace(bytes[self.pos]) {
            while self.pos < bytes.len() && is_whitespace(bytes[self.pos]) {
                self.pos += 1;
            }
            return Some(Token::Whitespace);
        } else if bytes[self.pos] == b'"' {
            if let Some((body, end)) = self.scan_quoted(b'"') {
                self.pos = end;
                return Some(Token::DoubleQuoted(body));
            }
        } else if bytes[self.pos] == b'\'' {
            if let Some((body, end)) = self.scan_quoted(b'\'') {
                self.pos = end;
                return Some(Token::SingleQuoted(body));
            }
        } else if bytes[self.pos] == b',' {
            let after = skip_filler(bytes, self.pos + 1);
            if matches!(bytes.get(after), Some(b']') | Some(b'}')) {
                // Comma and interleaved filler go; the bracket is matched
                // again as ordinary text on the next call
                self.pos = after;
                return Some(Token::TrailingComma);
            }
        } else if is_ident_byte(bytes[self.pos]) {
            let start = self.pos;
            let mut end = start;
            while end < bytes.len() && is_ident_byte(bytes[end]) {
                end += 1;
            }
            let after = skip_filler(bytes, end);
            if bytes.get(after) == Some(&b':') {
                // Colon not consumed
                self.pos = after;
                return Some(Token::BareKey(&self.input[start..end]));
            }
        }

        // Fallback: one character passes through verbatim, which guarantees
        // forward progress on anything the rules above rejected
        let ch_len = match self.input[self.pos..].chars().next() {
            Some(ch) => ch.len_utf8(),
            None => return None,
        };
        let text = &self.input[self.pos..self.pos + ch_len];
        self.pos += ch_len;
        Some(Token::Other(text))
    }

    /// Escape-aware string scan: a backslash always consumes the following
    /// character. Returns the body span and the position after the closing
    /// quote, or `None` when the literal never closes.
    fn scan_quoted(&self, quote: u8) -> Option<(&'a str, usize)> {
        let bytes = self.input.as_bytes();
        let mut i = self.pos + 1;
        loop {
            let rel = memchr2(quote, b'\\', &bytes[i..])?;
            let at = i + rel;
            if bytes[at] == quote {
                return Some((&self.input[self.pos + 1..at], at + 1));
            }
            if at + 1 >= bytes.len() {
                return None;
            }
            i = at + 2;
        }
    }
}

/// Advance past any run of closed block comments, line comments, and
/// whitespace. Used by the trailing-comma and bare-key lookaheads.
fn skip_filler(bytes: &[u8], mut i: usize) -> usize {
    loop {
        if bytes[i..].starts_with(b"/*") {
            match memmem::find(&bytes[i + 2..], b"*/") {
                Some(rel) => i += 2 + rel + 2,
                None => return i,
            }
        } else if bytes[i..].starts_with(b"//") {
            let rest = &bytes[i..];
            i += rest
                .iter()
                .position(|b| matches!(b, b'\r' | b'\n'))
                .unwrap_or(rest.len());
        } else if i < bytes.len() && is_whitespace(bytes[i]) {
            i += 1;
        } else {
            return i;
        }
    }
}

#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

#[inline]
fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
