use crate::escape::escape_byte_quoted;
use crate::options::{EncodeOptions, Quote};

pub(crate) struct Writer {
    buffer: Vec<u8>,
    pub(crate) options: EncodeOptions,
}

impl Writer {
    pub fn new(options: EncodeOptions) -> Self {
        Self {
            buffer: Vec::new(),
            options,
        }
    }

    pub fn finish(self) -> String {
        String::from_utf8(self.buffer).expect("writer output must be valid UTF-8")
    }

    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    pub fn write_char(&mut self, ch: char) {
        if ch.is_ascii() {
            self.buffer.push(ch as u8);
            return;
        }

        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        self.buffer.extend_from_slice(encoded.as_bytes());
    }

    pub fn write_i64(&mut self, value: i64) {
        let mut buf = itoa::Buffer::new();
        self.buffer.extend_from_slice(buf.format(value).as_bytes());
    }

    pub fn write_f64(&mut self, value: f64) {
        self.write_str(&crate::num::format_f64(value));
    }

    /// Escape every byte present in the active table, copy everything else
    /// through untouched. Non-ASCII text never needs escaping.
    pub fn write_escaped(&mut self, s: &str, quote: Quote) {
        let bytes = s.as_bytes();
        let mut start = 0;
        for (idx, byte) in bytes.iter().enumerate() {
            let Some(escaped) = escape_byte_quoted(*byte, quote) else {
                continue;
            };
            if start < idx {
                self.buffer.extend_from_slice(&bytes[start..idx]);
            }
            self.buffer.extend_from_slice(escaped.as_bytes());
            start = idx + 1;
        }
        if start < bytes.len() {
            self.buffer.extend_from_slice(&bytes[start..]);
        }
    }
}
