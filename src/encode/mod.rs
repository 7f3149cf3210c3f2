mod writer;

use crate::error::Error;
use crate::options::{EncodeOptions, Quote};
use crate::value::{map_is_list, Key, Value};
use crate::Result;

/// Encode any serializable value to JSON text.
///
/// The value is first flattened through `serde_json::to_value`, so custom
/// structs, maps, and `serde_json::Value` all work.
///
/// # Examples
/// ```
/// use dirty_json::EncodeOptions;
/// use serde_json::json;
///
/// let data = json!({"name": "Ada", "tags": ["a", "b"]});
/// let text = dirty_json::encode::to_string(&data, &EncodeOptions::default())?;
/// assert_eq!(text, r#"{"name":"Ada","tags":["a","b"]}"#);
/// # Ok::<(), dirty_json::Error>(())
/// ```
pub fn to_string<T: serde::Serialize>(value: &T, options: &EncodeOptions) -> Result<String> {
    let json = serde_json::to_value(value).map_err(|err| Error::serialize(err.to_string()))?;
    encode_value(&Value::from(json), options)
}

/// Encode a [`Value`] directly.
///
/// # Examples
/// ```
/// use dirty_json::{EncodeOptions, Key, Value};
///
/// let value = Value::Map(vec![
///     (Key::Int(0), Value::from("a")),
///     (Key::Int(1), Value::from("b")),
/// ]);
/// let text = dirty_json::encode_value(&value, &EncodeOptions::default())?;
/// assert_eq!(text, r#"["a","b"]"#);
/// # Ok::<(), dirty_json::Error>(())
/// ```
pub fn encode_value(value: &Value, options: &EncodeOptions) -> Result<String> {
    let mut writer = writer::Writer::new(*options);
    write_value(&mut writer, value, false)?;
    Ok(writer.finish())
}

fn effective_quote(options: &EncodeOptions, is_key: bool) -> Quote {
    // Keys are always quoted, even in bare output mode
    if is_key && options.quote == Quote::Bare {
        Quote::Double
    } else {
        options.quote
    }
}

fn write_value(writer: &mut writer::Writer, value: &Value, is_key: bool) -> Result<()> {
    let quote = effective_quote(&writer.options, is_key);
    match value {
        Value::Null => writer.write_str("null"),
        Value::Bool(true) => writer.write_str("true"),
        Value::Bool(false) => writer.write_str("false"),
        Value::Int(i) => {
            if is_key {
                writer.write_str(quote.as_str());
                writer.write_i64(*i);
                writer.write_str(quote.as_str());
            } else {
                writer.write_i64(*i);
            }
        }
        Value::Float(f) => {
            if !f.is_finite() {
                return Err(Error::unsupported(format!("non-finite float {f}")));
            }
            if is_key {
                writer.write_str(quote.as_str());
                writer.write_f64(*f);
                writer.write_str(quote.as_str());
            } else {
                writer.write_f64(*f);
            }
        }
        Value::Str(s) => {
            if !is_key && writer.options.numeric_strings && is_numeric_literal(s) {
                writer.write_str(s);
            } else {
                writer.write_str(quote.as_str());
                writer.write_escaped(s, quote);
                writer.write_str(quote.as_str());
            }
        }
        Value::Seq(items) => write_list(writer, items)?,
        Value::Map(entries) => {
            if map_is_list(entries) {
                writer.write_char('[');
                for (i, (_, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        writer.write_char(',');
                    }
                    write_value(writer, item, false)?;
                }
                writer.write_char(']');
            } else {
                write_map(writer, entries)?;
            }
        }
    }
    Ok(())
}

fn write_list(writer: &mut writer::Writer, items: &[Value]) -> Result<()> {
    writer.write_char('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            writer.write_char(',');
        }
        write_value(writer, item, false)?;
    }
    writer.write_char(']');
    Ok(())
}

fn write_map(writer: &mut writer::Writer, entries: &[(Key, Value)]) -> Result<()> {
    writer.write_char('{');
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            writer.write_char(',');
        }
        match key {
            Key::Int(n) => write_value(writer, &Value::Int(*n), true)?,
            Key::Str(s) => write_value(writer, &Value::Str(s.clone()), true)?,
        }
        writer.write_char(':');
        write_value(writer, value, false)?;
    }
    writer.write_char('}');
    Ok(())
}

/// The numeric grammar accepted for unquoted passthrough:
/// `-?digit+(.digit+)?([eE]digit+)?`. Exponent signs are deliberately not
/// accepted; `1e+5` stays a quoted string.
fn is_numeric_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i = 1;
    }
    let digits = count_digits(&bytes[i..]);
    if digits == 0 {
        return false;
    }
    i += digits;
    if bytes.get(i) == Some(&b'.') {
        let digits = count_digits(&bytes[i + 1..]);
        if digits == 0 {
            return false;
        }
        i += 1 + digits;
    }
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let digits = count_digits(&bytes[i + 1..]);
        if digits == 0 {
            return false;
        }
        i += 1 + digits;
    }
    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
