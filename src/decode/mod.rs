use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Value as JsonValue;

use crate::error::Error;
use crate::normalize::normalize;
use crate::options::DecodeOptions;
use crate::value::Value;
use crate::Result;

/// Decode JSON text into any deserializable type, normalizing dirty input
/// when the strict parse reports a syntax failure.
///
/// # Examples
/// ```
/// use dirty_json::DecodeOptions;
/// use serde_json::json;
///
/// let value: serde_json::Value =
///     dirty_json::decode::from_str("{a:1, b:[2,3,],}", &DecodeOptions::default())?;
/// assert_eq!(value, json!({"a": 1, "b": [2, 3]}));
/// # Ok::<(), dirty_json::Error>(())
/// ```
pub fn from_str<T: DeserializeOwned>(input: &str, options: &DecodeOptions) -> Result<T> {
    let value = parse_value(input, options)?;
    serde_json::from_value(value).map_err(|err| Error::deserialize(err.to_string()))
}

/// Decode JSON text into a [`Value`].
pub fn to_value(input: &str, options: &DecodeOptions) -> Result<Value> {
    Ok(Value::from(parse_value(input, options)?))
}

fn parse_value(input: &str, options: &DecodeOptions) -> Result<JsonValue> {
    let value = match serde_json::from_str::<JsonValue>(input) {
        Ok(value) => value,
        Err(err) => {
            if !should_normalize(&err) {
                return Err(map_parse_error(err, options));
            }
            let normalized = normalize(input)?;
            serde_json::from_str::<JsonValue>(&normalized)
                .map_err(|err| map_parse_error(err, options))?
        }
    };
    validate_depth(&value, options.max_depth)?;
    Ok(value)
}

/// Normalization targets malformedness only. Depth overflow and any
/// non-syntax failure are returned as-is without a second parse attempt.
fn should_normalize(err: &serde_json::Error) -> bool {
    if is_recursion_limit(err) {
        return false;
    }
    matches!(err.classify(), Category::Syntax | Category::Eof)
}

fn is_recursion_limit(err: &serde_json::Error) -> bool {
    // serde_json files its recursion ceiling under Category::Syntax; the
    // message prefix is the only stable discriminator
    err.classify() == Category::Syntax && err.to_string().starts_with("recursion limit exceeded")
}

fn map_parse_error(err: serde_json::Error, options: &DecodeOptions) -> Error {
    if is_recursion_limit(&err) {
        return Error::DepthExceeded {
            limit: options.max_depth,
        };
    }
    match err.classify() {
        Category::Syntax | Category::Eof => Error::syntax(err.to_string()),
        _ => Error::deserialize(err.to_string()),
    }
}

fn validate_depth(value: &JsonValue, limit: usize) -> Result<()> {
    if depth_of(value) > limit {
        return Err(Error::DepthExceeded { limit });
    }
    Ok(())
}

/// Container nesting count; scalars sit at depth zero, matching the way
/// serde_json counts toward its own recursion limit.
fn depth_of(value: &JsonValue) -> usize {
    match value {
        JsonValue::Array(items) => 1 + items.iter().map(depth_of).max().unwrap_or(0),
        JsonValue::Object(map) => 1 + map.values().map(depth_of).max().unwrap_or(0),
        _ => 0,
    }
}
