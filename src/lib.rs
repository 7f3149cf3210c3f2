pub mod decode;
pub mod encode;
pub mod error;
pub mod escape;
pub mod normalize;
mod num;
pub mod options;
pub mod value;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use crate::encode::encode_value;
pub use crate::error::Error;
pub use crate::options::{DecodeOptions, EncodeOptions, Quote};
pub use crate::value::{Key, Value};

pub type Result<T> = std::result::Result<T, Error>;

pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    to_string_with_options(value, &EncodeOptions::default())
}

pub fn to_string_with_options<T: Serialize>(value: &T, options: &EncodeOptions) -> Result<String> {
    encode::to_string(value, options)
}

pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    from_str_with_options(input, &DecodeOptions::default())
}

pub fn from_str_with_options<T: DeserializeOwned>(
    input: &str,
    options: &DecodeOptions,
) -> Result<T> {
    decode::from_str(input, options)
}

pub fn decode_to_value(input: &str) -> Result<Value> {
    decode_to_value_with_options(input, &DecodeOptions::default())
}

pub fn decode_to_value_with_options(input: &str, options: &DecodeOptions) -> Result<Value> {
    decode::to_value(input, options)
}

pub fn normalize(input: &str) -> Result<String> {
    normalize::normalize(input)
}
