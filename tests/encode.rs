use rstest::rstest;
use serde_json::json;

use dirty_json::{EncodeOptions, Key, Quote, Value};

fn options() -> EncodeOptions {
    EncodeOptions::default()
}

#[rstest]
#[case(json!(null), "null")]
#[case(json!(true), "true")]
#[case(json!(false), "false")]
#[case(json!(42), "42")]
#[case(json!(-7), "-7")]
#[case(json!(2.5), "2.5")]
#[case(json!("hi"), "\"hi\"")]
#[case(json!([1, "a", null]), "[1,\"a\",null]")]
#[case(json!({"a": 1, "b": [true]}), "{\"a\":1,\"b\":[true]}")]
fn encode_json_values(#[case] value: serde_json::Value, #[case] expected: &str) {
    assert_eq!(dirty_json::to_string(&value).unwrap(), expected);
}

#[rstest]
fn structs_encode_through_serde() {
    #[derive(serde::Serialize)]
    struct User {
        name: String,
        age: u32,
    }

    let user = User {
        name: "Ada".to_string(),
        age: 37,
    };
    assert_eq!(
        dirty_json::to_string(&user).unwrap(),
        "{\"name\":\"Ada\",\"age\":37}"
    );
}

#[rstest]
#[case("42", "42")]
#[case("007", "007")]
#[case("-44.11", "-44.11")]
#[case("1e5", "1e5")]
#[case("1e+5", "\"1e+5\"")]
#[case("1e-5", "\"1e-5\"")]
#[case("4 2", "\"4 2\"")]
fn numeric_strings_pass_unquoted(#[case] input: &str, #[case] expected: &str) {
    let options = options().with_numeric_strings(true);
    let value = Value::from(input);
    assert_eq!(
        dirty_json::encode_value(&value, &options).unwrap(),
        expected
    );
}

#[rstest]
fn numeric_strings_off_by_default() {
    assert_eq!(
        dirty_json::encode_value(&Value::from("42"), &options()).unwrap(),
        "\"42\""
    );
}

#[rstest]
fn numeric_string_keys_stay_quoted() {
    let options = options().with_numeric_strings(true);
    let value = Value::Map(vec![(Key::from("42"), Value::from("42"))]);
    assert_eq!(
        dirty_json::encode_value(&value, &options).unwrap(),
        "{\"42\":42}"
    );
}

#[rstest]
fn escapes_follow_the_table() {
    let value = Value::from("a\"b\\c/d\x08e\x0cf\ng\rh\ti");
    assert_eq!(
        dirty_json::encode_value(&value, &options()).unwrap(),
        "\"a\\\"b\\\\c\\/d\\be\\ff\\ng\\rh\\ti\""
    );
}

#[rstest]
fn non_ascii_passes_through_unescaped() {
    let value = Value::from("ПРИВЕТ привет");
    assert_eq!(
        dirty_json::encode_value(&value, &options()).unwrap(),
        "\"ПРИВЕТ привет\""
    );
}

#[rstest]
fn single_quote_mode_escapes_single_quotes() {
    let options = options().with_quote(Quote::Single);
    let value = Value::Map(vec![(Key::from("a"), Value::from("it's"))]);
    assert_eq!(
        dirty_json::encode_value(&value, &options).unwrap(),
        "{'a':'it\\'s'}"
    );
}

#[rstest]
fn bare_mode_quotes_keys_only() {
    let options = options().with_quote(Quote::Bare);
    let value = Value::Map(vec![
        (Key::from("a"), Value::from("b")),
        (Key::Int(5), Value::from("x y")),
    ]);
    assert_eq!(
        dirty_json::encode_value(&value, &options).unwrap(),
        "{\"a\":b,\"5\":x y}"
    );
}

#[rstest]
fn contiguous_int_keys_encode_as_list() {
    let value = Value::Map(vec![
        (Key::Int(0), Value::from("a")),
        (Key::Int(1), Value::from("b")),
        (Key::Int(2), Value::from("c")),
    ]);
    assert_eq!(
        dirty_json::encode_value(&value, &options()).unwrap(),
        "[\"a\",\"b\",\"c\"]"
    );
}

#[rstest]
#[case(vec![(Key::Int(0), Value::Null), (Key::Int(2), Value::Null)], "{\"0\":null,\"2\":null}")]
#[case(vec![(Key::Int(1), Value::Null), (Key::Int(0), Value::Null)], "{\"1\":null,\"0\":null}")]
#[case(vec![(Key::from("0"), Value::Null)], "{\"0\":null}")]
fn broken_contiguity_forces_map(
    #[case] entries: Vec<(Key, Value)>,
    #[case] expected: &str,
) {
    assert_eq!(
        dirty_json::encode_value(&Value::Map(entries), &options()).unwrap(),
        expected
    );
}

#[rstest]
fn int_and_float_keys_are_quoted() {
    let value = Value::Map(vec![
        (Key::Int(33), Value::Float(-44.11)),
        (Key::from("true"), Value::Bool(true)),
    ]);
    assert_eq!(
        dirty_json::encode_value(&value, &options()).unwrap(),
        "{\"33\":-44.11,\"true\":true}"
    );
}

#[rstest]
fn nested_failure_aborts_everything() {
    let value = Value::Map(vec![(
        Key::from("outer"),
        Value::Seq(vec![
            Value::Int(1),
            Value::Map(vec![(Key::from("bad"), Value::Float(f64::INFINITY))]),
        ]),
    )]);
    let err = dirty_json::encode_value(&value, &options()).unwrap_err();
    assert!(matches!(err, dirty_json::Error::UnsupportedValue(_)));
}

#[rstest]
fn float_text_never_uses_comma_or_exponent() {
    let text = dirty_json::encode_value(&Value::Float(1.5e7), &options()).unwrap();
    assert_eq!(text, "15000000");

    let text = dirty_json::encode_value(&Value::Float(-0.125), &options()).unwrap();
    assert_eq!(text, "-0.125");
}
