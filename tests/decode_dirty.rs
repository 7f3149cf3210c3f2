use rstest::rstest;
use serde_json::{json, Value as JsonValue};

use dirty_json::{DecodeOptions, EncodeOptions};

const DIRTY: &str = "{\n  //single line comment\n  1:2,\n  33:-44.11,\n  \"\\u003Ctag\\u003E\" : \"\\u0026bar\\u0026\",\n  /*multi\n    line\n    comment*/\n  null: null,\n  true : true,\n  false\n    :\n      false\n        ,\n  'c' :'d',\n  \"e\" : \"f\",\n  \"/\": \"\\/\",\n  \"ПРИВЕТ\": 'привет' ,\n  \"new\\r\\nline\" : \"new\\\nline\",\n  \"\\'\" : '\"',\n  g:[1,'a' ,'b', 'c' , ],\n}";

const CANONICAL: &str = "{\"1\":2,\"33\":-44.11,\"<tag>\":\"&bar&\",\"null\":null,\"true\":true,\"false\":false,\"c\":\"d\",\"e\":\"f\",\"\\/\":\"\\/\",\"ПРИВЕТ\":\"привет\",\"new\\r\\nline\":\"new\\nline\",\"'\":\"\\\"\",\"g\":[1,\"a\",\"b\",\"c\"]}";

#[rstest]
fn reference_document_decodes() {
    let value: JsonValue = dirty_json::from_str(DIRTY).unwrap();
    assert_eq!(
        value,
        json!({
            "1": 2,
            "33": -44.11,
            "<tag>": "&bar&",
            "null": null,
            "true": true,
            "false": false,
            "c": "d",
            "e": "f",
            "/": "/",
            "ПРИВЕТ": "привет",
            "new\r\nline": "new\nline",
            "'": "\"",
            "g": [1, "a", "b", "c"],
        })
    );
}

#[rstest]
fn decode_then_encode_reproduces_canonical_text() {
    let value = dirty_json::decode_to_value(DIRTY).unwrap();
    let text = dirty_json::encode_value(&value, &EncodeOptions::default()).unwrap();
    assert_eq!(text, CANONICAL);
}

#[rstest]
#[case(json!(null))]
#[case(json!(true))]
#[case(json!(-12))]
#[case(json!(0.25))]
#[case(json!("text with \"quotes\" and \\slashes\\"))]
#[case(json!([1, [2, [3]], {"a": null}]))]
#[case(json!({"nested": {"deep": ["x", 1.5, false]}}))]
fn well_formed_values_round_trip(#[case] value: JsonValue) {
    let text = dirty_json::to_string(&value).unwrap();
    let back: JsonValue = dirty_json::from_str(&text).unwrap();
    assert_eq!(back, value);
}

#[rstest]
fn list_shaped_map_round_trips_as_sequence() {
    use dirty_json::{Key, Value};

    let value = Value::Map(vec![
        (Key::Int(0), Value::Int(10)),
        (Key::Int(1), Value::Int(11)),
    ]);
    let text = dirty_json::encode_value(&value, &EncodeOptions::default()).unwrap();
    assert_eq!(text, "[10,11]");

    // the collapse is expected: it comes back as a sequence, not a mapping
    let back = dirty_json::decode_to_value(&text).unwrap();
    assert_eq!(back, Value::Seq(vec![Value::Int(10), Value::Int(11)]));
}

#[rstest]
fn strict_documents_never_touch_the_normalizer() {
    // a depth failure on strict input must not be laundered into a retry
    let options = DecodeOptions::new().with_max_depth(1);
    let err = dirty_json::from_str_with_options::<JsonValue>("{\"a\":[1]}", &options).unwrap_err();
    assert!(err.is_depth());
}

#[rstest]
#[case("{a:}")]
#[case("{:1}")]
#[case("[1,,2]")]
#[case("@@@")]
fn unrepairable_input_reports_syntax(#[case] input: &str) {
    let err = dirty_json::from_str::<JsonValue>(input).unwrap_err();
    assert!(err.is_syntax());
}

#[rstest]
fn comments_only_document_is_empty_and_fails_parse() {
    assert_eq!(dirty_json::normalize("//nothing here").unwrap(), "");
    let err = dirty_json::from_str::<JsonValue>("//nothing here").unwrap_err();
    assert!(err.is_syntax());
}
