use pretty_assertions::assert_eq;

use parsekit::json::{parse_json, JsonValue};

#[test]
fn it_parses_a_string() {
    let (value, rest) = parse_json(r#""hello""#).unwrap();
    assert_eq!(value, JsonValue::String("hello".to_string()));
    assert_eq!(rest, "");
}

#[test]
fn it_rejects_an_unclosed_string() {
    assert!(parse_json(r#""unclosed"#).is_err());
}

#[test]
fn it_parses_nested_arrays() {
    let (value, rest) = parse_json(r#"[1, [true, null], "text"]"#).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0], JsonValue::Int(1));
    assert_eq!(
        items[1],
        JsonValue::Array(vec![JsonValue::Bool(true), JsonValue::Null])
    );
    assert_eq!(items[2], JsonValue::String("text".to_string()));
    assert_eq!(rest, "");
}

#[test]
fn it_rejects_a_missing_comma_between_pairs() {
    assert!(parse_json(r#"{"a":1 "b":2}"#).is_err());
}

#[test]
fn it_parses_a_float_not_an_integer_prefix() {
    let (value, rest) = parse_json("3.14").unwrap();
    assert_eq!(value, JsonValue::Float(3.14));
    assert_eq!(rest, "");
}

#[test]
fn it_parses_a_complex_object() {
    let (value, _) = parse_json(
        r#"{
            "num": 42,
            "arr": [{"k": "v"}],
            "bool": false
        }"#,
    )
    .unwrap();

    let map = value.as_object().unwrap();
    assert_eq!(map["num"], JsonValue::Int(42));
    assert_eq!(map["bool"], JsonValue::Bool(false));
    let arr = map["arr"].as_array().unwrap();
    assert_eq!(arr.len(), 1);
    let inner = arr[0].as_object().unwrap();
    assert_eq!(inner["k"], JsonValue::String("v".to_string()));
}

#[test]
fn it_tolerates_whitespace_everywhere() {
    let (value, rest) = parse_json("  [ 1 ,\n\t2 ]  ").unwrap();
    assert_eq!(
        value,
        JsonValue::Array(vec![JsonValue::Int(1), JsonValue::Int(2)])
    );
    assert_eq!(rest, "");
}

#[test]
fn it_parses_a_prefix_and_returns_the_remainder() {
    let (value, rest) = parse_json("42 and then some").unwrap();
    assert_eq!(value, JsonValue::Int(42));
    assert_eq!(rest, "and then some");
}

#[test]
fn json_values_round_trip_through_serde() {
    let (value, _) = parse_json(r#"{"name": "svc", "port": 8080}"#).unwrap();
    let encoded = serde_json::to_string(&value).unwrap();
    let decoded: JsonValue = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, value);
}
