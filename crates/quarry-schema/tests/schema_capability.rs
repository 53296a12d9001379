//! Schemas and the nested parser working together, the way the `object`
//! decoder drives them.

use proptest::prelude::*;
use quarry_schema::{
    AnyObject, ArrayOf, Deserialized, IntegerFromString, NestedParser, NumberFromString, QsParser,
    Schema, Text,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize, PartialEq)]
struct Owner {
    name: String,
    team: String,
}

#[test]
fn nested_string_to_any_object() {
    let tree = QsParser::new()
        .parse_nested("owner[name]=ann&owner[team]=core&status=open")
        .unwrap();

    let object = AnyObject.parse(&tree).unwrap();
    assert_eq!(object.get("status"), Some(&json!("open")));
    assert_eq!(object.get("owner"), Some(&json!({"name": "ann", "team": "core"})));
}

#[test]
fn nested_string_to_typed_struct() {
    let tree = QsParser::new().parse_nested("name=ann&team=core").unwrap();

    let owner = Deserialized::<Owner>::new().parse_option(&tree);
    assert_eq!(
        owner,
        Some(Owner {
            name: "ann".to_string(),
            team: "core".to_string(),
        })
    );
}

#[derive(Debug, Deserialize, PartialEq)]
struct Listing {
    page: String,
    sort: Vec<String>,
}

#[test]
fn repeated_and_appended_keys_fill_sequences() {
    let schema = Deserialized::<Listing>::new();

    let appended = QsParser::new()
        .parse_nested("page=2&sort[]=name&sort[]=date")
        .unwrap();
    let repeated = QsParser::new()
        .parse_nested("page=2&sort=name&sort=date")
        .unwrap();

    let expected = Listing {
        page: "2".to_string(),
        sort: vec!["name".to_string(), "date".to_string()],
    };
    assert_eq!(schema.parse_option(&appended), Some(expected));
    assert_eq!(schema.parse_option(&appended), schema.parse_option(&repeated));

    let single = QsParser::new().parse_nested("page=2&sort=name").unwrap();
    assert_eq!(schema.parse_option(&single), None);
}

#[test]
fn split_values_through_array_of() {
    let items: Vec<Value> = "1,2,3".split(',').map(Value::from).collect();
    let parsed = ArrayOf::new(IntegerFromString).parse(&Value::Array(items));
    assert_eq!(parsed, Ok(vec![1, 2, 3]));
}

proptest! {
    #[test]
    fn text_array_accepts_any_split(raw in ".*") {
        let items: Vec<Value> = raw.split(',').map(Value::from).collect();
        let parsed = ArrayOf::new(Text).parse(&Value::Array(items)).unwrap();
        prop_assert_eq!(parsed.join(","), raw);
    }

    #[test]
    fn number_schema_agrees_with_std_parse(n in proptest::num::f64::NORMAL) {
        let text = n.to_string();
        prop_assert_eq!(NumberFromString.parse_option(&Value::from(text.as_str())), Some(n));
    }

    #[test]
    fn lenient_parser_always_yields_an_object(raw in "[a-z0-9=&\\[\\]%+]{0,40}") {
        let tree = QsParser::new().parse_nested(&raw).unwrap();
        prop_assert!(AnyObject.parse(&tree).is_ok());
    }

    #[test]
    fn schema_parsing_is_pure(raw in "[0-9a-z,]{0,20}") {
        let items: Vec<Value> = raw.split(',').map(Value::from).collect();
        let input = Value::Array(items);
        let schema = ArrayOf::new(NumberFromString);
        prop_assert_eq!(schema.parse_option(&input), schema.parse_option(&input));
    }
}
