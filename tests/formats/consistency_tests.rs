//! JSON wire-shape and determinism tests

use serde_json::{json, Value};

use crate::common::*;

const CARD: &str = r#"
import { useState } from "react";

interface CardProps {
  title: string;
  subtitle?: string;
}

export function Card(props: CardProps) {
  const [open, setOpen] = useState(false);
  return (
    <article className="card" hidden data-id={props.id} footer={<small>end</small>}>
      <h2>{props.title}</h2>
      {open && <p>{props.subtitle}</p>}
      {rows.map((row, index) => <Row key={index} {...row} />)}
    </article>
  );
}
"#;

#[test]
fn test_descriptor_is_byte_deterministic() {
    let first = serde_json::to_string(&extract_ok(CARD)).unwrap();
    for _ in 0..5 {
        assert_eq!(serde_json::to_string(&extract_ok(CARD)).unwrap(), first);
    }
}

#[test]
fn test_top_level_keys() {
    let value = extract_json(CARD);
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["name", "props", "state", "effects", "callbacks", "refs", "imports", "exports", "markup"]
    );
    for list in ["props", "state", "effects", "callbacks", "refs", "imports"] {
        assert!(value[list].is_array(), "{} must be an array", list);
    }
}

#[test]
fn test_record_shapes() {
    let value = extract_json(CARD);
    assert_eq!(
        value["props"][1],
        json!({"name": "subtitle", "type": "string", "required": false})
    );
    assert_eq!(
        value["state"][0],
        json!({"name": "open", "setter": "setOpen", "type": "boolean", "initialValue": false})
    );
    assert_eq!(
        value["imports"][0],
        json!({"source": "react", "named": ["useState"]})
    );
    assert_eq!(value["exports"], json!({"Card": true}));
}

#[test]
fn test_markup_shape() {
    let value = extract_json(CARD);
    let markup = &value["markup"];

    assert_eq!(markup["type"], "article");
    assert_eq!(markup["props"]["className"], "card");
    assert_eq!(markup["props"]["hidden"], true);
    assert_eq!(
        markup["props"]["data-id"],
        json!({"type": "expression", "code": "props.id"})
    );
    assert_eq!(
        markup["props"]["footer"],
        json!({
            "type": "small",
            "props": {},
            "children": [{"type": "text", "props": {"content": "end"}, "children": []}]
        })
    );

    let children = markup["children"].as_array().unwrap();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0]["type"], "h2");
    assert_eq!(
        children[1],
        json!({"type": "expression", "props": {"content": "open && <p>{props.subtitle}</p>"}, "children": []})
    );

    let mapping = &children[2];
    assert_eq!(mapping["type"], "mapping");
    assert_eq!(mapping["children"], json!([]));
    assert_eq!(mapping["props"]["array"], "rows");
    assert_eq!(mapping["props"]["item"], "row");
    assert_eq!(mapping["props"]["index"], "index");

    let template = &mapping["props"]["template"];
    assert_eq!(template["type"], "Row");
    let template_props = template["props"].as_object().unwrap();
    assert_eq!(template_props.len(), 2);
    let (spread_key, spread_value) = template_props.iter().nth(1).unwrap();
    assert!(spread_key.starts_with("__spread__"));
    assert_eq!(spread_value, &json!({"type": "spread", "code": "row"}));
}

#[test]
fn test_mapping_attribute_value() {
    let value = extract_json(&component_returning(
        "<Table rows={data.map((d) => <tr key={d.id} />)} />",
    ));
    let rows = &value["markup"]["props"]["rows"];
    assert_eq!(rows["type"], "mapping");
    assert_eq!(rows["array"], "data");
    assert_eq!(rows["item"], "d");
    assert_eq!(rows["index"], "");
    assert_eq!(rows["template"]["type"], "tr");
}

#[test]
fn test_no_component_serializes_null_markup_and_omits_exports() {
    let value = extract_json("const helper = 1;");
    assert_eq!(value["name"], "");
    assert_eq!(value["markup"], Value::Null);
    assert!(value.get("exports").is_none());
}

#[test]
fn test_compact_and_pretty_agree() {
    let descriptor = extract_ok(CARD);
    let compact: Value = serde_json::from_str(&serde_json::to_string(&descriptor).unwrap()).unwrap();
    let pretty: Value = serde_json::from_str(&serde_json::to_string_pretty(&descriptor).unwrap()).unwrap();
    assert_eq!(compact, pretty);
}

#[test]
fn test_initial_value_encodings() {
    let value = extract_json(
        r#"
export function Form() {
  const [a, setA] = useState({});
  const [b, setB] = useState(null);
  const [c, setC] = useState(() => compute());
  const [d, setD] = useState(0x10);
  const el = useRef();
  return <form />;
}
"#,
    );
    let state = value["state"].as_array().unwrap();
    assert_eq!(state[0]["initialValue"], json!({}));
    assert_eq!(state[0]["type"], "object");
    assert_eq!(state[1]["initialValue"], Value::Null);
    assert_eq!(state[1]["type"], "any");
    assert_eq!(state[2]["initialValue"], "() => compute()");
    assert_eq!(state[2]["type"], "string");
    assert_eq!(state[3]["initialValue"], 16);
    assert_eq!(value["refs"][0], json!({"name": "el"}));
}
