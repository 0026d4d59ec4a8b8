//! Extraction rules exercised end to end

use jsx_distill::{ExportValue, Literal, MarkupNode, PropValue};

use crate::common::*;

#[test]
fn test_whitespace_only_div_has_no_children() {
    let descriptor = extract_ok(&component_returning("<div>   </div>"));
    let markup = descriptor.markup.expect("markup");
    assert_eq!(markup.type_tag(), "div");
    assert!(markup.children().is_empty());
}

#[test]
fn test_use_state_number() {
    let descriptor = extract_ok(
        r#"
import { useState } from "react";

export function Counter() {
  const [count, setCount] = useState(0);
  return <button onClick={() => setCount(count + 1)}>{count}</button>;
}
"#,
    );
    assert_eq!(descriptor.state.len(), 1);
    let state = &descriptor.state[0];
    assert_eq!(state.name, "count");
    assert_eq!(state.setter, "setCount");
    assert_eq!(state.state_type, "number");
    assert_eq!(state.initial_value, Some(Literal::Number(0.into())));
}

#[test]
fn test_use_state_type_argument() {
    let descriptor = extract_ok(
        r#"
export const Tags = () => {
  const [tags, setTags] = useState<string[]>([]);
  return <ul />;
};
"#,
    );
    let state = &descriptor.state[0];
    assert_eq!(state.state_type, "Array<string>");
    assert_eq!(state.initial_value, Some(Literal::EmptyArray));
}

#[test]
fn test_interface_props() {
    let descriptor = extract_ok(
        r#"
interface Props {
  label: string;
  count?: number;
}

function Card(props: Props) {
  return <div className="card">{props.label}</div>;
}
"#,
    );
    assert_eq!(descriptor.name, "Card");
    assert_props(
        &descriptor.props,
        &[("label", "string", true), ("count", "number", false)],
    );
}

#[test]
fn test_destructured_props_with_rest() {
    let descriptor = extract_ok("function Card({label, ...rest}) { return <div {...rest}>{label}</div>; }");
    assert_props(
        &descriptor.props,
        &[("label", "any", true), ("rest", "object", false)],
    );
}

#[test]
fn test_map_becomes_mapping() {
    let descriptor = extract_ok(&component_returning(
        "<ul>{items.map((item, i) => <li key={i}>{item}</li>)}</ul>",
    ));
    let markup = descriptor.markup.expect("markup");
    let MarkupNode::Mapping(mapping) = &markup.children()[0] else {
        panic!("expected mapping child, got {:?}", markup.children());
    };
    assert_eq!(mapping.iterable, "items");
    assert_eq!(mapping.item, "item");
    assert_eq!(mapping.index, "i");
    assert_eq!(mapping.template.type_tag(), "li");
    assert_eq!(
        mapping.template.children(),
        &[MarkupNode::Expression {
            content: "item".into()
        }]
    );
    assert_eq!(
        mapping.template.attributes().and_then(|a| a.get("key")),
        Some(&PropValue::Expression("i".into()))
    );
}

#[test]
fn test_spread_attribute_has_one_synthesized_key() {
    let descriptor = extract_ok(&component_returning("<div {...props} />"));
    let markup = descriptor.markup.expect("markup");
    let attributes = markup.attributes().expect("element");
    assert_eq!(attributes.len(), 1);
    let (key, value) = attributes.first().unwrap();
    assert!(key.starts_with("__spread__"));
    assert_eq!(value, &PropValue::Spread("props".into()));
}

#[test]
fn test_second_component_wins() {
    let descriptor = extract_ok(
        r#"
export function Header({ title }) {
  return <h1>{title}</h1>;
}

export const Footer = ({ year, owner }) => <footer>{year} {owner}</footer>;
"#,
    );
    assert_eq!(descriptor.name, "Footer");
    assert_props(&descriptor.props, &[("year", "any", true), ("owner", "any", true)]);
    assert_eq!(descriptor.markup.unwrap().type_tag(), "footer");
}

#[test]
fn test_object_destructured_state_is_skipped() {
    let descriptor = extract_ok(
        r#"
export function Broken() {
  const {value} = useState(0);
  return <p>{value}</p>;
}
"#,
    );
    assert!(descriptor.state.is_empty());
    assert_eq!(descriptor.name, "Broken");
}

#[test]
fn test_conditional_and_logical_children_stay_verbatim() {
    let descriptor = extract_ok(&component_returning(
        "<section>{loading ? <Spinner /> : <List />}{error && <p>{error}</p>}</section>",
    ));
    let markup = descriptor.markup.unwrap();
    assert_eq!(
        markup.children(),
        &[
            MarkupNode::Expression {
                content: "loading ? <Spinner /> : <List />".into()
            },
            MarkupNode::Expression {
                content: "error && <p>{error}</p>".into()
            },
        ]
    );
}

#[test]
fn test_spread_child() {
    let descriptor = extract_ok(&component_returning("<div>{...children}</div>"));
    assert_eq!(
        descriptor.markup.unwrap().children(),
        &[MarkupNode::Spread {
            content: "children".into()
        }]
    );
}

#[test]
fn test_full_component_surface() {
    let descriptor = extract_ok(
        r#"
import React, { useCallback, useEffect, useRef, useState } from "react";
import type { Todo } from "./types";
import * as api from "./api";

type TodoListProps = {
  todos: Todo[];
  onToggle: (id: string) => void;
  filter?: "all" | "done";
};

const TodoList = ({ todos, onToggle, filter }: TodoListProps) => {
  const [query, setQuery] = useState("");
  const [page, setPage] = useState<number>(1);
  const input = useRef<HTMLInputElement>(null);

  useEffect(() => {
    input.current?.focus();
  }, []);

  const handleChange = useCallback((e) => setQuery(e.target.value), [setQuery]);

  return (
    <>
      <input ref={input} value={query} onChange={handleChange} />
      <ul className="todos">
        {todos.map((todo) => (
          <li key={todo.id} onClick={() => onToggle(todo.id)}>
            {todo.title}
          </li>
        ))}
      </ul>
    </>
  );
};

export default TodoList;
"#,
    );

    assert_eq!(descriptor.name, "TodoList");
    // Destructured parameters do not consult the annotation
    assert_props(
        &descriptor.props,
        &[("todos", "any", true), ("onToggle", "any", true), ("filter", "any", true)],
    );

    let state: Vec<(&str, &str)> = descriptor
        .state
        .iter()
        .map(|s| (s.name.as_str(), s.state_type.as_str()))
        .collect();
    assert_eq!(state, vec![("query", "string"), ("page", "number")]);

    assert_eq!(descriptor.refs.len(), 1);
    assert_eq!(descriptor.refs[0].initial_value, Some(Literal::Null));

    assert_eq!(descriptor.effects.len(), 1);
    assert!(descriptor.effects[0].dependencies.is_empty());
    assert!(descriptor.effects[0].body.starts_with('{'));

    assert_eq!(descriptor.callbacks[0].name, "handleChange");
    assert_eq!(descriptor.callbacks[0].body, "setQuery(e.target.value)");

    let sources: Vec<&str> = descriptor.imports.iter().map(|i| i.source.as_str()).collect();
    assert_eq!(sources, vec!["react", "./types", "./api"]);
    assert_eq!(descriptor.imports[0].default_binding.as_deref(), Some("React"));
    assert!(descriptor.imports[2].named.is_empty());

    let exports = descriptor.exports.expect("exports");
    assert_eq!(exports.get("default"), Some(&ExportValue::Local("TodoList".into())));

    let markup = descriptor.markup.expect("markup");
    assert_eq!(markup.type_tag(), "Fragment");
    assert_child_tags(&markup, &["input", "ul"]);
    assert_child_tags(&markup.children()[1], &["mapping"]);
    assert_no_blank_text(&markup);
}

#[test]
fn test_convention_props_type() {
    let descriptor = extract_ok(
        r#"
export interface BadgeProps {
  tone: "info" | "warn";
  children: React.ReactNode;
  count: number[];
}

export function Badge(props) {
  return <span>{props.children}</span>;
}
"#,
    );
    assert_props(
        &descriptor.props,
        &[
            ("tone", "union", true),
            ("children", "any", true),
            ("count", "Array<number>", true),
        ],
    );
}

#[test]
fn test_snapshot_initial_values_are_string_typed() {
    let descriptor = extract_ok(
        r#"
export function Range(props) {
  const [start, setStart] = useState(props.start);
  const [pair, setPair] = useState([1, 2]);
  const [offset, setOffset] = useState(-1);
  return <input />;
}
"#,
    );
    let types: Vec<&str> = descriptor.state.iter().map(|s| s.state_type.as_str()).collect();
    assert_eq!(types, vec!["string", "string", "string"]);
    assert_eq!(
        descriptor.state[2].initial_value,
        Some(Literal::Code("-1".into()))
    );
}

#[test]
fn test_character_references_in_text_and_attributes() {
    let descriptor = extract_ok(&component_returning(r#"<p title="a &amp; b">Tom &amp; Jerry</p>"#));
    let markup = descriptor.markup.unwrap();
    assert_eq!(
        markup.attributes().and_then(|a| a.get("title")),
        Some(&PropValue::Literal("a & b".into()))
    );
    assert_eq!(
        markup.children(),
        &[MarkupNode::Text {
            content: "Tom & Jerry".into()
        }]
    );
}

#[test]
fn test_map_without_markup_body_stays_expression() {
    let descriptor = extract_ok(&component_returning("<ul>{items.map(i => i.ok && i.id)}</ul>"));
    assert_eq!(
        descriptor.markup.unwrap().children(),
        &[MarkupNode::Expression {
            content: "items.map(i => i.ok && i.id)".into()
        }]
    );
}
