//! Component descriptor schema
//!
//! The descriptor is the only artifact handed to downstream generators, so
//! its JSON shape is part of the public contract. Plain records derive
//! `Serialize`; the polymorphic markup types serialize by hand to keep the
//! wire layout flat (`{type, props, children}`).

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

// ============================================================================
// Descriptor root
// ============================================================================

/// Everything extracted from one component source file
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ComponentDescriptor {
    /// Component name, empty when no component was detected
    pub name: String,
    pub props: Vec<PropDescriptor>,
    pub state: Vec<StateDescriptor>,
    pub effects: Vec<EffectDescriptor>,
    pub callbacks: Vec<CallbackDescriptor>,
    pub refs: Vec<RefDescriptor>,
    pub imports: Vec<ImportDescriptor>,
    /// Present once the source contains an export statement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exports: Option<IndexMap<String, ExportValue>>,
    /// Rendered markup of the detected component (`null` if none)
    pub markup: Option<MarkupNode>,
}

impl ComponentDescriptor {
    /// Structural problems a generator cannot work around.
    ///
    /// An empty list means the descriptor is usable as-is.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.name.is_empty() {
            issues.push("component name is empty".to_string());
        }
        if self.markup.is_none() {
            issues.push("component markup is absent".to_string());
        }
        for (i, prop) in self.props.iter().enumerate() {
            if prop.name.is_empty() {
                issues.push(format!("prop #{} has an empty name", i + 1));
            }
        }
        for (i, state) in self.state.iter().enumerate() {
            if state.name.is_empty() {
                issues.push(format!("state #{} has an empty name", i + 1));
            }
            if state.setter.is_empty() {
                issues.push(format!("state #{} has no setter", i + 1));
            }
        }

        issues
    }
}

// ============================================================================
// Records
// ============================================================================

/// A component property
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: String,
    pub required: bool,
    /// Never recovered from syntax; kept for generators that fill it in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Literal>,
}

impl PropDescriptor {
    pub fn new(name: impl Into<String>, prop_type: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            prop_type: prop_type.into(),
            required,
            default_value: None,
        }
    }
}

/// `const [name, setter] = useState(...)`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDescriptor {
    pub name: String,
    pub setter: String,
    #[serde(rename = "type")]
    pub state_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Literal>,
}

/// `useEffect(fn, deps?)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectDescriptor {
    pub body: String,
    pub dependencies: Vec<String>,
}

/// `const name = useCallback(fn, deps?)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallbackDescriptor {
    pub name: String,
    pub body: String,
    pub dependencies: Vec<String>,
}

/// `const name = useRef(initial?)`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<Literal>,
}

/// One `import` statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportDescriptor {
    pub source: String,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_binding: Option<String>,
    pub named: Vec<String>,
}

/// Value recorded for an exported name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportValue {
    /// Serialized as `true`
    Flag,
    /// `export default Identifier`, serialized as the identifier
    Local(String),
}

impl Serialize for ExportValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag => serializer.serialize_bool(true),
            Self::Local(name) => serializer.serialize_str(name),
        }
    }
}

/// Interpreted value of a hook argument
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
    EmptyArray,
    EmptyObject,
    /// Verbatim source of anything non-trivial
    Code(String),
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) | Self::Code(s) => serializer.serialize_str(s),
            Self::Number(n) => n.serialize(serializer),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Null => serializer.serialize_unit(),
            Self::EmptyArray => serializer.collect_seq(std::iter::empty::<()>()),
            Self::EmptyObject => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

// ============================================================================
// Markup tree
// ============================================================================

/// One normalized node of the rendered-output tree
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Fragment {
        children: Vec<MarkupNode>,
    },
    Element {
        tag: String,
        props: IndexMap<String, PropValue>,
        children: Vec<MarkupNode>,
    },
    Text {
        content: String,
    },
    Expression {
        content: String,
    },
    Spread {
        content: String,
    },
    Mapping(Mapping),
}

/// `iterable.map((item, index) => template)`
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    /// Source of the mapped collection
    pub iterable: String,
    /// First parameter name, or empty
    pub item: String,
    /// Second parameter name, or empty
    pub index: String,
    pub template: Box<MarkupNode>,
}

impl MarkupNode {
    /// Wire `type` field: the tag for elements, a fixed marker otherwise
    pub fn type_tag(&self) -> &str {
        match self {
            Self::Fragment { .. } => "Fragment",
            Self::Element { tag, .. } => tag,
            Self::Text { .. } => "text",
            Self::Expression { .. } => "expression",
            Self::Spread { .. } => "spread",
            Self::Mapping(_) => "mapping",
        }
    }

    pub fn children(&self) -> &[MarkupNode] {
        match self {
            Self::Fragment { children } | Self::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Attribute map of an element
    pub fn attributes(&self) -> Option<&IndexMap<String, PropValue>> {
        match self {
            Self::Element { props, .. } => Some(props),
            _ => None,
        }
    }
}

impl Serialize for MarkupNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", self.type_tag())?;
        map.serialize_entry("props", &NodeProps(self))?;
        map.serialize_entry("children", self.children())?;
        map.end()
    }
}

struct NodeProps<'a>(&'a MarkupNode);

impl Serialize for NodeProps<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            MarkupNode::Fragment { .. } => serializer.serialize_map(Some(0))?.end(),
            MarkupNode::Element { props, .. } => props.serialize(serializer),
            MarkupNode::Text { content }
            | MarkupNode::Expression { content }
            | MarkupNode::Spread { content } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("content", content)?;
                map.end()
            }
            MarkupNode::Mapping(mapping) => {
                let mut map = serializer.serialize_map(Some(4))?;
                mapping.serialize_fields(&mut map)?;
                map.end()
            }
        }
    }
}

impl Mapping {
    fn serialize_fields<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
        map.serialize_entry("array", &self.iterable)?;
        map.serialize_entry("item", &self.item)?;
        map.serialize_entry("index", &self.index)?;
        map.serialize_entry("template", &self.template)
    }
}

/// Value of one markup attribute
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Attribute written without a value
    Flag,
    Literal(String),
    Expression(String),
    /// `attr={}`
    Null,
    Markup(Box<MarkupNode>),
    Spread(String),
    Mapping(Mapping),
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag => serializer.serialize_bool(true),
            Self::Literal(s) => serializer.serialize_str(s),
            Self::Null => serializer.serialize_unit(),
            Self::Markup(node) => node.serialize(serializer),
            Self::Expression(code) | Self::Spread(code) => {
                let kind = if matches!(self, Self::Spread(_)) {
                    "spread"
                } else {
                    "expression"
                };
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", kind)?;
                map.serialize_entry("code", code)?;
                map.end()
            }
            Self::Mapping(mapping) => {
                let mut map = serializer.serialize_map(Some(5))?;
                map.serialize_entry("type", "mapping")?;
                mapping.serialize_fields(&mut map)?;
                map.end()
            }
        }
    }
}
