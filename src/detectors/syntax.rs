//! Closed classification of tree-sitter node kinds
//!
//! Tree-sitter exposes node kinds as strings. Every detector classifies a
//! node through [`SyntaxKind::of`] first and then matches on the enum, so a
//! kind the extractor starts caring about is added here once instead of
//! being string-compared in several places.

use tree_sitter::Node;

/// Node kinds the extractor distinguishes; everything else is `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    Program,
    Comment,

    // Modules
    ImportStatement,
    ImportClause,
    NamedImports,
    ImportSpecifier,
    ExportStatement,
    ExportClause,
    ExportSpecifier,

    // Declarations and functions
    FunctionDeclaration,
    LexicalDeclaration,
    VariableDeclarator,
    ArrowFunction,
    FunctionExpression,
    FormalParameters,
    RequiredParameter,
    OptionalParameter,
    StatementBlock,
    ReturnStatement,

    // Patterns
    ArrayPattern,
    ObjectPattern,
    ShorthandPropertyPattern,
    PairPattern,
    ObjectAssignmentPattern,
    AssignmentPattern,
    RestPattern,

    // Expressions
    CallExpression,
    MemberExpression,
    Identifier,
    PropertyIdentifier,
    Parenthesized,
    /// `x as T`, `x satisfies T`, `x!`
    TypeWrapper,
    Ternary,
    /// `&&`, `||` and `??`
    Logical,
    SpreadElement,
    StringLiteral,
    NumberLiteral,
    True,
    False,
    Null,
    ArrayLiteral,
    ObjectLiteral,

    // Markup
    JsxElement,
    JsxSelfClosingElement,
    JsxFragment,
    JsxOpeningElement,
    JsxClosingElement,
    JsxExpression,
    JsxText,
    JsxAttribute,
    JsxNamespaceName,
    CharacterReference,

    // Type declarations
    InterfaceDeclaration,
    TypeAliasDeclaration,

    Other,
}

impl SyntaxKind {
    /// Classify a tree-sitter node
    pub fn of(node: &Node) -> Self {
        // Keywords and punctuation share names with some named kinds
        if !node.is_named() {
            return Self::Other;
        }
        match node.kind() {
            "program" => Self::Program,
            "comment" | "html_comment" => Self::Comment,

            "import_statement" => Self::ImportStatement,
            "import_clause" => Self::ImportClause,
            "named_imports" => Self::NamedImports,
            "import_specifier" => Self::ImportSpecifier,
            "export_statement" => Self::ExportStatement,
            "export_clause" => Self::ExportClause,
            "export_specifier" => Self::ExportSpecifier,

            "function_declaration" => Self::FunctionDeclaration,
            "lexical_declaration" | "variable_declaration" => Self::LexicalDeclaration,
            "variable_declarator" => Self::VariableDeclarator,
            "arrow_function" => Self::ArrowFunction,
            "function_expression" => Self::FunctionExpression,
            "formal_parameters" => Self::FormalParameters,
            "required_parameter" => Self::RequiredParameter,
            "optional_parameter" => Self::OptionalParameter,
            "statement_block" => Self::StatementBlock,
            "return_statement" => Self::ReturnStatement,

            "array_pattern" => Self::ArrayPattern,
            "object_pattern" => Self::ObjectPattern,
            "shorthand_property_identifier_pattern" => Self::ShorthandPropertyPattern,
            "pair_pattern" => Self::PairPattern,
            "object_assignment_pattern" => Self::ObjectAssignmentPattern,
            "assignment_pattern" => Self::AssignmentPattern,
            "rest_pattern" => Self::RestPattern,

            "call_expression" => Self::CallExpression,
            "member_expression" | "jsx_member_expression" => Self::MemberExpression,
            "identifier" | "jsx_identifier" => Self::Identifier,
            "property_identifier" => Self::PropertyIdentifier,
            "parenthesized_expression" => Self::Parenthesized,
            "as_expression" | "satisfies_expression" | "non_null_expression" => Self::TypeWrapper,
            "ternary_expression" => Self::Ternary,
            "binary_expression" if is_logical_operator(node) => Self::Logical,
            "spread_element" => Self::SpreadElement,
            "string" => Self::StringLiteral,
            "number" => Self::NumberLiteral,
            "true" => Self::True,
            "false" => Self::False,
            "null" => Self::Null,
            "array" => Self::ArrayLiteral,
            "object" => Self::ObjectLiteral,

            "jsx_element" => Self::JsxElement,
            "jsx_self_closing_element" => Self::JsxSelfClosingElement,
            "jsx_fragment" => Self::JsxFragment,
            "jsx_opening_element" => Self::JsxOpeningElement,
            "jsx_closing_element" => Self::JsxClosingElement,
            "jsx_expression" => Self::JsxExpression,
            "jsx_text" => Self::JsxText,
            "jsx_attribute" => Self::JsxAttribute,
            "jsx_namespace_name" => Self::JsxNamespaceName,
            "html_character_reference" => Self::CharacterReference,

            "interface_declaration" => Self::InterfaceDeclaration,
            "type_alias_declaration" => Self::TypeAliasDeclaration,

            _ => Self::Other,
        }
    }

    /// Arrow function or `function` expression
    pub fn is_function_value(self) -> bool {
        matches!(self, Self::ArrowFunction | Self::FunctionExpression)
    }

    /// Element, fragment or text: the shapes that make a function a component
    pub fn is_markup_root(self) -> bool {
        matches!(
            self,
            Self::JsxElement | Self::JsxSelfClosingElement | Self::JsxFragment | Self::JsxText
        )
    }
}

fn is_logical_operator(node: &Node) -> bool {
    node.child_by_field_name("operator")
        .map(|op| matches!(op.kind(), "&&" | "||" | "??"))
        .unwrap_or(false)
}
