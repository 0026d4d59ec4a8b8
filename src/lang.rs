//! Source dialect detection and tree-sitter grammar loading

use std::path::Path;
use tree_sitter::Language;

use crate::error::{DistillError, Result};

/// JavaScript-family dialects accepted as component source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    TypeScript,
    Tsx,
    JavaScript,
    Jsx,
}

impl Dialect {
    /// Detect dialect from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| DistillError::UnsupportedExtension {
                extension: "none".to_string(),
            })?;

        Self::from_extension(ext)
    }

    /// Detect dialect from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "ts" => Ok(Self::TypeScript),
            "tsx" => Ok(Self::Tsx),
            "js" => Ok(Self::JavaScript),
            "jsx" => Ok(Self::Jsx),
            _ => Err(DistillError::UnsupportedExtension {
                extension: ext.to_string(),
            }),
        }
    }

    /// Get the canonical name of the dialect
    pub fn name(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::JavaScript => "javascript",
            Self::Jsx => "jsx",
        }
    }

    /// Grammar used to parse this dialect.
    ///
    /// Every dialect goes through the TSX grammar so markup and type
    /// annotations are accepted regardless of the file extension.
    pub fn tree_sitter_language(&self) -> Language {
        tree_sitter_typescript::LANGUAGE_TSX.into()
    }
}
