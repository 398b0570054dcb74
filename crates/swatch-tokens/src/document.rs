//! Flattened token document for design-tool import.
//!
//! Projects the token table into the `{category: {name: {value, type}}}` shape
//! consumed by token plugins. Key order is insertion order and must stay stable
//! between runs; the JSON output is part of the artifact contract.

use serde::{Deserialize, Serialize};
use serde_json::Map;

/// Token classification understood by design-tool token importers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Color,
    FontSize,
    Spacing,
    BorderRadius,
    BoxShadow,
}

/// A single exported token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenEntry {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

/// Errors from serializing the token document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to serialize token document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The full flattened document, categories in fixed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenDocument {
    pub colors: Map<String, serde_json::Value>,
    pub typography: Map<String, serde_json::Value>,
    pub spacing: Map<String, serde_json::Value>,
    #[serde(rename = "borderRadius")]
    pub border_radius: Map<String, serde_json::Value>,
    pub shadows: Map<String, serde_json::Value>,
}

impl TokenDocument {
    /// Flatten the token table. Colors keep their bare names; everything else
    /// gets a category prefix (`fontSize-h1`, `space-3`, `radius-full`,
    /// `shadow-lg`).
    pub fn from_store(store: &crate::TokenStore) -> Self {
        let entry = |value: &str, kind: TokenKind| {
            serde_json::json!({ "value": value, "type": kind })
        };

        let mut colors = Map::new();
        for (name, value) in store.colors.entries() {
            colors.insert(name.to_string(), entry(value, TokenKind::Color));
        }

        let mut typography = Map::new();
        for (name, value) in store.typography.font_size.entries() {
            typography.insert(format!("fontSize-{name}"), entry(value, TokenKind::FontSize));
        }

        let mut spacing = Map::new();
        for (index, value) in store.spacing.iter().enumerate() {
            spacing.insert(format!("space-{index}"), entry(value, TokenKind::Spacing));
        }

        let mut border_radius = Map::new();
        for (name, value) in store.border_radius.entries() {
            border_radius.insert(format!("radius-{name}"), entry(value, TokenKind::BorderRadius));
        }

        let mut shadows = Map::new();
        for (name, value) in store.shadows.entries() {
            shadows.insert(format!("shadow-{name}"), entry(value, TokenKind::BoxShadow));
        }

        Self {
            colors,
            typography,
            spacing,
            border_radius,
            shadows,
        }
    }

    /// Serialize with 2-space indentation.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
