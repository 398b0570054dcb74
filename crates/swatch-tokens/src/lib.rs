//! Design token table and its flattened document projection.
//!
//! This crate holds the immutable style constants every generated artifact is
//! derived from, plus the `{category: {name: {value, type}}}` projection that
//! design-tool token plugins import.

pub mod document;
pub mod store;

pub use document::{DocumentError, TokenDocument, TokenEntry, TokenKind};
pub use store::TokenStore;
