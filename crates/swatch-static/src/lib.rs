//! Showcase page rendering and artifact emission for swatch.
//!
//! Renders the five component showcase pages and the token document from the
//! built-in token table, and bundles the theme CSS entry point.

pub mod assets;
pub mod components;
pub mod generator;
pub mod templates;

pub use assets::{AssetError, AssetPipeline};
pub use components::Category;
pub use generator::{GenerateConfig, GenerateError, GenerateResult, Generator};
