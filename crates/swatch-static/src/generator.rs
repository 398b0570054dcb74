//! Artifact generation.
//!
//! Sequential single-pass emitter: creates the output tree, writes the token
//! document, then writes one showcase page per category. Output is fully
//! regenerated on every run and carries no timestamps or environment data, so
//! repeated runs produce byte-identical files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use swatch_tokens::{TokenDocument, TokenStore};

use crate::components::Category;
use crate::templates::TemplateEngine;

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Root of the output tree
    pub output_dir: PathBuf,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Number of artifacts written
    pub artifacts: usize,

    /// Total generation time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to render token document: {0}")]
    Document(#[from] swatch_tokens::DocumentError),

    #[error("Failed to render page: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Showcase and token document generator.
pub struct Generator {
    config: GenerateConfig,
    store: TokenStore,
    templates: TemplateEngine,
}

impl Generator {
    /// Create a new generator over the built-in token table.
    pub fn new(config: GenerateConfig) -> Self {
        Self {
            config,
            store: TokenStore::bootstrap(),
            templates: TemplateEngine::new(),
        }
    }

    /// Run the full generation pass.
    pub async fn run(&self) -> Result<GenerateResult, GenerateError> {
        let start = Instant::now();

        let tokens_dir = self.config.output_dir.join("tokens");
        let components_dir = self.config.output_dir.join("components");

        for dir in [&self.config.output_dir, &tokens_dir, &components_dir] {
            fs::create_dir_all(dir).map_err(|e| GenerateError::Write(e.to_string()))?;
        }

        let mut artifacts = 0;

        // Token document first, pages after; the order is cosmetic since every
        // artifact reads the same immutable table.
        let document = TokenDocument::from_store(&self.store);
        let tokens_path = tokens_dir.join("design-tokens.json");
        fs::write(&tokens_path, document.to_json()?)
            .map_err(|e| GenerateError::Write(e.to_string()))?;
        artifacts += 1;

        tracing::info!("Design tokens written: {}", tokens_path.display());

        for category in Category::ALL {
            let fragment = category.render(&self.store);
            let html = self
                .templates
                .render_page(category.name(), &fragment, &self.store)?;

            let page_path = components_dir.join(format!("{}.html", category.name()));
            fs::write(&page_path, html).map_err(|e| GenerateError::Write(e.to_string()))?;
            artifacts += 1;

            tracing::info!("Component page \"{}\" written: {}", category.name(), page_path.display());
        }

        let duration = start.elapsed();

        Ok(GenerateResult {
            artifacts,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::path::Path;
    use tempfile::tempdir;

    fn generator(out: &Path) -> Generator {
        Generator::new(GenerateConfig {
            output_dir: out.to_path_buf(),
        })
    }

    fn collect_files(root: &Path) -> BTreeSet<String> {
        let mut files = BTreeSet::new();
        let mut stack = vec![root.to_path_buf()];

        while let Some(dir) = stack.pop() {
            for entry in fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    stack.push(path);
                } else {
                    files.insert(
                        path.strip_prefix(root)
                            .unwrap()
                            .to_string_lossy()
                            .replace('\\', "/"),
                    );
                }
            }
        }

        files
    }

    #[tokio::test]
    async fn emits_exactly_six_artifacts() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("output");

        let result = generator(&out).run().await.unwrap();
        assert_eq!(result.artifacts, 6);

        let expected: BTreeSet<String> = [
            "tokens/design-tokens.json",
            "components/buttons.html",
            "components/forms.html",
            "components/typography.html",
            "components/cards.html",
            "components/navigation.html",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        assert_eq!(collect_files(&out), expected);
    }

    #[tokio::test]
    async fn reruns_are_byte_identical() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("output");

        let generator = generator(&out);
        generator.run().await.unwrap();

        let first: Vec<(String, Vec<u8>)> = collect_files(&out)
            .into_iter()
            .map(|rel| {
                let bytes = fs::read(out.join(&rel)).unwrap();
                (rel, bytes)
            })
            .collect();

        generator.run().await.unwrap();

        for (rel, bytes) in first {
            assert_eq!(
                fs::read(out.join(&rel)).unwrap(),
                bytes,
                "{rel} changed between runs"
            );
        }
    }

    #[tokio::test]
    async fn token_document_matches_import_contract() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("output");

        generator(&out).run().await.unwrap();

        let raw = fs::read_to_string(out.join("tokens/design-tokens.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

        assert_eq!(
            json["colors"]["primary"],
            serde_json::json!({ "value": "#007bff", "type": "color" })
        );
        assert_eq!(
            json["spacing"]["space-3"],
            serde_json::json!({ "value": "1rem", "type": "spacing" })
        );
        assert_eq!(json["colors"].as_object().unwrap().len(), 10);
        assert_eq!(json["borderRadius"].as_object().unwrap().len(), 5);
        assert_eq!(json["shadows"].as_object().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn pages_are_standalone_documents() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("output");

        generator(&out).run().await.unwrap();

        for category in Category::ALL {
            let path = out.join(format!("components/{}.html", category.name()));
            let html = fs::read_to_string(&path).unwrap();

            assert_eq!(html.matches("<html").count(), 1);
            assert!(html.contains(&format!("<title>{}</title>", category.name())));
            assert!(html.contains(&category.name().to_uppercase()));
            assert!(!html.contains("<script"));
            assert!(!html.contains("http://"));
            assert!(!html.contains("https://"));
            assert!(!html.contains("&quot;"), "{} has escaped style values", category.name());
        }
    }

    #[tokio::test]
    async fn rerun_over_existing_tree_succeeds() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("output");

        // Directory creation must be idempotent
        fs::create_dir_all(out.join("tokens")).unwrap();
        fs::write(out.join("tokens/design-tokens.json"), "stale").unwrap();

        generator(&out).run().await.unwrap();

        let raw = fs::read_to_string(out.join("tokens/design-tokens.json")).unwrap();
        assert_ne!(raw, "stale");
    }
}
