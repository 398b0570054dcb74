//! CSS bundling pipeline.
//!
//! One entry stylesheet in, one minified bundle out, filename preserved and no
//! source map.

use std::fs;
use std::path::{Path, PathBuf};

/// Errors from the CSS pipeline.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Failed to read stylesheet: {0}")]
    Read(String),

    #[error("CSS parse error: {0}")]
    Parse(String),

    #[error("CSS minify error: {0}")]
    Minify(String),

    #[error("Failed to write bundle: {0}")]
    Write(String),
}

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, AssetError> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| AssetError::Parse(e.to_string()))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| AssetError::Minify(e.to_string()))?;

        Ok(minified.code)
    }

    /// Bundle a single CSS entry file into `out_dir`, keeping its filename.
    pub fn bundle(entry: &Path, out_dir: &Path) -> Result<PathBuf, AssetError> {
        let source = fs::read_to_string(entry)
            .map_err(|e| AssetError::Read(format!("{}: {}", entry.display(), e)))?;

        let minified = Self::minify_css(&source)?;

        fs::create_dir_all(out_dir).map_err(|e| AssetError::Write(e.to_string()))?;

        let filename = entry
            .file_name()
            .ok_or_else(|| AssetError::Read(format!("{}: not a file", entry.display())))?;
        let out_path = out_dir.join(filename);

        fs::write(&out_path, minified).map_err(|e| AssetError::Write(e.to_string()))?;

        tracing::info!("CSS bundle written: {}", out_path.display());

        Ok(out_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn minifies_css() {
        let css = r#"
.button {
    background-color: blue;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".button"));
    }

    #[test]
    fn bundle_preserves_filename_and_skips_sourcemap() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        let dist = temp.path().join("dist");
        std::fs::create_dir_all(&src).unwrap();

        let entry = src.join("main.css");
        std::fs::write(&entry, "body {\n  color: red;\n}\n").unwrap();

        let out = AssetPipeline::bundle(&entry, &dist).unwrap();

        assert_eq!(out, dist.join("main.css"));
        let bundled = std::fs::read_to_string(&out).unwrap();
        assert!(bundled.contains("body"));
        assert!(!bundled.contains('\n'));
        assert!(!bundled.contains("sourceMappingURL"));
    }

    #[test]
    fn missing_entry_is_a_read_error() {
        let temp = tempdir().unwrap();

        let err = AssetPipeline::bundle(&temp.path().join("absent.css"), temp.path());
        assert!(matches!(err, Err(AssetError::Read(_))));
    }
}
