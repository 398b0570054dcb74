//! Shared page shell for showcase documents.

use minijinja::Environment;
use swatch_tokens::TokenStore;

/// Context for rendering a showcase page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Page title, used verbatim for `<title>`
    pub title: String,
    /// Upper-cased title for the visible heading
    pub heading: String,
    /// Rendered component fragment HTML
    pub content: String,
    /// Body font stack
    pub body_font: String,
    /// Body font size
    pub body_size: String,
    /// Body line-height ratio
    pub body_line_height: String,
    /// Heading/title text color
    pub heading_color: String,
}

/// Template engine holding the single showcase shell.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the showcase template registered.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("showcase.html".to_string(), SHOWCASE_TEMPLATE.to_string())
            .expect("Failed to add showcase template");

        Self { env }
    }

    /// Wrap a rendered component fragment in the full page shell. The title is
    /// kept lower-case for `<title>` and upper-cased for the visible heading.
    pub fn render_page(
        &self,
        title: &str,
        fragment: &str,
        store: &TokenStore,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("showcase.html")?;

        let ctx = Context {
            title: title.to_string(),
            heading: title.to_uppercase(),
            content: fragment.to_string(),
            body_font: store.typography.font_family.base.to_string(),
            body_size: store.typography.font_size.base.to_string(),
            body_line_height: store.typography.line_height.base.to_string(),
            heading_color: store.colors.dark.to_string(),
        };

        tmpl.render(&ctx)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

// Self-contained shell: inline <style> only, no scripts, no external assets,
// so the page can be dragged into a design tool as-is.
const SHOWCASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="uk">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ title }}</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: {{ body_font | safe }};
      font-size: {{ body_size | safe }};
      line-height: {{ body_line_height | safe }};
      padding: 2rem;
      background: #f5f5f5;
    }
    .component-showcase {
      display: grid;
      gap: 2rem;
      max-width: 1200px;
    }
    .component-group {
      background: white;
      padding: 2rem;
      border-radius: 8px;
      box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }
    .component-title {
      font-size: 1.25rem;
      font-weight: 700;
      margin-bottom: 1rem;
      color: {{ heading_color | safe }};
    }
    .component-items {
      display: flex;
      flex-wrap: wrap;
      gap: 1rem;
      align-items: center;
    }
  </style>
</head>
<body>
  <h1 style="margin-bottom: 2rem; color: {{ heading_color | safe }};">{{ heading }} - UI Components</h1>
  <div class="component-showcase">
    {{ content | safe }}
  </div>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_titled_shell() {
        let engine = TemplateEngine::new();
        let store = TokenStore::bootstrap();

        let html = engine
            .render_page("buttons", "<p>Hello world</p>", &store)
            .unwrap();

        assert!(html.contains("<title>buttons</title>"));
        assert!(html.contains("BUTTONS - UI Components"));
        assert!(html.contains("<p>Hello world</p>"));
        assert!(html.contains("lang=\"uk\""));
    }

    #[test]
    fn shell_interpolates_body_tokens() {
        let engine = TemplateEngine::new();
        let store = TokenStore::bootstrap();

        let html = engine.render_page("cards", "", &store).unwrap();

        assert!(html.contains("font-size: 1rem;"));
        assert!(html.contains("line-height: 1.5;"));
        // The quoted font names must land in the <style> block verbatim, not
        // HTML-escaped
        assert!(html.contains(store.typography.font_family.base));
        assert!(!html.contains("&quot;"));
    }

    #[test]
    fn shell_is_self_contained() {
        let engine = TemplateEngine::new();
        let store = TokenStore::bootstrap();

        let html = engine.render_page("forms", "", &store).unwrap();

        assert!(!html.contains("<script"));
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
        assert_eq!(html.matches("<html").count(), 1);
        assert_eq!(html.matches("<title>").count(), 1);
    }
}
