//! Category fragment renderers.
//!
//! One pure function per showcase category. Each returns a hand-authored HTML
//! fragment with token values interpolated inline at render time, so the output
//! carries literal style values rather than CSS variables.

use swatch_tokens::TokenStore;

/// The five fixed showcase categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Buttons,
    Forms,
    Typography,
    Cards,
    Navigation,
}

impl Category {
    /// All categories, in emission order.
    pub const ALL: [Category; 5] = [
        Category::Buttons,
        Category::Forms,
        Category::Typography,
        Category::Cards,
        Category::Navigation,
    ];

    /// Lower-case name used for the page title and output filename.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Buttons => "buttons",
            Category::Forms => "forms",
            Category::Typography => "typography",
            Category::Cards => "cards",
            Category::Navigation => "navigation",
        }
    }

    /// Render this category's fragment from the token table.
    pub fn render(&self, store: &TokenStore) -> String {
        match self {
            Category::Buttons => render_buttons(store),
            Category::Forms => render_forms(store),
            Category::Typography => render_typography(store),
            Category::Cards => render_cards(store),
            Category::Navigation => render_navigation(store),
        }
    }
}

/// Shared declaration list for filled buttons.
fn button_style(store: &TokenStore, background: &str, text_color: &str) -> String {
    format!(
        "display: inline-block; padding: 0.375rem 0.75rem; font-size: {size}; \
         font-weight: {weight}; line-height: {line_height}; text-align: center; \
         text-decoration: none; border: 1px solid transparent; border-radius: {radius}; \
         background-color: {background}; color: {text_color}; cursor: pointer; \
         transition: all 0.15s ease-in-out;",
        size = store.typography.font_size.base,
        weight = store.typography.font_weight.normal,
        line_height = store.typography.line_height.base,
        radius = store.border_radius.base,
    )
}

fn render_buttons(store: &TokenStore) -> String {
    let primary = button_style(store, store.colors.primary, store.colors.white);
    let secondary = button_style(store, store.colors.secondary, store.colors.white);
    let success = button_style(store, store.colors.success, store.colors.white);
    let danger = button_style(store, store.colors.danger, store.colors.white);
    let warning = button_style(store, store.colors.warning, store.colors.dark);
    let info = button_style(store, store.colors.info, store.colors.white);

    let outline = |color: &str| {
        format!(
            "padding: 0.375rem 0.75rem; font-size: {size}; border: 1px solid {color}; \
             border-radius: {radius}; background-color: transparent; color: {color}; \
             cursor: pointer;",
            size = store.typography.font_size.base,
            radius = store.border_radius.base,
        )
    };
    let primary_outline = outline(store.colors.primary);
    let secondary_outline = outline(store.colors.secondary);

    let large = store.typography.font_size.h5;
    let small = store.typography.font_size.small;

    format!(
        r#"
    <div class="component-group">
      <h2 class="component-title">Buttons - Primary</h2>
      <div class="component-items">
        <button style="{primary}">Primary Button</button>
        <button style="{primary} padding: 0.5rem 1rem; font-size: {large};">Large Button</button>
        <button style="{primary} padding: 0.25rem 0.5rem; font-size: {small};">Small Button</button>
      </div>
    </div>

    <div class="component-group">
      <h2 class="component-title">Buttons - Secondary &amp; Variants</h2>
      <div class="component-items">
        <button style="{secondary}">Secondary</button>
        <button style="{success}">Success</button>
        <button style="{danger}">Danger</button>
        <button style="{warning}">Warning</button>
        <button style="{info}">Info</button>
      </div>
    </div>

    <div class="component-group">
      <h2 class="component-title">Buttons - Outline</h2>
      <div class="component-items">
        <button style="{primary_outline}">Primary Outline</button>
        <button style="{secondary_outline}">Secondary Outline</button>
      </div>
    </div>
    "#
    )
}

fn render_forms(store: &TokenStore) -> String {
    let control = format!(
        "padding: 0.375rem 0.75rem; font-size: {size}; line-height: {line_height}; \
         border: 1px solid #ced4da; border-radius: {radius}; width: 100%;",
        size = store.typography.font_size.base,
        line_height = store.typography.line_height.base,
        radius = store.border_radius.base,
    );

    format!(
        r#"
    <div class="component-group">
      <h2 class="component-title">Input Fields</h2>
      <div style="display: flex; flex-direction: column; gap: 1rem; max-width: 400px;">
        <input type="text" placeholder="Text Input" style="{control}"/>
        <input type="email" placeholder="Email Input" style="{control}"/>
        <textarea placeholder="Textarea" rows="3" style="{control} resize: vertical;"></textarea>
      </div>
    </div>

    <div class="component-group">
      <h2 class="component-title">Select &amp; Checkboxes</h2>
      <div style="display: flex; flex-direction: column; gap: 1rem; max-width: 400px;">
        <select style="{control}">
          <option>Choose an option</option>
          <option>Option 1</option>
          <option>Option 2</option>
        </select>

        <div style="display: flex; align-items: center; gap: 0.5rem;">
          <input type="checkbox" id="check1" style="width: 1rem; height: 1rem;"/>
          <label for="check1">Checkbox Option</label>
        </div>

        <div style="display: flex; align-items: center; gap: 0.5rem;">
          <input type="radio" id="radio1" name="radio" style="width: 1rem; height: 1rem;"/>
          <label for="radio1">Radio Option 1</label>
        </div>
        <div style="display: flex; align-items: center; gap: 0.5rem;">
          <input type="radio" id="radio2" name="radio" style="width: 1rem; height: 1rem;"/>
          <label for="radio2">Radio Option 2</label>
        </div>
      </div>
    </div>
    "#
    )
}

fn render_typography(store: &TokenStore) -> String {
    let sizes = &store.typography.font_size;
    let bold = store.typography.font_weight.bold;
    let tight = store.typography.line_height.tight;

    let heading = |level: u8, size: &str| {
        format!(
            "<h{level} style=\"font-size: {size}; font-weight: {bold}; line-height: {tight};\">Heading {level}</h{level}>"
        )
    };

    let headings = [
        heading(1, sizes.h1),
        heading(2, sizes.h2),
        heading(3, sizes.h3),
        heading(4, sizes.h4),
        heading(5, sizes.h5),
        heading(6, sizes.h6),
    ]
    .join("\n        ");

    format!(
        r#"
    <div class="component-group">
      <h2 class="component-title">Headings</h2>
      <div style="display: flex; flex-direction: column; gap: 0.5rem;">
        {headings}
      </div>
    </div>

    <div class="component-group">
      <h2 class="component-title">Body Text</h2>
      <div style="display: flex; flex-direction: column; gap: 1rem; max-width: 600px;">
        <p style="font-size: {base}; line-height: {base_lh};">
          This is a regular paragraph of text. Lorem ipsum dolor sit amet, consectetur adipiscing elit.
        </p>
        <p style="font-size: {small}; line-height: {base_lh}; color: {muted};">
          Small print for supporting information.
        </p>
        <p style="font-weight: {bold};">
          Bold text for emphasis.
        </p>
      </div>
    </div>
    "#,
        base = sizes.base,
        small = sizes.small,
        base_lh = store.typography.line_height.base,
        muted = store.colors.secondary,
    )
}

fn render_cards(store: &TokenStore) -> String {
    let card = format!(
        "border: 1px solid rgba(0,0,0,.125); border-radius: {radius}; background: white; \
         overflow: hidden; box-shadow: {shadow};",
        radius = store.border_radius.base,
        shadow = store.shadows.sm,
    );

    format!(
        r#"
    <div class="component-group">
      <h2 class="component-title">Cards</h2>
      <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem;">
        <div style="{card}">
          <div style="height: 180px; background: linear-gradient(135deg, {primary} 0%, {info} 100%);"></div>
          <div style="padding: 1.25rem;">
            <h3 style="font-size: {title_size}; font-weight: {bold}; margin-bottom: 0.75rem;">Card Title</h3>
            <p style="color: {muted}; margin-bottom: 1rem;">
              Some quick example text to build on the card title and make up the bulk of the card's content.
            </p>
            <button style="padding: 0.375rem 0.75rem; background: {primary}; color: white; border: none; border-radius: {radius}; cursor: pointer;">Learn More</button>
          </div>
        </div>

        <div style="{card}">
          <div style="padding: 1.25rem;">
            <h3 style="font-size: {title_size}; font-weight: {bold}; margin-bottom: 0.75rem;">Simple Card</h3>
            <p style="color: {muted};">
              Card without image. Perfect for text-only content.
            </p>
          </div>
        </div>
      </div>
    </div>
    "#,
        primary = store.colors.primary,
        info = store.colors.info,
        muted = store.colors.secondary,
        bold = store.typography.font_weight.bold,
        title_size = store.typography.font_size.h5,
        radius = store.border_radius.base,
    )
}

fn render_navigation(store: &TokenStore) -> String {
    format!(
        r##"
    <div class="component-group">
      <h2 class="component-title">Navigation</h2>
      <nav style="background: {dark}; padding: 1rem; border-radius: {radius};">
        <div style="display: flex; align-items: center; gap: 2rem;">
          <a href="#" style="color: white; text-decoration: none; font-weight: {bold}; font-size: {logo_size};">Logo</a>
          <div style="display: flex; gap: 1rem;">
            <a href="#" style="color: white; text-decoration: none;">Home</a>
            <a href="#" style="color: rgba(255,255,255,0.7); text-decoration: none;">About</a>
            <a href="#" style="color: rgba(255,255,255,0.7); text-decoration: none;">Services</a>
            <a href="#" style="color: rgba(255,255,255,0.7); text-decoration: none;">Contact</a>
          </div>
        </div>
      </nav>
    </div>

    <div class="component-group">
      <h2 class="component-title">Breadcrumbs</h2>
      <nav style="padding: 0.75rem 1rem; background: {light}; border-radius: {radius};">
        <a href="#" style="color: {primary}; text-decoration: none;">Home</a>
        <span style="margin: 0 0.5rem; color: {muted};">/</span>
        <a href="#" style="color: {primary}; text-decoration: none;">Category</a>
        <span style="margin: 0 0.5rem; color: {muted};">/</span>
        <span style="color: {muted};">Current Page</span>
      </nav>
    </div>
    "##,
        dark = store.colors.dark,
        light = store.colors.light,
        primary = store.colors.primary,
        muted = store.colors.secondary,
        bold = store.typography.font_weight.bold,
        logo_size = store.typography.font_size.h5,
        radius = store.border_radius.base,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TokenStore {
        TokenStore::bootstrap()
    }

    #[test]
    fn buttons_carry_palette_variants() {
        let html = render_buttons(&store());

        assert!(html.contains("background-color: #007bff;"));
        assert!(html.contains("background-color: #6c757d;"));
        assert!(html.contains("background-color: #28a745;"));
        assert!(html.contains("background-color: #dc3545;"));
        assert!(html.contains("background-color: #ffc107;"));
        assert!(html.contains("background-color: #17a2b8;"));
        // Warning buttons need dark text for contrast
        assert!(html.contains("background-color: #ffc107; color: #343a40;"));
    }

    #[test]
    fn buttons_include_outline_variants() {
        let html = render_buttons(&store());

        assert!(html.contains("background-color: transparent; color: #007bff;"));
        assert!(html.contains("Primary Outline"));
        assert!(html.contains("Secondary Outline"));
    }

    #[test]
    fn forms_render_all_control_types() {
        let html = render_forms(&store());

        for needle in [
            "type=\"text\"",
            "type=\"email\"",
            "<textarea",
            "<select",
            "type=\"checkbox\"",
            "type=\"radio\"",
        ] {
            assert!(html.contains(needle), "missing control: {needle}");
        }
    }

    #[test]
    fn typography_covers_the_full_heading_scale() {
        let html = render_typography(&store());

        for level in 1..=6 {
            assert!(html.contains(&format!("<h{level} ")), "missing h{level}");
        }
        assert!(html.contains("font-size: 2.5rem;"));
        assert!(html.contains("font-size: 0.875rem;"));
    }

    #[test]
    fn cards_use_shadow_and_radius_tokens() {
        let s = store();
        let html = render_cards(&s);

        assert!(html.contains(s.shadows.sm));
        assert!(html.contains("border-radius: 0.25rem;"));
        assert!(html.contains("linear-gradient(135deg, #007bff 0%, #17a2b8 100%)"));
    }

    #[test]
    fn navigation_renders_navbar_and_breadcrumbs() {
        let html = render_navigation(&store());

        assert!(html.contains("background: #343a40;"));
        assert!(html.contains("Breadcrumbs"));
        assert!(html.contains("Current Page"));
    }

    #[test]
    fn fragments_interpolate_literal_values_only() {
        // No CSS variables in any fragment; the export must be literal.
        for category in Category::ALL {
            let html = category.render(&store());
            assert!(!html.contains("var("), "{} uses CSS variables", category.name());
        }
    }

    #[test]
    fn category_names_match_output_filenames() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["buttons", "forms", "typography", "cards", "navigation"]
        );
    }
}
