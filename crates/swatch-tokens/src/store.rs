//! The design token table.
//!
//! A single immutable table of style constants shared by every renderer. Tokens
//! are plain struct fields rather than map lookups, so a renderer referencing a
//! token that does not exist fails to compile instead of failing at run time.

/// Semantic color palette.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub success: &'static str,
    pub danger: &'static str,
    pub warning: &'static str,
    pub info: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub white: &'static str,
    pub black: &'static str,
}

impl Colors {
    /// All palette entries in declaration order.
    pub fn entries(&self) -> [(&'static str, &'static str); 10] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("success", self.success),
            ("danger", self.danger),
            ("warning", self.warning),
            ("info", self.info),
            ("light", self.light),
            ("dark", self.dark),
            ("white", self.white),
            ("black", self.black),
        ]
    }
}

/// Font stacks by role.
#[derive(Debug, Clone, Copy)]
pub struct FontFamily {
    pub base: &'static str,
    pub heading: &'static str,
}

/// Type scale.
#[derive(Debug, Clone, Copy)]
pub struct FontSize {
    pub h1: &'static str,
    pub h2: &'static str,
    pub h3: &'static str,
    pub h4: &'static str,
    pub h5: &'static str,
    pub h6: &'static str,
    pub base: &'static str,
    pub small: &'static str,
}

impl FontSize {
    pub fn entries(&self) -> [(&'static str, &'static str); 8] {
        [
            ("h1", self.h1),
            ("h2", self.h2),
            ("h3", self.h3),
            ("h4", self.h4),
            ("h5", self.h5),
            ("h6", self.h6),
            ("base", self.base),
            ("small", self.small),
        ]
    }
}

/// Numeric font weights.
#[derive(Debug, Clone, Copy)]
pub struct FontWeight {
    pub light: u16,
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

/// Unitless line-height ratios.
#[derive(Debug, Clone, Copy)]
pub struct LineHeight {
    pub tight: f32,
    pub base: f32,
    pub relaxed: f32,
}

/// Typography tokens grouped the way the token document groups them.
#[derive(Debug, Clone, Copy)]
pub struct Typography {
    pub font_family: FontFamily,
    pub font_size: FontSize,
    pub font_weight: FontWeight,
    pub line_height: LineHeight,
}

/// Corner radii. `full` is the 9999px pill sentinel.
#[derive(Debug, Clone, Copy)]
pub struct BorderRadius {
    pub none: &'static str,
    pub sm: &'static str,
    pub base: &'static str,
    pub lg: &'static str,
    pub full: &'static str,
}

impl BorderRadius {
    pub fn entries(&self) -> [(&'static str, &'static str); 5] {
        [
            ("none", self.none),
            ("sm", self.sm),
            ("base", self.base),
            ("lg", self.lg),
            ("full", self.full),
        ]
    }
}

/// Box-shadow presets.
#[derive(Debug, Clone, Copy)]
pub struct Shadows {
    pub sm: &'static str,
    pub base: &'static str,
    pub lg: &'static str,
}

impl Shadows {
    pub fn entries(&self) -> [(&'static str, &'static str); 3] {
        [("sm", self.sm), ("base", self.base), ("lg", self.lg)]
    }
}

/// The complete token table.
#[derive(Debug, Clone, Copy)]
pub struct TokenStore {
    pub colors: Colors,
    pub typography: Typography,
    /// Spacing scale, indexed 0..=5, monotonically increasing.
    pub spacing: [&'static str; 6],
    pub border_radius: BorderRadius,
    pub shadows: Shadows,
}

impl TokenStore {
    /// The Bootstrap/Understrap-derived token set every artifact is generated
    /// from.
    pub fn bootstrap() -> Self {
        const SYSTEM_STACK: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, \"Helvetica Neue\", Arial, sans-serif";

        Self {
            colors: Colors {
                primary: "#007bff",
                secondary: "#6c757d",
                success: "#28a745",
                danger: "#dc3545",
                warning: "#ffc107",
                info: "#17a2b8",
                light: "#f8f9fa",
                dark: "#343a40",
                white: "#ffffff",
                black: "#000000",
            },
            typography: Typography {
                font_family: FontFamily {
                    base: SYSTEM_STACK,
                    heading: SYSTEM_STACK,
                },
                font_size: FontSize {
                    h1: "2.5rem",
                    h2: "2rem",
                    h3: "1.75rem",
                    h4: "1.5rem",
                    h5: "1.25rem",
                    h6: "1rem",
                    base: "1rem",
                    small: "0.875rem",
                },
                font_weight: FontWeight {
                    light: 300,
                    normal: 400,
                    medium: 500,
                    bold: 700,
                },
                line_height: LineHeight {
                    tight: 1.25,
                    base: 1.5,
                    relaxed: 1.75,
                },
            },
            spacing: ["0", "0.25rem", "0.5rem", "1rem", "1.5rem", "3rem"],
            border_radius: BorderRadius {
                none: "0",
                sm: "0.2rem",
                base: "0.25rem",
                lg: "0.5rem",
                full: "9999px",
            },
            shadows: Shadows {
                sm: "0 0.125rem 0.25rem rgba(0, 0, 0, 0.075)",
                base: "0 0.5rem 1rem rgba(0, 0, 0, 0.15)",
                lg: "0 1rem 3rem rgba(0, 0, 0, 0.175)",
            },
        }
    }
}
