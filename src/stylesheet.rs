//! Stylesheet generation.
//!
//! Produces the single `styles.css` artifact: a `:root` block binding the
//! resolved colors and fonts to custom properties, followed by the static
//! structural rules (grids, timeline, cards, pills, one mobile breakpoint).
//!
//! The structural rules are template-independent and reference only the
//! custom properties — swapping templates or editing styles changes the
//! `:root` block and nothing else. They are embedded at compile time from
//! `static/portfolio.css`, so the binary ships no loose template files and
//! the output needs no preprocessing.

use crate::styles::EffectiveStyles;

/// Structural rules, one rule-group per section type.
const STRUCTURAL_CSS: &str = include_str!("../static/portfolio.css");

/// Generate the complete standalone stylesheet for a resolved style set.
pub fn generate_css(styles: &EffectiveStyles) -> String {
    format!("{}\n\n{}", root_variables(styles), STRUCTURAL_CSS)
}

/// The `:root` custom-property block: five colors, two font stacks.
pub fn root_variables(styles: &EffectiveStyles) -> String {
    format!(
        r#":root {{
  --color-primary: {primary};
  --color-secondary: {secondary};
  --color-accent: {accent};
  --color-background: {background};
  --color-text: {text};
  --font-heading: '{heading}', sans-serif;
  --font-body: '{body}', sans-serif;
}}"#,
        primary = styles.colors.primary,
        secondary = styles.colors.secondary,
        accent = styles.colors.accent,
        background = styles.colors.background,
        text = styles.colors.text,
        heading = styles.fonts.heading,
        body = styles.fonts.body,
    )
}
