//! Style resolution and customization.
//!
//! Merges a template's palette with the portfolio's optional override layer
//! into one [`EffectiveStyles`] set — the single source of truth the
//! stylesheet generator reads. Overrides are all-or-nothing: a
//! [`CustomStyles`](crate::types::CustomStyles) record is seeded as a full
//! copy of the current template on first edit, so resolution never has to
//! merge field-by-field and no field is ever undefined.
//!
//! ## Operations
//!
//! The customization surface edits styles one field at a time:
//!
//! - [`Portfolio::set_color`] / [`Portfolio::set_font`] — seed on first use,
//!   then replace exactly one field
//! - [`Portfolio::reset_styles`] — drop all overrides atomically, falling
//!   back to the template palette and default fonts

use crate::types::{CustomStyles, FontSet, Palette, Portfolio, Template};

/// Font family both slots default to when the user hasn't picked one.
pub const DEFAULT_FONT: &str = "Inter";

impl Default for FontSet {
    fn default() -> Self {
        Self {
            heading: DEFAULT_FONT.to_string(),
            body: DEFAULT_FONT.to_string(),
        }
    }
}

/// The resolved style set: five colors and two fonts, ready for CSS
/// generation. Derived per compile, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveStyles {
    pub colors: Palette,
    pub fonts: FontSet,
}

impl EffectiveStyles {
    /// Resolve the effective styles for a template and optional overrides.
    ///
    /// Overrides win wholesale when present; otherwise the template palette
    /// applies verbatim with both fonts at [`DEFAULT_FONT`].
    pub fn resolve(template: &Template, custom: Option<&CustomStyles>) -> Self {
        match custom {
            Some(custom) => Self {
                colors: custom.colors.clone(),
                fonts: custom.fonts.clone(),
            },
            None => Self {
                colors: template.styles.clone(),
                fonts: FontSet::default(),
            },
        }
    }

    /// Resolve from a portfolio's own template and overrides.
    pub fn for_portfolio(portfolio: &Portfolio) -> Self {
        Self::resolve(&portfolio.template, portfolio.custom_styles.as_ref())
    }
}

/// Names the five editable colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    Primary,
    Secondary,
    Accent,
    Background,
    Text,
}

/// Names the two editable font slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlot {
    Heading,
    Body,
}

impl Palette {
    /// Replace one named color.
    pub fn set(&mut self, key: ColorKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            ColorKey::Primary => self.primary = value,
            ColorKey::Secondary => self.secondary = value,
            ColorKey::Accent => self.accent = value,
            ColorKey::Background => self.background = value,
            ColorKey::Text => self.text = value,
        }
    }

    pub fn get(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::Primary => &self.primary,
            ColorKey::Secondary => &self.secondary,
            ColorKey::Accent => &self.accent,
            ColorKey::Background => &self.background,
            ColorKey::Text => &self.text,
        }
    }
}

impl Portfolio {
    /// Override one color, seeding the full override record from the current
    /// template on first edit.
    pub fn set_color(&mut self, key: ColorKey, value: impl Into<String>) {
        self.seed_custom_styles().colors.set(key, value);
    }

    /// Override one font slot, seeding the full override record from the
    /// current template on first edit.
    pub fn set_font(&mut self, slot: FontSlot, value: impl Into<String>) {
        let fonts = &mut self.seed_custom_styles().fonts;
        match slot {
            FontSlot::Heading => fonts.heading = value.into(),
            FontSlot::Body => fonts.body = value.into(),
        }
    }

    /// Discard all overrides, returning to the template palette and default
    /// fonts.
    pub fn reset_styles(&mut self) {
        self.custom_styles = None;
    }

    fn seed_custom_styles(&mut self) -> &mut CustomStyles {
        let template = &self.template;
        self.custom_styles.get_or_insert_with(|| CustomStyles {
            colors: template.styles.clone(),
            fonts: FontSet::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::find_template;
    use crate::test_helpers::*;

    #[test]
    fn resolve_without_overrides_copies_template() {
        let template = find_template("minimal").unwrap();
        let styles = EffectiveStyles::resolve(&template, None);
        assert_eq!(styles.colors, template.styles);
        assert_eq!(styles.fonts.heading, DEFAULT_FONT);
        assert_eq!(styles.fonts.body, DEFAULT_FONT);
    }

    #[test]
    fn resolve_with_overrides_uses_them_wholesale() {
        let template = find_template("minimal").unwrap();
        let custom = CustomStyles {
            colors: find_template("creative").unwrap().styles,
            fonts: FontSet {
                heading: "Poppins".to_string(),
                body: "Open Sans".to_string(),
            },
        };
        let styles = EffectiveStyles::resolve(&template, Some(&custom));
        assert_eq!(styles.colors, custom.colors);
        assert_eq!(styles.fonts.heading, "Poppins");
        assert_eq!(styles.fonts.body, "Open Sans");
    }

    #[test]
    fn first_color_edit_seeds_full_record() {
        let mut portfolio = ada_portfolio();
        assert!(portfolio.custom_styles.is_none());

        portfolio.set_color(ColorKey::Accent, "#ff0000");

        let custom = portfolio.custom_styles.as_ref().unwrap();
        assert_eq!(custom.colors.accent, "#ff0000");
        // All other fields seeded from the template.
        assert_eq!(custom.colors.primary, portfolio.template.styles.primary);
        assert_eq!(custom.colors.background, portfolio.template.styles.background);
        assert_eq!(custom.fonts.heading, DEFAULT_FONT);
    }

    #[test]
    fn single_edit_changes_exactly_one_field() {
        let mut portfolio = ada_portfolio();
        let before = EffectiveStyles::for_portfolio(&portfolio);

        portfolio.set_color(ColorKey::Secondary, "#123456");
        let after = EffectiveStyles::for_portfolio(&portfolio);

        assert_eq!(after.colors.secondary, "#123456");
        assert_eq!(after.colors.primary, before.colors.primary);
        assert_eq!(after.colors.accent, before.colors.accent);
        assert_eq!(after.colors.background, before.colors.background);
        assert_eq!(after.colors.text, before.colors.text);
        assert_eq!(after.fonts, before.fonts);
    }

    #[test]
    fn font_edit_preserves_other_slot() {
        let mut portfolio = ada_portfolio();
        portfolio.set_font(FontSlot::Heading, "Montserrat");
        portfolio.set_font(FontSlot::Body, "Roboto");
        portfolio.set_font(FontSlot::Heading, "Poppins");

        let styles = EffectiveStyles::for_portfolio(&portfolio);
        assert_eq!(styles.fonts.heading, "Poppins");
        assert_eq!(styles.fonts.body, "Roboto");
    }

    #[test]
    fn reset_restores_template_defaults() {
        let mut portfolio = ada_portfolio();
        let defaults = EffectiveStyles::for_portfolio(&portfolio);

        portfolio.set_color(ColorKey::Primary, "#000000");
        portfolio.set_font(FontSlot::Body, "Roboto");
        portfolio.reset_styles();

        assert!(portfolio.custom_styles.is_none());
        assert_eq!(EffectiveStyles::for_portfolio(&portfolio), defaults);
        assert_eq!(defaults.colors, portfolio.template.styles);
    }

    #[test]
    fn palette_get_set_cover_all_keys() {
        let mut palette = find_template("minimal").unwrap().styles;
        for key in [
            ColorKey::Primary,
            ColorKey::Secondary,
            ColorKey::Accent,
            ColorKey::Background,
            ColorKey::Text,
        ] {
            palette.set(key, "#abcdef");
            assert_eq!(palette.get(key), "#abcdef");
        }
    }
}
