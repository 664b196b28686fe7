//! The built-in template catalog.
//!
//! Three visual presets ship with the tool: Minimal, Modern, and Creative.
//! A template is pure configuration data — five named colors plus a thumbnail
//! reference — and never changes the generated HTML structure, only the CSS
//! custom properties bound in the stylesheet.

use crate::types::{Palette, Portfolio, PortfolioSection, SectionType, Template};

/// Catalog of built-in templates, in picker order.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template {
            id: "minimal".to_string(),
            name: "Minimal".to_string(),
            thumbnail:
                "https://images.unsplash.com/photo-1507721999472-8ed4421c4af2?auto=format&fit=crop&w=300&q=80"
                    .to_string(),
            styles: Palette {
                primary: "#0f172a".to_string(),
                secondary: "#64748b".to_string(),
                accent: "#3b82f6".to_string(),
                background: "#ffffff".to_string(),
                text: "#1e293b".to_string(),
            },
        },
        Template {
            id: "modern".to_string(),
            name: "Modern".to_string(),
            thumbnail:
                "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&w=300&q=80"
                    .to_string(),
            styles: Palette {
                primary: "#18181b".to_string(),
                secondary: "#71717a".to_string(),
                accent: "#8b5cf6".to_string(),
                background: "#fafafa".to_string(),
                text: "#27272a".to_string(),
            },
        },
        Template {
            id: "creative".to_string(),
            name: "Creative".to_string(),
            thumbnail:
                "https://images.unsplash.com/photo-1634017839464-5c339ebe3cb4?auto=format&fit=crop&w=300&q=80"
                    .to_string(),
            styles: Palette {
                primary: "#1e1b4b".to_string(),
                secondary: "#6366f1".to_string(),
                accent: "#ec4899".to_string(),
                background: "#ffffff".to_string(),
                text: "#312e81".to_string(),
            },
        },
    ]
}

/// Look up a built-in template by id.
pub fn find_template(id: &str) -> Option<Template> {
    builtin_templates().into_iter().find(|t| t.id == id)
}

/// The template new portfolios start with.
pub fn default_template() -> Template {
    builtin_templates().swap_remove(0)
}

/// A starter portfolio document: the default template and the three sections
/// every new portfolio begins with, content unfilled.
///
/// Printed by the `sample` CLI command as a starting point for hand-editing.
pub fn sample_portfolio() -> Portfolio {
    let starter = [
        (SectionType::About, "About Me"),
        (SectionType::Projects, "Projects"),
        (SectionType::Skills, "Skills"),
    ];
    Portfolio {
        id: "1".to_string(),
        title: "My Portfolio".to_string(),
        template: default_template(),
        sections: starter
            .into_iter()
            .enumerate()
            .map(|(idx, (kind, title))| PortfolioSection {
                id: (idx + 1).to_string(),
                kind,
                title: title.to_string(),
                content: None,
                is_optional: false,
                order: idx as u32,
            })
            .collect(),
        custom_styles: None,
    }
}
