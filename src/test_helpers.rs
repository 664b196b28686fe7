//! Shared fixtures for the simple-folio test suite.
//!
//! Builders for portfolio documents and section content used across module
//! tests. The canonical fixture is [`ada_portfolio`]: the minimal template
//! with one filled "about" section and no style overrides.

use crate::templates::find_template;
use crate::types::*;

/// A portfolio on the minimal template with one filled about section.
pub fn ada_portfolio() -> Portfolio {
    Portfolio {
        id: "1".to_string(),
        title: "My Portfolio".to_string(),
        template: find_template("minimal").unwrap(),
        sections: vec![filled_section(
            SectionType::About,
            "About Me",
            SectionContent::About(AboutContent {
                name: "Ada Lovelace".to_string(),
                title: Some("Engineer".to_string()),
                bio: Some("Wrote the first program.".to_string()),
                avatar: None,
                social_links: vec![],
            }),
        )],
        custom_styles: None,
    }
}

/// A section with no content yet.
pub fn empty_section(id: &str, kind: SectionType, title: &str) -> PortfolioSection {
    PortfolioSection {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        content: None,
        is_optional: false,
        order: 0,
    }
}

/// A section with the given content payload.
pub fn filled_section(kind: SectionType, title: &str, content: SectionContent) -> PortfolioSection {
    PortfolioSection {
        id: "1".to_string(),
        kind,
        title: title.to_string(),
        content: Some(content),
        is_optional: false,
        order: 0,
    }
}

/// Two projects: one with a live URL, one with a GitHub URL.
pub fn projects_content() -> SectionContent {
    SectionContent::Projects(ProjectsContent {
        projects: vec![
            Project {
                title: "Folio".to_string(),
                description: Some("Static site compiler.".to_string()),
                technologies: vec!["Rust".to_string(), "CSS".to_string()],
                image_url: None,
                live_url: Some("https://folio.example".to_string()),
                github_url: None,
            },
            Project {
                title: "Engine Notes".to_string(),
                description: None,
                technologies: vec![],
                image_url: None,
                live_url: None,
                github_url: Some("https://github.com/ada/notes".to_string()),
            },
        ],
    })
}

/// One ongoing position with achievements.
pub fn experience_content() -> SectionContent {
    SectionContent::Experience(ExperienceContent {
        experiences: vec![Experience {
            company: "Analytical Engines Ltd".to_string(),
            position: "Engineer".to_string(),
            start_date: "1840".to_string(),
            end_date: None,
            description: Some("Programs for the engine.".to_string()),
            achievements: vec!["First program".to_string(), "Notes G".to_string()],
        }],
    })
}
