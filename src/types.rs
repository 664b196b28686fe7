//! The portfolio document model.
//!
//! A [`Portfolio`] is the root document the whole pipeline operates on: an
//! ordered list of [`PortfolioSection`]s, the active [`Template`], and an
//! optional [`CustomStyles`] override layer. Documents are plain data — the
//! editing surface owns one, mutates it in memory, and hands it by reference
//! to the compiler. Nothing here touches the filesystem.
//!
//! ## Wire format
//!
//! The model serializes to the JSON shape the editing layer speaks: camelCase
//! field names, `type` as the section discriminator, and per-type content
//! objects identified by their required container field (`projects`,
//! `experiences`, `posts`, ...) rather than an explicit tag.
//!
//! ## Ordering
//!
//! Array position is the render order. The per-section `order` field is kept
//! in sync by [`Portfolio::reorder_sections`], which rewrites every value to
//! match the new array position — the two can never drift.

use serde::{Deserialize, Serialize};

/// The root portfolio document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,
    /// Display title, used as the generated document's `<title>`.
    pub title: String,
    /// Active visual template. Always present — a portfolio without a
    /// template is malformed and the caller's responsibility.
    pub template: Template,
    /// Ordered content sections. Array order is render order.
    pub sections: Vec<PortfolioSection>,
    /// User overrides on top of the template. `None` means the template
    /// palette and default fonts apply verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_styles: Option<CustomStyles>,
}

impl Portfolio {
    /// Replace the section sequence, rewriting every `order` field to match
    /// the new array position.
    pub fn reorder_sections(&mut self, sections: Vec<PortfolioSection>) {
        self.sections = sections;
        for (idx, section) in self.sections.iter_mut().enumerate() {
            section.order = idx as u32;
        }
    }
}

/// One content block of a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSection {
    /// Unique within the portfolio.
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SectionType,
    /// Display heading, always rendered even when content is empty.
    pub title: String,
    /// `None` means "not yet filled in" — renders as a heading-only section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<SectionContent>,
    pub is_optional: bool,
    /// Intended position. Maintained by [`Portfolio::reorder_sections`];
    /// rendering follows array order regardless.
    pub order: u32,
}

/// The fixed catalog of section types, plus a catch-all for tags this
/// version doesn't know. Unknown tags round-trip unchanged and render as a
/// fallback fragment rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionType {
    About,
    Projects,
    Skills,
    Experience,
    Education,
    Certifications,
    Contact,
    Blog,
    OpenSource,
    Testimonials,
    Resume,
    Unknown(String),
}

impl SectionType {
    /// All known types, in catalog order.
    pub const KNOWN: [SectionType; 11] = [
        SectionType::About,
        SectionType::Projects,
        SectionType::Skills,
        SectionType::Experience,
        SectionType::Education,
        SectionType::Certifications,
        SectionType::Contact,
        SectionType::Blog,
        SectionType::OpenSource,
        SectionType::Testimonials,
        SectionType::Resume,
    ];

    /// The wire tag, e.g. `"about"` or `"openSource"`. Unknown types return
    /// their original string.
    pub fn as_str(&self) -> &str {
        match self {
            SectionType::About => "about",
            SectionType::Projects => "projects",
            SectionType::Skills => "skills",
            SectionType::Experience => "experience",
            SectionType::Education => "education",
            SectionType::Certifications => "certifications",
            SectionType::Contact => "contact",
            SectionType::Blog => "blog",
            SectionType::OpenSource => "openSource",
            SectionType::Testimonials => "testimonials",
            SectionType::Resume => "resume",
            SectionType::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SectionType::Unknown(_))
    }
}

impl From<String> for SectionType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "about" => SectionType::About,
            "projects" => SectionType::Projects,
            "skills" => SectionType::Skills,
            "experience" => SectionType::Experience,
            "education" => SectionType::Education,
            "certifications" => SectionType::Certifications,
            "contact" => SectionType::Contact,
            "blog" => SectionType::Blog,
            "openSource" => SectionType::OpenSource,
            "testimonials" => SectionType::Testimonials,
            "resume" => SectionType::Resume,
            _ => SectionType::Unknown(tag),
        }
    }
}

impl From<SectionType> for String {
    fn from(kind: SectionType) -> Self {
        match kind {
            SectionType::Unknown(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// A named visual preset. Immutable once defined; selecting a template swaps
/// the whole object while leaving `custom_styles` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    /// Reference image shown in the template picker.
    pub thumbnail: String,
    pub styles: Palette,
}

/// The five named colors every template and override set carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

/// Heading and body font family names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSet {
    pub heading: String,
    pub body: String,
}

/// User style overrides. Always a complete record — seeded as a full copy of
/// the template palette plus default fonts on first edit, so no field is ever
/// left undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomStyles {
    pub colors: Palette,
    pub fonts: FontSet,
}

// ============================================================================
// Per-type section content
// ============================================================================

/// Content payload of a section. One variant per known section type.
///
/// Untagged on the wire: each variant is recognized by its required fields
/// (`name` for about, `projects`, `categories`, `experiences`, `education`,
/// `certifications`, `email`, `posts`, `contributions`, `testimonials`,
/// `fileUrl`), matching the shapes the editing layer produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionContent {
    About(AboutContent),
    Projects(ProjectsContent),
    Skills(SkillsContent),
    Experience(ExperienceContent),
    Education(EducationContent),
    Certifications(CertificationsContent),
    Contact(ContactContent),
    Blog(BlogContent),
    OpenSource(OpenSourceContent),
    Testimonials(TestimonialsContent),
    Resume(ResumeContent),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsContent {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsContent {
    pub categories: Vec<SkillCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency 0–100. Values above 100 are clamped at render time.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceContent {
    pub experiences: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub start_date: String,
    /// `None` renders as "Present".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationContent {
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_date: String,
    /// `None` renders as "Present".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationsContent {
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub preferred_contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogContent {
    pub posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenSourceContent {
    pub contributions: Vec<Contribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub project: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    /// Contribution kind shown as a pill, e.g. "maintainer" or "bugfix".
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    pub file_url: String,
    #[serde(default)]
    pub last_updated: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn section_type_round_trips_known_tags() {
        for kind in SectionType::KNOWN {
            let tag = kind.as_str().to_string();
            assert_eq!(SectionType::from(tag), kind);
        }
    }

    #[test]
    fn section_type_preserves_unknown_tag() {
        let kind = SectionType::from("gallery".to_string());
        assert_eq!(kind, SectionType::Unknown("gallery".to_string()));
        assert_eq!(kind.as_str(), "gallery");
        assert!(!kind.is_known());
    }

    #[test]
    fn open_source_uses_camel_case_tag() {
        assert_eq!(SectionType::OpenSource.as_str(), "openSource");
        assert_eq!(
            SectionType::from("openSource".to_string()),
            SectionType::OpenSource
        );
    }

    #[test]
    fn portfolio_json_round_trip() {
        let portfolio = ada_portfolio();
        let json = serde_json::to_string(&portfolio).unwrap();
        let back: Portfolio = serde_json::from_str(&json).unwrap();
        assert_eq!(back, portfolio);
    }

    #[test]
    fn wire_shape_matches_editing_layer() {
        // The exact document shape the state layer produces.
        let json = r##"{
            "id": "1",
            "title": "My Portfolio",
            "template": {
                "id": "minimal",
                "name": "Minimal",
                "thumbnail": "thumb.jpg",
                "styles": {
                    "primary": "#0f172a",
                    "secondary": "#64748b",
                    "accent": "#3b82f6",
                    "background": "#ffffff",
                    "text": "#1e293b"
                }
            },
            "sections": [
                {
                    "id": "1",
                    "type": "about",
                    "title": "About Me",
                    "content": {
                        "name": "Ada Lovelace",
                        "title": "Engineer",
                        "socialLinks": [
                            { "platform": "GitHub", "url": "https://github.com/ada" }
                        ]
                    },
                    "isOptional": false,
                    "order": 0
                },
                {
                    "id": "2",
                    "type": "projects",
                    "title": "Projects",
                    "isOptional": false,
                    "order": 1
                }
            ]
        }"##;

        let portfolio: Portfolio = serde_json::from_str(json).unwrap();
        assert_eq!(portfolio.sections.len(), 2);
        assert_eq!(portfolio.sections[0].kind, SectionType::About);
        match &portfolio.sections[0].content {
            Some(SectionContent::About(about)) => {
                assert_eq!(about.name, "Ada Lovelace");
                assert_eq!(about.title.as_deref(), Some("Engineer"));
                assert_eq!(about.social_links.len(), 1);
                assert!(about.bio.is_none());
            }
            other => panic!("expected about content, got {other:?}"),
        }
        assert!(portfolio.sections[1].content.is_none());
        assert!(portfolio.custom_styles.is_none());
    }

    #[test]
    fn untagged_content_picks_variant_by_container_field() {
        let json = r#"{ "posts": [{ "title": "Hello", "url": "https://a.io/p" }] }"#;
        let content: SectionContent = serde_json::from_str(json).unwrap();
        assert!(matches!(content, SectionContent::Blog(_)));

        let json = r#"{ "contributions": [{ "project": "serde", "url": "u" }] }"#;
        let content: SectionContent = serde_json::from_str(json).unwrap();
        assert!(matches!(content, SectionContent::OpenSource(_)));

        let json = r#"{ "fileUrl": "resume.pdf", "lastUpdated": "2026-01-01" }"#;
        let content: SectionContent = serde_json::from_str(json).unwrap();
        assert!(matches!(content, SectionContent::Resume(_)));
    }

    #[test]
    fn contribution_type_field_round_trips() {
        let json = r#"{ "contributions": [{ "project": "p", "url": "u", "type": "maintainer" }] }"#;
        let content: SectionContent = serde_json::from_str(json).unwrap();
        match &content {
            SectionContent::OpenSource(oss) => {
                assert_eq!(oss.contributions[0].kind, "maintainer")
            }
            other => panic!("expected openSource content, got {other:?}"),
        }
        let back = serde_json::to_string(&content).unwrap();
        assert!(back.contains(r#""type":"maintainer""#));
    }

    #[test]
    fn reorder_rewrites_order_fields() {
        let mut portfolio = ada_portfolio();
        portfolio.sections = vec![
            empty_section("a", SectionType::About, "About"),
            empty_section("b", SectionType::Projects, "Projects"),
            empty_section("c", SectionType::Skills, "Skills"),
        ];
        let mut reversed: Vec<_> = portfolio.sections.clone();
        reversed.reverse();

        portfolio.reorder_sections(reversed);

        let ids: Vec<_> = portfolio.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
        let orders: Vec<_> = portfolio.sections.iter().map(|s| s.order).collect();
        assert_eq!(orders, [0, 1, 2]);
    }

    #[test]
    fn unknown_section_type_round_trips_through_json() {
        let mut portfolio = ada_portfolio();
        portfolio.sections = vec![empty_section(
            "x",
            SectionType::Unknown("gallery".to_string()),
            "Gallery",
        )];
        let json = serde_json::to_string(&portfolio).unwrap();
        assert!(json.contains(r#""type":"gallery""#));
        let back: Portfolio = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sections[0].kind.as_str(), "gallery");
    }
}
