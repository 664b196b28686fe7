//! HTML site compilation.
//!
//! Turns a [`Portfolio`] plus resolved [`EffectiveStyles`] into the final
//! `index.html` / `styles.css` pair. Pure computation: same inputs, same
//! bytes, no I/O, no shared state — callers may compile repeatedly (e.g. for
//! a live preview) without coordination.
//!
//! ## Document shape
//!
//! One HTML5 document. The `<head>` carries the portfolio title, a relative
//! `styles.css` link, and a Google Fonts request built from the two resolved
//! font families. The `<body>` holds a single `.portfolio-container` wrapping
//! one `<section>` per portfolio section, in array order. Templates and style
//! overrides never change this structure — they only move CSS values.
//!
//! ## Per-type rendering
//!
//! Each section type has its own [`SectionRenderer`], looked up through a
//! [`SectionRegistry`]. Adding a 12th type means one new renderer plus one
//! `register` call; types the registry doesn't know fall back to a minimal
//! heading + placeholder fragment rather than an error.
//!
//! Renderers are absence-safe by construction: optional fields emit markup
//! only when present, list fields emit one child per element and nothing for
//! an empty list, and a content payload that doesn't match the section's
//! declared type is treated as unfilled.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping, so
//! user-entered names, bios, and URLs are escaped on interpolation.

use crate::styles::EffectiveStyles;
use crate::stylesheet;
use crate::types::{Portfolio, PortfolioSection, SectionContent, SectionType};
use maud::{DOCTYPE, Markup, html};
use std::collections::BTreeMap;

/// The two generated text artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteOutput {
    pub html: String,
    pub css: String,
}

/// Compile a portfolio into a complete static site.
///
/// Never fails for a well-formed portfolio: missing content, empty lists,
/// and unknown section types all degrade to valid markup.
pub fn compile(portfolio: &Portfolio, styles: &EffectiveStyles) -> SiteOutput {
    let registry = SectionRegistry::default();
    SiteOutput {
        html: render_document(portfolio, styles, &registry).into_string(),
        css: stylesheet::generate_css(styles),
    }
}

/// Renders the full HTML document.
fn render_document(
    portfolio: &Portfolio,
    styles: &EffectiveStyles,
    registry: &SectionRegistry,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (portfolio.title) }
                link rel="stylesheet" href="styles.css";
                link rel="stylesheet" href=(font_stylesheet_url(styles));
            }
            body {
                div id="portfolio" class="portfolio-container" {
                    @for section in &portfolio.sections {
                        (registry.render(section))
                    }
                }
            }
        }
    }
}

/// Google Fonts css2 request for the two resolved families.
///
/// Spaces in family names become `+` per the fonts API convention
/// ("Open Sans" → `Open+Sans`).
pub fn font_stylesheet_url(styles: &EffectiveStyles) -> String {
    format!(
        "https://fonts.googleapis.com/css2?family={}&family={}&display=swap",
        styles.fonts.heading.replace(' ', "+"),
        styles.fonts.body.replace(' ', "+"),
    )
}

// ============================================================================
// Renderer registry
// ============================================================================

/// Renders the body of one section type. The surrounding `<section>` wrapper
/// and `<h2>` heading are shared and emitted by the registry.
pub trait SectionRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup;
}

/// Maps section type tags to their renderers, with a fallback for tags no
/// renderer claims.
pub struct SectionRegistry {
    renderers: BTreeMap<String, Box<dyn SectionRenderer>>,
    fallback: Box<dyn SectionRenderer>,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        let mut registry = Self {
            renderers: BTreeMap::new(),
            fallback: Box::new(FallbackRenderer),
        };
        registry.register(SectionType::About, AboutRenderer);
        registry.register(SectionType::Projects, ProjectsRenderer);
        registry.register(SectionType::Skills, SkillsRenderer);
        registry.register(SectionType::Experience, ExperienceRenderer);
        registry.register(SectionType::Education, EducationRenderer);
        registry.register(SectionType::Certifications, CertificationsRenderer);
        registry.register(SectionType::Contact, ContactRenderer);
        registry.register(SectionType::Blog, BlogRenderer);
        registry.register(SectionType::OpenSource, OpenSourceRenderer);
        registry.register(SectionType::Testimonials, TestimonialsRenderer);
        registry.register(SectionType::Resume, ResumeRenderer);
        registry
    }
}

impl SectionRegistry {
    /// Register a renderer for a type tag, replacing any previous one.
    pub fn register(&mut self, kind: SectionType, renderer: impl SectionRenderer + 'static) {
        self.renderers
            .insert(kind.as_str().to_string(), Box::new(renderer));
    }

    fn renderer_for(&self, kind: &SectionType) -> &dyn SectionRenderer {
        self.renderers
            .get(kind.as_str())
            .unwrap_or(&self.fallback)
            .as_ref()
    }

    /// Render one complete section fragment: wrapper, heading, body.
    pub fn render(&self, section: &PortfolioSection) -> Markup {
        let body = self.renderer_for(&section.kind).render_content(section);
        html! {
            section id=(section.kind.as_str()) class=(section_class(&section.kind)) {
                h2 { (section.title) }
                (body)
            }
        }
    }
}

/// CSS class for a section wrapper: `section {tag}-section` for known types
/// (lowercased, so `openSource` yields `opensource-section`), bare `section`
/// for unknown ones.
fn section_class(kind: &SectionType) -> String {
    if kind.is_known() {
        format!("section {}-section", kind.as_str().to_ascii_lowercase())
    } else {
        "section".to_string()
    }
}

// ============================================================================
// Per-type renderers
// ============================================================================

struct AboutRenderer;

impl SectionRenderer for AboutRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup {
        let Some(SectionContent::About(c)) = &section.content else {
            return html! {};
        };
        html! {
            h1.name { (c.name) }
            @if let Some(title) = &c.title {
                p.title { (title) }
            }
            @if let Some(bio) = &c.bio {
                p.bio { (bio) }
            }
            @if let Some(avatar) = &c.avatar {
                img.avatar src=(avatar) alt=(c.name);
            }
            @if !c.social_links.is_empty() {
                div.social-links {
                    @for link in &c.social_links {
                        a href=(link.url) target="_blank" rel="noopener noreferrer" { (link.platform) }
                    }
                }
            }
        }
    }
}

struct ProjectsRenderer;

impl SectionRenderer for ProjectsRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup {
        let Some(SectionContent::Projects(c)) = &section.content else {
            return html! {};
        };
        html! {
            div.projects-grid {
                @for project in &c.projects {
                    div.project-card {
                        @if let Some(image) = &project.image_url {
                            img.project-image src=(image) alt=(project.title);
                        }
                        h3 { (project.title) }
                        @if let Some(description) = &project.description {
                            p { (description) }
                        }
                        div.technologies {
                            @for tech in &project.technologies {
                                span.tech-tag { (tech) }
                            }
                        }
                        div.project-links {
                            @if let Some(url) = &project.live_url {
                                a href=(url) target="_blank" rel="noopener noreferrer" { "Live Demo" }
                            }
                            @if let Some(url) = &project.github_url {
                                a href=(url) target="_blank" rel="noopener noreferrer" { "GitHub" }
                            }
                        }
                    }
                }
            }
        }
    }
}

struct SkillsRenderer;

impl SectionRenderer for SkillsRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup {
        let Some(SectionContent::Skills(c)) = &section.content else {
            return html! {};
        };
        html! {
            @for category in &c.categories {
                div.skill-category {
                    h3 { (category.category) }
                    div.skills-grid {
                        @for skill in &category.skills {
                            div.skill-item {
                                span.skill-name { (skill.name) }
                                // --level drives the ::after bar width.
                                div.skill-level style=(format!("--level: {}%", skill.level.min(100))) {}
                            }
                        }
                    }
                }
            }
        }
    }
}

struct ExperienceRenderer;

impl SectionRenderer for ExperienceRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup {
        let Some(SectionContent::Experience(c)) = &section.content else {
            return html! {};
        };
        html! {
            div.timeline {
                @for exp in &c.experiences {
                    div.timeline-item {
                        div.timeline-content {
                            h3 { (exp.position) " at " (exp.company) }
                            p.timeline-period {
                                (exp.start_date) " - " (exp.end_date.as_deref().unwrap_or("Present"))
                            }
                            @if let Some(description) = &exp.description {
                                p { (description) }
                            }
                            @if !exp.achievements.is_empty() {
                                ul.achievements {
                                    @for achievement in &exp.achievements {
                                        li { (achievement) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

struct EducationRenderer;

impl SectionRenderer for EducationRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup {
        let Some(SectionContent::Education(c)) = &section.content else {
            return html! {};
        };
        html! {
            div.education-grid {
                @for edu in &c.education {
                    div.education-card {
                        h3 { (edu.institution) }
                        p.degree { (edu.degree) " in " (edu.field) }
                        p.period {
                            (edu.start_date) " - " (edu.end_date.as_deref().unwrap_or("Present"))
                        }
                        @if let Some(gpa) = edu.gpa {
                            p.gpa { "GPA: " (gpa) }
                        }
                    }
                }
            }
        }
    }
}

struct CertificationsRenderer;

impl SectionRenderer for CertificationsRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup {
        let Some(SectionContent::Certifications(c)) = &section.content else {
            return html! {};
        };
        html! {
            div.certifications-grid {
                @for cert in &c.certifications {
                    div.certification-card {
                        h3 { (cert.name) }
                        @if !cert.issuer.is_empty() {
                            p.issuer { "Issued by " (cert.issuer) }
                        }
                        @if !cert.issue_date.is_empty() {
                            p.date { "Issued: " (cert.issue_date) }
                        }
                        @if let Some(expiry) = &cert.expiry_date {
                            p.expiry { "Expires: " (expiry) }
                        }
                        @if let Some(url) = &cert.credential_url {
                            a.verify-link href=(url) target="_blank" rel="noopener noreferrer" {
                                "Verify Credential"
                            }
                        }
                    }
                }
            }
        }
    }
}

struct ContactRenderer;

impl SectionRenderer for ContactRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup {
        let Some(SectionContent::Contact(c)) = &section.content else {
            return html! {};
        };
        html! {
            div.contact-info {
                p.email {
                    "Email: "
                    a href={ "mailto:" (c.email) } { (c.email) }
                }
                @if let Some(phone) = &c.phone {
                    p.phone { "Phone: " (phone) }
                }
                @if let Some(location) = &c.location {
                    p.location { "Location: " (location) }
                }
                @if !c.preferred_contact.is_empty() {
                    p.preferred-contact { "Preferred Contact Method: " (c.preferred_contact) }
                }
            }
        }
    }
}

struct BlogRenderer;

impl SectionRenderer for BlogRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup {
        let Some(SectionContent::Blog(c)) = &section.content else {
            return html! {};
        };
        html! {
            div.blog-grid {
                @for post in &c.posts {
                    article.blog-card {
                        h3 {
                            a href=(post.url) target="_blank" rel="noopener noreferrer" { (post.title) }
                        }
                        @if !post.date.is_empty() {
                            p.date { (post.date) }
                        }
                        @if !post.excerpt.is_empty() {
                            p.excerpt { (post.excerpt) }
                        }
                        a.read-more href=(post.url) target="_blank" rel="noopener noreferrer" {
                            "Read More"
                        }
                    }
                }
            }
        }
    }
}

struct OpenSourceRenderer;

impl SectionRenderer for OpenSourceRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup {
        let Some(SectionContent::OpenSource(c)) = &section.content else {
            return html! {};
        };
        html! {
            div.contributions-grid {
                @for contribution in &c.contributions {
                    div.contribution-card {
                        h3 {
                            a href=(contribution.url) target="_blank" rel="noopener noreferrer" {
                                (contribution.project)
                            }
                        }
                        @if !contribution.kind.is_empty() {
                            p class="type" { (contribution.kind) }
                        }
                        @if !contribution.description.is_empty() {
                            p.description { (contribution.description) }
                        }
                    }
                }
            }
        }
    }
}

struct TestimonialsRenderer;

impl SectionRenderer for TestimonialsRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup {
        let Some(SectionContent::Testimonials(c)) = &section.content else {
            return html! {};
        };
        html! {
            div.testimonials-grid {
                @for testimonial in &c.testimonials {
                    div.testimonial-card {
                        @if let Some(avatar) = &testimonial.avatar {
                            img.avatar src=(avatar) alt=(testimonial.name);
                        }
                        @if !testimonial.content.is_empty() {
                            blockquote { (testimonial.content) }
                        }
                        cite {
                            strong { (testimonial.name) }
                            @if !testimonial.position.is_empty() || !testimonial.company.is_empty() {
                                span { (testimonial.position) " at " (testimonial.company) }
                            }
                        }
                    }
                }
            }
        }
    }
}

struct ResumeRenderer;

impl SectionRenderer for ResumeRenderer {
    fn render_content(&self, section: &PortfolioSection) -> Markup {
        let Some(SectionContent::Resume(c)) = &section.content else {
            return html! {};
        };
        html! {
            div.resume-download {
                @if !c.last_updated.is_empty() {
                    p { "Last Updated: " (c.last_updated) }
                }
                a.download-button href=(c.file_url) target="_blank" rel="noopener noreferrer" {
                    "Download Resume"
                }
            }
        }
    }
}

/// Placeholder for section types no renderer claims.
struct FallbackRenderer;

impl SectionRenderer for FallbackRenderer {
    fn render_content(&self, _section: &PortfolioSection) -> Markup {
        html! {
            p { "Content not available" }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
