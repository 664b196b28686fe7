//! # Simple Folio
//!
//! A portfolio-to-static-site compiler. A portfolio document — ordered
//! content sections, a visual template, optional color/font overrides — goes
//! in; a self-contained `index.html` + `styles.css` pair comes out, packaged
//! as `portfolio.zip` for dropping on any static host.
//!
//! # Architecture: Resolve → Compile → Package
//!
//! The export path is three pure-ish steps over one in-memory document:
//!
//! ```text
//! 1. Resolve   Portfolio           →  EffectiveStyles   (template + overrides)
//! 2. Compile   Portfolio + styles  →  html, css         (strings, pure)
//! 3. Package   html + css          →  portfolio.zip     (bytes, the only IO)
//! ```
//!
//! Steps 1 and 2 are pure functions of their arguments: no ambient state, no
//! filesystem, deterministic output. That makes them safe to call repeatedly
//! for live preview and trivial to unit test. Only packaging touches IO, and
//! it builds the archive fully in memory first — a failed export never leaves
//! a truncated file.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The portfolio document model: sections, templates, per-type content schemas |
//! | [`templates`] | Built-in template catalog (Minimal, Modern, Creative) |
//! | [`styles`] | Style resolution — template palette + override layer → effective colors/fonts |
//! | [`render`] | HTML compilation via a per-section-type renderer registry |
//! | [`stylesheet`] | CSS generation — `:root` custom properties + static structural rules |
//! | [`archive`] | Zip packaging and export orchestration |
//! | [`output`] | CLI output formatting — section inventory and artifact summaries |
//!
//! # Design Decisions
//!
//! ## Renderer Registry Over a Type Switch
//!
//! Section dispatch is a [`render::SectionRegistry`] mapping type tags to
//! [`render::SectionRenderer`] implementations, with an explicit fallback for
//! unknown tags. Adding a section type is one renderer plus one `register`
//! call; an unknown tag in a document renders a placeholder fragment instead
//! of failing the export.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed markup is a build error, template variables
//! are Rust expressions, and every interpolation is auto-escaped — which is
//! also the answer to untrusted text in user-entered names, bios, and URLs.
//!
//! ## Structure Is Fixed, Style Is Data
//!
//! Templates and user customization never touch the HTML. They only change
//! the seven CSS custom properties bound in the generated `:root` block; the
//! structural rules are embedded at compile time and reference nothing but
//! those properties. Swapping a template re-colors an exported site without
//! re-flowing it.
//!
//! ## Caller-Owned Documents
//!
//! There is no global store. The editing layer owns the [`types::Portfolio`]
//! and passes it by reference into resolution and compilation; the export
//! path never mutates it, so an aborted download needs no cleanup and a
//! retry just runs again.

pub mod archive;
pub mod output;
pub mod render;
pub mod styles;
pub mod stylesheet;
pub mod templates;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
