//! Archive packaging and export.
//!
//! Wraps the two generated text artifacts into a single `portfolio.zip` the
//! user can download and unpack onto any static host. Packaging is the only
//! I/O-adjacent step in the pipeline: compile fully, then package, then hand
//! the bytes to whatever delivers the file. A failed or aborted export leaves
//! no partial state — the portfolio document is never touched, so a retry
//! just re-runs compile + package.
//!
//! Archives are built fully in memory and written deterministically: fixed
//! entry order, fixed modification timestamps, deflate compression. Equal
//! inputs produce byte-identical archives.

use crate::render::{self, SiteOutput};
use crate::styles::EffectiveStyles;
use crate::types::Portfolio;
use std::io::{Cursor, Write};
use std::path::Path;
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Fixed download filename for exported portfolios.
pub const ARCHIVE_NAME: &str = "portfolio.zip";

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Package named text entries into a zip archive, preserving entry order.
///
/// Returns the complete archive bytes or an error — never a truncated
/// archive.
pub fn package(entries: &[(&str, &str)]) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    // Fixed timestamp keeps repeated exports byte-identical.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    for (name, content) in entries {
        writer.start_file(*name, options)?;
        writer.write_all(content.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

/// Package a compiled site as the standard two-entry archive.
pub fn package_site(site: &SiteOutput) -> Result<Vec<u8>, ArchiveError> {
    package(&[("index.html", &site.html), ("styles.css", &site.css)])
}

/// Compile a portfolio with its resolved styles and package the result.
pub fn export(portfolio: &Portfolio) -> Result<Vec<u8>, ArchiveError> {
    let styles = EffectiveStyles::for_portfolio(portfolio);
    let site = render::compile(portfolio, &styles);
    package_site(&site)
}

/// Export a portfolio and write the archive to `path`.
///
/// The archive is built fully in memory first, so a packaging failure never
/// leaves a half-written file behind.
pub fn export_to_file(portfolio: &Portfolio, path: &Path) -> Result<(), ArchiveError> {
    let bytes = export(portfolio)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
