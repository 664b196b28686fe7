use clap::{Parser, Subcommand};
use simple_folio::styles::EffectiveStyles;
use simple_folio::types::Portfolio;
use simple_folio::{archive, output, render, templates};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Portfolio-to-static-site compiler")]
#[command(long_about = "\
Portfolio-to-static-site compiler

A portfolio document (JSON) is the data source: ordered content sections, a
visual template, and optional color/font overrides. The output is a
self-contained static site — index.html plus styles.css — either written to a
directory or packaged as portfolio.zip.

Section types: about, projects, skills, experience, education,
certifications, contact, blog, openSource, testimonials, resume. Unknown
types render a placeholder instead of failing the export.

Run 'simple-folio sample' to print a starter document.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a portfolio and package it as a zip archive
    Export {
        /// Portfolio document (JSON)
        portfolio: PathBuf,
        /// Archive path to write
        #[arg(long, default_value = archive::ARCHIVE_NAME)]
        output: PathBuf,
    },
    /// Compile a portfolio into index.html + styles.css in a directory
    Build {
        /// Portfolio document (JSON)
        portfolio: PathBuf,
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Validate a portfolio document and print its section inventory
    Check {
        /// Portfolio document (JSON)
        portfolio: PathBuf,
    },
    /// List the built-in templates
    Templates,
    /// Print a starter portfolio document
    Sample,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Export { portfolio, output } => {
            let portfolio = load_portfolio(&portfolio)?;
            let bytes = archive::export(&portfolio)?;
            std::fs::write(&output, &bytes)?;
            output::print_export_output(bytes.len(), &output);
        }
        Command::Build { portfolio, output } => {
            let portfolio = load_portfolio(&portfolio)?;
            let styles = EffectiveStyles::for_portfolio(&portfolio);
            let site = render::compile(&portfolio, &styles);
            std::fs::create_dir_all(&output)?;
            std::fs::write(output.join("index.html"), &site.html)?;
            std::fs::write(output.join("styles.css"), &site.css)?;
            output::print_build_output(site.html.len(), site.css.len(), &output);
        }
        Command::Check { portfolio } => {
            let portfolio = load_portfolio(&portfolio)?;
            output::print_check_output(&portfolio);
        }
        Command::Templates => {
            for template in templates::builtin_templates() {
                let palette = &template.styles;
                println!("{} ({})", template.name, template.id);
                println!(
                    "    {} {} {} {} {}",
                    palette.primary,
                    palette.secondary,
                    palette.accent,
                    palette.background,
                    palette.text
                );
            }
        }
        Command::Sample => {
            let sample = templates::sample_portfolio();
            println!("{}", serde_json::to_string_pretty(&sample)?);
        }
    }

    Ok(())
}

fn load_portfolio(path: &Path) -> Result<Portfolio, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let portfolio = serde_json::from_str(&content)?;
    Ok(portfolio)
}
