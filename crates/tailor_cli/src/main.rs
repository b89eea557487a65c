//! Tailor CLI
//!
//! Reads a theme file, emits the `--tailor-*` stylesheet and, on request,
//! the utility-framework preset fragment.

mod load;
mod watch;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tailor_preset::{base_styles, stylesheet, Preset};
use tracing_subscriber::EnvFilter;

/// Generate CSS variables and a utility-framework preset from a theme file.
#[derive(Debug, Parser)]
#[command(name = "tailor", version, about)]
struct Cli {
    /// Path to the theme file (TOML or JSON)
    theme: Option<PathBuf>,

    /// Output file name
    #[arg(short, long, default_value = "theme.css")]
    output: PathBuf,

    /// Prepend the base style block to the output
    #[arg(short, long)]
    base: bool,

    /// Also write the preset config fragment as JSON
    #[arg(long, value_name = "PATH")]
    preset_out: Option<PathBuf>,

    /// Regenerate whenever the theme file changes
    #[arg(short, long)]
    watch: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(theme_path) = cli.theme.clone() else {
        eprintln!("Please provide a theme file path");
        return ExitCode::FAILURE;
    };

    if let Err(err) = generate(&cli, &theme_path) {
        eprintln!("Error generating theme: {err:#}");
        return ExitCode::FAILURE;
    }
    println!("Successfully generated {}", cli.output.display());

    if cli.watch {
        println!("Watching {} for changes...", theme_path.display());
        let result = watch::run(&theme_path, || match generate(&cli, &theme_path) {
            Ok(()) => println!("Successfully generated {}", cli.output.display()),
            // Keep watching through bad intermediate saves.
            Err(err) => eprintln!("Error generating theme: {err:#}"),
        });
        if let Err(err) = result {
            eprintln!("Error generating theme: {err:#}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn generate(cli: &Cli, theme_path: &Path) -> Result<()> {
    let overrides = load::load_theme(theme_path)?;

    let mut css = String::new();
    if cli.base {
        css.push_str(base_styles());
        css.push('\n');
    }
    css.push_str(&stylesheet(Some(&overrides))?);
    fs::write(&cli.output, css)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    if let Some(path) = &cli.preset_out {
        let preset = Preset::generate(Some(&overrides))?;
        let json = serde_json::to_string_pretty(&preset).context("failed to serialize preset")?;
        fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
