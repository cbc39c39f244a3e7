//! # bracketgen
//!
//! Generates the two-plate sandwich wall-mount bracket.
//!
//! Loads a parameter set (defaults, an optional JSON file, then `--set`
//! overrides in order), prints the dimension report and writes whichever
//! artefacts were requested:
//!
//! - `--scad` OpenSCAD source for an external CAD kernel
//! - `--stl` mesh evaluated by the built-in BSP kernel
//! - `--json` the CSG tree itself
//!
//! Parameter warnings go to stderr and never stop generation.

mod output;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bracket_csg::{bracket_scad, build, check, parse_assignment, report, BracketParams};
use bracket_mesh::{render, save_stl, StlFormat};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Sandwich wall-mount bracket generator
#[derive(Debug, Parser)]
#[command(name = "bracketgen")]
#[command(about = "Parametric two-plate wall-mount bracket generator", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON parameter file; missing fields keep their defaults
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Override one parameter, e.g. --set spacer_gap=2.5 (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    overrides: Vec<String>,

    /// Write OpenSCAD source
    #[arg(long, value_name = "OUT")]
    scad: Option<PathBuf>,

    /// Write an STL mesh
    #[arg(long, value_name = "OUT")]
    stl: Option<PathBuf>,

    /// Use binary STL instead of ASCII
    #[arg(long, requires = "stl")]
    binary: bool,

    /// Write the CSG tree as JSON
    #[arg(long, value_name = "OUT")]
    json: Option<PathBuf>,

    /// Report format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Suppress the report and warnings
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// How results are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Everything printed in JSON mode.
#[derive(Serialize)]
struct Summary<'a> {
    params: &'a BracketParams,
    report: bracket_csg::Report,
    warnings: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let params = load_params(cli.params.as_deref(), &cli.overrides)?;
    debug!(?params, "loaded parameters");

    let warnings: Vec<String> = check(&params).iter().map(ToString::to_string).collect();
    for message in &warnings {
        warn!(%message, "parameter warning");
        output::warning(message, cli.quiet);
    }

    let summary = report(&params);
    output::report(&summary.to_string(), cli.format, cli.quiet);

    if let Some(path) = &cli.scad {
        fs::write(path, bracket_scad(&params))
            .with_context(|| format!("failed to write {}", path.display()))?;
        output::success(&format!("Wrote {}", path.display()), cli.format, cli.quiet);
    }

    if let Some(path) = &cli.json {
        let tree = serde_json::to_string_pretty(&build(&params))?;
        fs::write(path, tree).with_context(|| format!("failed to write {}", path.display()))?;
        output::success(&format!("Wrote {}", path.display()), cli.format, cli.quiet);
    }

    if let Some(path) = &cli.stl {
        let mesh = render(&params).context("failed to evaluate bracket mesh")?;
        let format = if cli.binary {
            StlFormat::Binary
        } else {
            StlFormat::Ascii
        };
        save_stl(path, &mesh, format)
            .with_context(|| format!("failed to write {}", path.display()))?;
        output::success(
            &format!("Wrote {} ({} triangles)", path.display(), mesh.triangle_count()),
            cli.format,
            cli.quiet,
        );
    }

    output::print(
        &Summary {
            params: &params,
            report: summary,
            warnings,
        },
        cli.format,
        cli.quiet,
    );
    Ok(())
}

/// Defaults, then the JSON file, then each override in order.
fn load_params(file: Option<&Path>, overrides: &[String]) -> Result<BracketParams> {
    let mut params = match file {
        Some(path) => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            BracketParams::from_json(&source)
                .with_context(|| format!("invalid parameters in {}", path.display()))?
        }
        None => BracketParams::default(),
    };

    for text in overrides {
        let (name, value) = parse_assignment(text)?;
        params = params
            .with(&name, value)
            .with_context(|| format!("invalid override '{text}'"))?;
    }

    Ok(params)
}
