mod config;
mod pipeline;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use lotto_core::{normalize_path, output_dir_for, LottoError};
use lotto_render::DirectorySink;

use crate::config::Config;
use crate::pipeline::{run_analysis, Analysis};

const PROMPT: &str = "Please enter the path to your CSV file: ";

#[derive(Parser)]
#[command(
    name = "lotto",
    version,
    about = "Test whether lottery draw frequencies deviate from a uniform distribution"
)]
struct Cli {
    /// Path to the draws CSV (prompted for if omitted)
    path: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also print the counts and test result as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    show_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    if cli.show_config {
        cmd_show_config(&cfg, cli.config.as_deref());
        return Ok(());
    }

    let raw = match cli.path {
        Some(p) => p,
        None => {
            let stdin = io::stdin();
            prompt_path(&mut stdin.lock(), &mut io::stdout())?
        }
    };

    cmd_analyze(&raw, &cfg, cli.json)
}

/// Ask for the input path on `output` and read one line from `input`.
fn prompt_path(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read path from stdin")?;
    Ok(line)
}

fn cmd_analyze(raw: &str, cfg: &Config, json: bool) -> Result<()> {
    let input = normalize_path(raw);
    let out_dir = cfg
        .output
        .dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| output_dir_for(&input));
    let sink = DirectorySink::new(out_dir, cfg.charts.options());

    match run_analysis(&input, &sink, &cfg.analysis_options()) {
        Ok(analysis) => print_analysis(&analysis, json),
        Err(LottoError::FileNotFound(p)) => {
            println!(
                "Error: The file at {} was not found. Please check the path and try again.",
                p.display()
            );
            Ok(())
        }
        Err(LottoError::Io(e)) => Err(e).with_context(|| {
            format!("cannot write results to {}", sink.dir().display())
        }),
        Err(e) => Err(e).with_context(|| format!("analysis of {} failed", input.display())),
    }
}

fn print_analysis(analysis: &Analysis, json: bool) -> Result<()> {
    println!("Output saved to: {}", analysis.report_path.display());
    if let Some(p) = &analysis.bar_chart_path {
        println!("Bar plot saved to: {}", p.display());
    }
    if let Some(p) = &analysis.histogram_path {
        println!("Histogram saved to: {}", p.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(analysis)?);
    }

    println!();
    println!("{}", analysis.verdict);
    Ok(())
}

fn cmd_show_config(cfg: &Config, explicit: Option<&Path>) {
    println!("Config: {}", config::show_config_path(explicit));
    println!();
    println!("[analysis]");
    println!("  significance = {}", cfg.analysis.significance);
    println!();
    println!("[output]");
    println!(
        "  dir = {}",
        cfg.output
            .dir
            .as_deref()
            .unwrap_or("(directory of the input file)")
    );
    println!();
    println!("[charts]");
    println!("  enabled = {}", cfg.charts.enabled);
    println!("  width = {}", cfg.charts.width);
    println!("  height = {}", cfg.charts.height);
    println!("  histogram_buckets = {}", cfg.charts.histogram_buckets);
}
