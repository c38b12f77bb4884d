// SPDX-License-Identifier: MIT
//
// moodnote-palette — inspect and validate the MoodNote color system.
//
// Wires the two library crates into a command-line tool:
//
//   mn-color → hex / rgba parsing, brightness adjustment
//   mn-theme → primitives, semantic themes, WCAG engine, reporter
//
// Every command builds the ThemeSet once up front and passes it down by
// reference:
//
//   validate  → audit pairs (or a JSON pairs file) → report → stdout
//   check     → one pair → one formatted result line (+ usage verdict)
//   suggest   → brightness search → suggested color + ratio
//   tokens    → semantic theme(s) as JSON
//
// Logs go to stderr so stdout stays machine-readable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use mn_color::{Rgb, Rgba};
use mn_theme::compliance::{ColorPair, Level, Usage, batch_check};
use mn_theme::contrast::{contrast_ratio, suggest_color};
use mn_theme::report::Section;
use mn_theme::{Mode, ThemeSet, ValidationReport};
use serde_json::{Map, Value};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "warn";

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "moodnote-palette",
    version,
    about = "Validate the MoodNote color palette against WCAG 2.1"
)]
struct Cli {
    /// Tracing filter, e.g. `debug` or `mn_theme=trace`.
    #[arg(
        long,
        global = true,
        env = "MOODNOTE_PALETTE_LOG",
        default_value = DEFAULT_LOG_LEVEL
    )]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the compliance report (default).
    Validate(ValidateArgs),
    /// Check one foreground/background pair.
    Check(CheckArgs),
    /// Suggest a color that reaches a target ratio.
    Suggest(SuggestArgs),
    /// Print semantic tokens as JSON.
    Tokens(TokensArgs),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
    #[default]
    Both,
}

impl ModeArg {
    fn modes(self) -> Vec<Mode> {
        match self {
            Self::Light => vec![Mode::Light],
            Self::Dark => vec![Mode::Dark],
            Self::Both => Mode::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Args)]
struct ValidateArgs {
    /// Which built-in themes to audit.
    #[arg(long, value_enum, default_value_t = ModeArg::Both)]
    mode: ModeArg,

    /// JSON file of `{color1, color2, label?, usage?}` pairs to check
    /// instead of the built-in themes.
    #[arg(long, value_name = "FILE")]
    pairs: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with status 1 if any pair is Poor or misses its usage.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Hex or `rgba(...)`; translucent colors are flattened onto BACKGROUND.
    foreground: Rgba,
    background: Rgb,
    /// Intended usage (text, large-text, ui).
    #[arg(long)]
    usage: Option<Usage>,
}

#[derive(Debug, Args)]
struct SuggestArgs {
    color: Rgb,
    background: Rgb,
    #[arg(long, default_value_t = 4.5)]
    target: f64,
}

#[derive(Debug, Args)]
struct TokensArgs {
    #[arg(long, value_enum, default_value_t = ModeArg::Both)]
    mode: ModeArg,
}

// ─── Commands ───────────────────────────────────────────────────────────────

/// Execute `command` and return the process exit status.
fn run(command: Command, themes: &ThemeSet) -> anyhow::Result<i32> {
    match command {
        Command::Validate(args) => validate(&args, themes),
        Command::Check(args) => {
            println!("{}", check(&args));
            Ok(0)
        }
        Command::Suggest(args) => {
            println!("{}", suggest(&args));
            Ok(0)
        }
        Command::Tokens(args) => {
            let json = serde_json::to_string_pretty(&tokens(&args, themes)?)
                .context("failed to serialize tokens")?;
            println!("{json}");
            Ok(0)
        }
    }
}

fn validate(args: &ValidateArgs, themes: &ThemeSet) -> anyhow::Result<i32> {
    let report = match &args.pairs {
        Some(path) => {
            let pairs = load_pairs(path)?;
            let title = format!("📄 {}", path.display());
            ValidationReport::from_sections(vec![Section::new(title, batch_check(&pairs))])
        }
        None => ValidationReport::for_themes(themes, &args.mode.modes()),
    };

    match args.format {
        OutputFormat::Text => print!("{report}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        ),
    }

    if args.strict && report.has_failures() {
        tracing::warn!(
            poor = report.summary.poor,
            target_failures = report.summary.target_failures,
            "strict validation failed"
        );
        return Ok(1);
    }
    Ok(0)
}

fn load_pairs(path: &Path) -> anyhow::Result<Vec<ColorPair>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read pairs file {}", path.display()))?;
    let pairs: Vec<ColorPair> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse pairs file {}", path.display()))?;
    tracing::info!(count = pairs.len(), path = %path.display(), "loaded color pairs");
    Ok(pairs)
}

fn check(args: &CheckArgs) -> String {
    let foreground = args.foreground.composite_over(args.background);
    let mut pair = ColorPair::new(foreground, args.background);
    if !args.foreground.is_opaque() {
        pair = pair.labeled(format!("{} on {}", args.foreground, args.background));
    }
    let Some(usage) = args.usage else {
        return pair.check().to_string();
    };
    let result = pair.with_usage(usage).check();
    let mark = if result.meets_target(Level::Aa) { "✓" } else { "✗" };
    format!("{result} - {usage} AA: {mark}")
}

fn suggest(args: &SuggestArgs) -> String {
    let suggested = suggest_color(args.color, args.background, args.target);
    let ratio = contrast_ratio(suggested, args.background);
    format!("{suggested} ({ratio:.2}:1 on {})", args.background)
}

fn tokens(args: &TokensArgs, themes: &ThemeSet) -> anyhow::Result<Value> {
    let mut map = Map::new();
    for mode in args.mode.modes() {
        let value = serde_json::to_value(themes.get(mode))
            .with_context(|| format!("failed to serialize {mode} theme"))?;
        map.insert(mode.to_string(), value);
    }
    Ok(Value::Object(map))
}

// ─── Entry point ────────────────────────────────────────────────────────────

/// Parse `level` as a filter, falling back to the default with a warning.
fn build_env_filter(level: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(err) => (
            EnvFilter::new(DEFAULT_LOG_LEVEL),
            Some(format!(
                "invalid log filter '{level}': {err}; using '{DEFAULT_LOG_LEVEL}'"
            )),
        ),
    }
}

fn init_tracing(level: &str) {
    let (filter, warning) = build_env_filter(level);
    if let Some(warning) = warning {
        eprintln!("moodnote-palette: {warning}");
    }
    // Ignore a subscriber that is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let result = ThemeSet::moodnote()
        .context("built-in palette is incomplete")
        .and_then(|themes| {
            let command = cli
                .command
                .unwrap_or_else(|| Command::Validate(ValidateArgs::default()));
            run(command, &themes)
        });

    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("moodnote-palette: {err:#}");
            process::exit(1);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
