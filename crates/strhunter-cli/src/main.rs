use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use strhunter_core::{write_report, Checker, Config, FileConfig, OutputFormat};
use tracing::info;

/// Preset used by `--invalid-type 1`: tolerate CJK ideographs and the
/// full-width punctuation that comes with them, flag everything else
/// outside the single-byte range.
const ALLOW_CJK_PATTERN: &str = "[^\\x00-\\xff\u{4e00}-\u{9fa5}\u{3002}\u{ff1f}\u{ff01}\u{ff0c}\u{3001}\u{ff1b}\u{ff1a}\u{201c}\u{201d}\u{2018}\u{2019}\u{ff08}\u{ff09}\u{300a}\u{300b}\u{3008}\u{3009}\u{3010}\u{3011}\u{300e}\u{300f}\u{300c}\u{300d}\u{fe43}\u{fe44}\u{3014}\u{3015}\u{2026}\u{2014}\u{ff5e}\u{fe4f}\u{ffe5}]";

#[derive(Parser, Debug)]
#[command(
    name = "strhunter",
    version,
    about = "Find invalid strings in Go source files",
    after_help = "Examples:\n  strhunter ./...\n  strhunter --skip-file \"yacc|\\.pb\\.\" ./pkg ./cmd\n  strhunter --invalid-str \"[，。？！]\" --output json ./...\n"
)]
struct Cli {
    /// Directories to check; append `...` for a recursive walk.
    #[arg(required = true)]
    paths: Vec<String>,

    /// Skip files whose path matches this regular expression.
    #[arg(long)]
    skip_file: Option<String>,

    /// Exclude `_test.go` files from the check (default: true).
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    ignore_tests: Option<bool>,

    /// Output format: text or json.
    #[arg(long, default_value = "text")]
    output: String,

    /// Regular expression flagging a decoded string; by default any
    /// character outside \x00-\xff is invalid.
    #[arg(long)]
    invalid_str: Option<String>,

    /// Predicate preset: 0 flags all non-ASCII, 1 additionally tolerates
    /// CJK text and punctuation. Ignored when --invalid-str is given.
    #[arg(long, default_value_t = 0)]
    invalid_type: u8,

    /// Optional TOML config file; explicit flags win over its keys.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Parser threads; defaults to one per CPU core.
    #[arg(long)]
    threads: Option<usize>,

    /// Exit with status 2 when any issue is found.
    #[arg(long)]
    set_exit_status: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let format = OutputFormat::from_str(&cli.output)?;

    let mut cfg = Config::default();
    if let Some(path) = &cli.config {
        FileConfig::load(path)?.apply(&mut cfg);
    }
    if let Some(skip_file) = cli.skip_file {
        cfg.skip_file = Some(skip_file);
    }
    if let Some(ignore_tests) = cli.ignore_tests {
        cfg.ignore_tests = ignore_tests;
    }
    match (cli.invalid_str, cli.invalid_type) {
        (Some(pattern), _) => cfg.invalid_pattern = pattern,
        (None, 1) => cfg.invalid_pattern = ALLOW_CJK_PATTERN.to_string(),
        _ => {}
    }
    if let Some(threads) = cli.threads {
        cfg.threads = Some(threads);
    }

    let checker = Checker::new(&cfg).context("invalid configuration")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut lint_failed = false;
    for path in &cli.paths {
        let issues = checker
            .check_path(path)
            .with_context(|| format!("check {path}"))?;
        info!(path = %path, issues = issues.len(), "check finished");
        write_report(&mut out, &issues, format)?;
        if !issues.is_empty() {
            lint_failed = true;
        }
    }
    out.flush().ok();

    if lint_failed && cli.set_exit_status {
        std::process::exit(2);
    }
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // report goes to stdout; logs stay on stderr, RUST_LOG raises the level
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
