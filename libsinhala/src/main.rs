use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libsinhala::{CurrencyStyle, Engine, SinhalaConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "libsinhala")]
#[command(about = "Transliterate Singlish (romanized Sinhala) into Sinhala script")]
#[command(version)]
struct Cli {
    /// Text to transliterate. Reads stdin line by line when omitted.
    text: Vec<String>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding rules.toml and vocabulary.toml
    #[arg(long)]
    rules_dir: Option<PathBuf>,

    /// Rewrite AM/PM times with Sinhala markers
    #[arg(long)]
    meridiem: bool,

    /// How currency amounts are written
    #[arg(long, value_enum)]
    currency: Option<CurrencyArg>,

    /// Print a JSON report per line instead of plain text
    #[arg(long)]
    explain: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum CurrencyArg {
    Canonical,
    Preserve,
    Localized,
}

impl From<CurrencyArg> for CurrencyStyle {
    fn from(arg: CurrencyArg) -> Self {
        match arg {
            CurrencyArg::Canonical => CurrencyStyle::Canonical,
            CurrencyArg::Preserve => CurrencyStyle::Preserve,
            CurrencyArg::Localized => CurrencyStyle::Localized,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<SinhalaConfig> {
    let mut config = match &cli.config {
        Some(path) => SinhalaConfig::load_toml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SinhalaConfig::default(),
    };
    if cli.meridiem {
        config.meridiem_normalization = true;
    }
    if let Some(style) = cli.currency {
        config.currency_style = style.into();
    }
    Ok(config)
}

fn build_engine(cli: &Cli, config: SinhalaConfig) -> Result<Engine> {
    match &cli.rules_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "using external tables");
            Engine::from_dir(dir, config)
                .with_context(|| format!("loading tables from {}", dir.display()))
        }
        None => Engine::new(config).context("loading embedded tables"),
    }
}

fn emit(engine: &Engine, line: &str, explain: bool, out: &mut impl Write) -> Result<()> {
    if explain {
        let report = engine.analyze(line);
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", engine.translate(line))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let engine = build_engine(&cli, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.text.is_empty() {
        let text = cli.text.join(" ");
        emit(&engine, &text, cli.explain, &mut out)?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        emit(&engine, &line, cli.explain, &mut out)?;
    }
    Ok(())
}
