// ============================================================================
// cdc Command Line
// Reads lines from stdin and evaluates them until EOF or `q`
// ============================================================================

use cdc::prelude::*;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// cdc - a reverse-Polish desk calculator
#[derive(Parser, Debug)]
#[command(name = "cdc")]
#[command(about = "Reverse-Polish desk calculator reading commands from stdin", long_about = None)]
struct Args {
    /// Numeric backend
    #[arg(short, long, value_enum)]
    backend: Option<BackendArg>,

    /// Initial number of fractional digits
    #[arg(short, long)]
    precision: Option<u32>,

    /// Largest precision the `k` command may set
    #[arg(long)]
    max_precision: Option<u32>,

    /// Push nothing (instead of zero) when an operation fails
    #[arg(long)]
    discard_on_error: bool,

    /// JSON configuration file (requires the `serde` feature)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    Float,
    Decimal,
    BigDecimal,
}

impl From<BackendArg> for NumericBackendType {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Float => NumericBackendType::Float,
            BackendArg::Decimal => NumericBackendType::Decimal,
            BackendArg::BigDecimal => NumericBackendType::BigDecimal,
        }
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    // RUST_LOG controls the level; default to WARN
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}

#[cfg(feature = "serde")]
fn load_config_file(path: &std::path::Path) -> Result<CalculatorConfig, String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    CalculatorConfig::from_json_str(&json)
}

#[cfg(not(feature = "serde"))]
fn load_config_file(_path: &std::path::Path) -> Result<CalculatorConfig, String> {
    Err("configuration files require the `serde` feature".to_string())
}

fn build_config(args: &Args) -> Result<CalculatorConfig, String> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => CalculatorConfig::classic(),
    };

    if let Some(backend) = args.backend {
        config.backend = backend.into();
    }
    if let Some(precision) = args.precision {
        config = config.with_precision(precision);
    }
    if let Some(max_precision) = args.max_precision {
        config = config.with_max_precision(max_precision);
    }
    if args.discard_on_error {
        config = config.with_domain_error_policy(DomainErrorPolicy::Discard);
    }
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let mut calc = match build_config(&args)
        .and_then(|config| create_from_config(config, Arc::new(WriterEventHandler::stdout())))
    {
        Ok(calc) => calc,
        Err(e) => {
            eprintln!("cdc: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin();
    match run_session(calc.as_mut(), stdin.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cdc: {e}");
            ExitCode::FAILURE
        }
    }
}
