//! hangul-sweep - Translate Korean text embedded in source files
//!
//! Entry point: parse arguments, set up logging, load configuration, then
//! sweep the tree. Any fatal error is logged and exits with status 1.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hangul_sweep::cli::Args;
use hangul_sweep::workflow::sweep;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = setup_logging(args.verbose) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(args).await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = args.load_config()?;

    if let Some(path) = &args.save_config {
        config.save_to_file(path)?;
        info!("Configuration written to {}", path.display());
        return Ok(());
    }

    sweep(&args, &config).await?;
    Ok(())
}

/// Setup console logging; -v enables info, -vv enables debug
fn setup_logging(verbosity: u8) -> Result<()> {
    let log_level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
