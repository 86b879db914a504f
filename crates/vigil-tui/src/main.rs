//! Vigil TUI entry point.

use std::{fs::File, path::PathBuf, sync::Mutex};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vigil_tui::{Runtime, TerminalDriver};

/// Vigil terminal dashboard client
#[derive(Parser, Debug)]
#[command(name = "vigil-tui")]
#[command(about = "Terminal dashboard for the vigil threat-detection server")]
#[command(version)]
struct Args {
    /// Endpoint base URL of the detection server
    #[arg(short, long, default_value = "http://127.0.0.1:5000")]
    endpoint: String,

    /// Log file, written when RUST_LOG is set
    #[arg(long, default_value = "vigil-tui.log")]
    log_file: PathBuf,
}

/// Route logs to a file: the raw-mode terminal owns stdout.
fn init_logging(path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_file)?;

    let driver = TerminalDriver::new(&args.endpoint)?;
    Ok(Runtime::new(driver, args.endpoint).run().await?)
}
