use anyhow::Context;
use clap::{Parser, Subcommand};
use rekap::{cli, server};
use rekap_core::config::Config;
use rekap_sheets::Workbook;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rekap", about = "Rekap — daily package totals from transaction spreadsheets")]
struct Cli {
    /// Write debug logs to /tmp/rekap-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the sheets of a workbook.
    Sheets { file: PathBuf },
    /// Print the report for one sheet.
    Report {
        file: PathBuf,
        /// Sheet name, or its 1-based number as shown by `sheets`.
        #[arg(short, long)]
        sheet: String,
    },
    /// Walk through the chat dialog on stdin/stdout.
    Chat { file: PathBuf },
    /// Serve the liveness endpoint.
    Serve,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    init_logging(args.debug, &config)?;

    let scan_rows = config.engine.header_scan_rows;
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Command::Sheets { file } => cli::sheets(&open(&file)?, &mut stdout),
        Command::Report { file, sheet } => cli::report(&open(&file)?, &sheet, scan_rows, &mut stdout),
        Command::Chat { file } => {
            let idle = config.session.idle_timeout();
            cli::chat(open(&file)?, scan_rows, idle, std::io::stdin().lock(), &mut stdout)
        }
        Command::Serve => tokio::runtime::Runtime::new()?.block_on(server::serve(&config.server)),
    }
}

fn open(file: &Path) -> anyhow::Result<Workbook> {
    Workbook::open(file).with_context(|| format!("cannot read {}", file.display()))
}

fn init_logging(debug: bool, config: &Config) -> anyhow::Result<()> {
    if debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/rekap-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("rekap debug log started — tail -f /tmp/rekap-debug.log");
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
            )
            .init();
    }
    Ok(())
}
