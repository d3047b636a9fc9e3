//! spamsieve server binary.

use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use spamsieve::detector::SpamDetector;
use spamsieve::model::store::ModelStore;
use spamsieve::server;
use spamsieve::storage::file::FileStorage;

/// Command line arguments for the spamsieve server.
#[derive(Debug, Parser)]
#[command(name = "spamsieve", version, about = "Spam/ham message classification service")]
struct Args {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "127.0.0.1", env = "SPAMSIEVE_HOST")]
    host: String,

    /// Port to bind the HTTP server to.
    #[arg(long, default_value_t = 8080, env = "SPAMSIEVE_PORT")]
    port: u16,

    /// Directory holding the fitted model artifacts.
    #[arg(long, default_value = "models", env = "SPAMSIEVE_MODEL_DIR")]
    model_dir: PathBuf,

    /// Increase logging verbosity (-v, -vv).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[actix_web::main]
async fn main() {
    // Parse command line arguments using clap
    let args = Args::parse();

    // Set up logging based on the verbosity count
    let log_level = match args.verbosity {
        0 => LevelFilter::Warn,  // Default
        1 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (2+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    // Load or fit the model before binding the listener: every request
    // must observe fully initialized, read-only artifacts. Corrupt
    // artifacts abort startup here.
    let storage = FileStorage::new(&args.model_dir)?;
    let store = ModelStore::open(&storage)?;
    let detector = SpamDetector::new(store);

    log::info!("listening on http://{}:{}", args.host, args.port);
    server::serve(detector, &args.host, args.port).await?;
    Ok(())
}
