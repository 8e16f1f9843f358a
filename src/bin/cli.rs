//! LogForge CLI
//!
//! Thin caller over the storage core: parses input, runs normalization,
//! invokes the store, and prints results as JSON. Plays the same role an
//! HTTP request handler would in a deployed ingester.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use logforge::{Config, ForgeError, LogStore, Metadata, RecordDraft};

/// LogForge CLI
#[derive(Parser, Debug)]
#[command(name = "logforge-cli")]
#[command(about = "Append and page through durable log records")]
#[command(version)]
struct Args {
    /// Database file path
    #[arg(short, long, default_value = "./logs.db")]
    db: String,

    /// Busy timeout in milliseconds
    #[arg(long, default_value = "5000")]
    busy_timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append a log record
    Append {
        /// Log message (required)
        #[arg(short, long)]
        message: String,

        /// Severity level (TRACE|DEBUG|INFO|WARN|ERROR|FATAL, any case)
        #[arg(short, long)]
        level: Option<String>,

        /// Emitting component or service
        #[arg(short, long)]
        source: Option<String>,

        /// Originating hostname
        #[arg(long)]
        hostname: Option<String>,

        /// Deployment environment
        #[arg(short, long)]
        environment: Option<String>,

        /// Metadata as a JSON object, e.g. '{"request_id":"abc"}'
        #[arg(long)]
        metadata: Option<String>,
    },

    /// Print one page of records as JSON lines
    Page {
        /// Zero-based page number
        #[arg(short, long, default_value = "0")]
        page: u64,
    },

    /// Print pagination totals
    Info,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,logforge=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    // Build config from args
    let config = Config::builder()
        .db_path(&args.db)
        .busy_timeout_ms(args.busy_timeout_ms)
        .build();

    // Open store - failure here is fatal
    let store = match LogStore::open(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("failed to open log store: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&store, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(store: &LogStore, command: Commands) -> logforge::Result<()> {
    match command {
        Commands::Append {
            message,
            level,
            source,
            hostname,
            environment,
            metadata,
        } => {
            // Metadata arrives as raw JSON text from the user
            let metadata = metadata
                .map(|raw| serde_json::from_str::<Metadata>(&raw))
                .transpose()
                .map_err(|e| {
                    ForgeError::Validation(format!("metadata must be a JSON object: {}", e))
                })?;

            let draft = RecordDraft {
                message: Some(message),
                level,
                source,
                hostname,
                environment,
                metadata,
                ..RecordDraft::default()
            };

            // Normalize at the boundary, then hand the store a full record
            let record = draft.normalize()?;
            let id = store.append(&record)?;
            println!("{{\"status\":\"log saved\",\"id\":{}}}", id);
        }

        Commands::Page { page } => {
            for record in store.page(page)? {
                // Per-record lines keep large pages streamable
                match serde_json::to_string(&record) {
                    Ok(line) => println!("{}", line),
                    Err(e) => tracing::error!(id = record.id, "failed to render record: {}", e),
                }
            }
        }

        Commands::Info => {
            let info = store.pagination_info()?;
            match serde_json::to_string(&info) {
                Ok(line) => println!("{}", line),
                Err(e) => tracing::error!("failed to render pagination info: {}", e),
            }
        }
    }

    Ok(())
}
