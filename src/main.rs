use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use docsim::config::Config;
use docsim::output::terminal;
use docsim::similarity::{DocumentComparer, TfIdfCosine};

/// docsim: TF-IDF cosine similarity between two text documents.
#[derive(Parser)]
#[command(name = "docsim", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two local text files
    Compare {
        /// First document
        first: PathBuf,

        /// Second document
        second: PathBuf,

        /// Print the result as JSON instead of a terminal summary
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP comparison service
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides DOCSIM_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docsim=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            first,
            second,
            json,
        } => {
            // Offline comparison only needs the document ceiling; a bad PORT
            // must not stop it.
            let max_document_bytes = Config::load_document_limit()?;
            let text_a = read_document(&first, max_document_bytes)?;
            let text_b = read_document(&second, max_document_bytes)?;
            info!(
                bytes_a = text_a.len(),
                bytes_b = text_b.len(),
                "Read documents"
            );

            let outcome = TfIdfCosine.compare(&text_a, &text_b);

            match (outcome, json) {
                (Ok(comparison), true) => {
                    println!("{}", serde_json::to_string_pretty(&comparison)?);
                }
                (Ok(comparison), false) => {
                    terminal::display_comparison(
                        &comparison,
                        &first.display().to_string(),
                        &second.display().to_string(),
                    );
                }
                (Err(e), true) => {
                    let body = serde_json::json!({ "error": e.code(), "details": e.to_string() });
                    println!("{}", serde_json::to_string_pretty(&body)?);
                    return Ok(ExitCode::FAILURE);
                }
                (Err(e), false) => {
                    terminal::display_error(&e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            docsim::web::run_server(config).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Read a document from disk as UTF-8 (lossy), refusing files over the ceiling.
///
/// The size is checked from metadata before anything is read.
fn read_document(path: &Path, max_bytes: usize) -> Result<String> {
    let len = std::fs::metadata(path)
        .with_context(|| format!("failed to read {}", path.display()))?
        .len();
    if len > max_bytes as u64 {
        anyhow::bail!(
            "{} is {} bytes, over the {} byte document limit",
            path.display(),
            len,
            max_bytes
        );
    }
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
