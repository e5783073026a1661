//! notelite HTTP server
//!
//! Serves the note CRUD API over a file-backed store. Configuration comes
//! from CLI flags with environment fallbacks:
//!
//! ```bash
//! notelite-server --port 3000 --data-dir notes
//! NOTELITE_PORT=8080 NOTELITE_DATA_DIR=/var/lib/notelite notelite-server
//! ```

use clap::Parser;
use notelite::server::build_router;
use notelite::store::FsNoteStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "notelite-server", about = "Minimal shareable markdown notepad server")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "NOTELITE_PORT", default_value_t = 3000)]
    port: u16,

    /// Directory holding one JSON file per note
    #[arg(long, env = "NOTELITE_DATA_DIR", default_value = "notes")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let store = FsNoteStore::open(&args.data_dir).await?;
    info!(data_dir = %args.data_dir.display(), "note store opened");

    let app = build_router(Arc::new(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("notelite server running on http://localhost:{}", args.port);

    axum::serve(listener, app).await?;
    Ok(())
}
