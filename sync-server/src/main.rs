//! Local sync helper for the portfolio site.
//!
//! Receives the full image list from the admin view, overwrites the assets
//! source module, and publishes the change with git. Developer convenience
//! only: no authentication, local port, permissive CORS so the dev server
//! origin can reach it.

mod publish;
mod service;

use clap::Parser;
use portfolio_site::sync::DEFAULT_SYNC_PORT;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::service::SyncConfig;

#[derive(Debug, Parser)]
#[command(name = "sync-server", about = "Portfolio sync and deploy helper")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = DEFAULT_SYNC_PORT)]
    port: u16,

    /// Repository the git commands run in.
    #[arg(long, default_value = ".")]
    repo_dir: PathBuf,

    /// Assets source file to overwrite, relative to the repository root.
    #[arg(long, default_value = "src/assets.js")]
    assets_path: PathBuf,

    /// Git remote to push to.
    #[arg(long, default_value = "origin")]
    remote: String,

    /// Git branch to push.
    #[arg(long, default_value = "main")]
    branch: String,

    /// Write the assets file without committing or pushing.
    #[arg(long)]
    no_push: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = Args::parse();
    let config = SyncConfig {
        repo_dir: args.repo_dir,
        assets_path: args.assets_path,
        remote: args.remote,
        branch: args.branch,
        push: !args.no_push,
    };
    info!("writing portfolio assets to {}", config.assets_path.display());

    let app = service::router(config);
    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    info!("portfolio sync helper listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
