use std::process;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use user_directory::api::{build_router, AppState};
use user_directory::directory::Directory;

#[derive(Parser)]
#[command(name = "user-directory")]
#[command(version)]
#[command(about = "In-memory user directory REST service")]
struct Cli {
    /// Address the HTTP server listens on.
    #[arg(long, env = "USER_DIRECTORY_BIND_ADDR", default_value = "127.0.0.1:8077")]
    bind_addr: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if let Err(e) = serve(&cli.bind_addr).await {
        eprintln!("user-directory error: {}", e);
        process::exit(1);
    }
}

async fn serve(bind_addr: &str) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(Directory::seeded()));
    let router = build_router(state);

    let listener = TcpListener::bind(bind_addr).await?;
    info!("user-directory listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await
}
