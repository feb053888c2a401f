use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use blog_admin::{app, config::AppConfig, AppState};

#[derive(Parser)]
#[command(name = "blog-admin")]
#[command(about = "Blog admin front-end server")]
#[command(version)]
struct Cli {
    #[arg(long, short, help = "Port to listen on (overrides ADMIN_PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Blog backend base URL (overrides BACKEND_URL)")]
    backend_url: Option<String>,

    #[arg(long, default_value = "0.0.0.0", help = "Address to bind")]
    host: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up BACKEND_URL, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config: AppConfig = blog_admin::config::config().clone();
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.backend_url {
        config.backend.base_url = url;
    }

    tracing::info!("Starting blog admin in {:?} mode", config.environment);
    tracing::info!("Backend: {}", config.backend.base_url);

    let bind_addr = format!("{}:{}", cli.host, config.server.port);
    let state = AppState::new(config).context("failed to initialize backend client")?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Blog admin listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server error")?;

    Ok(())
}
