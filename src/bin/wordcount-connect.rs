use std::net::SocketAddr;
use wordcount::config::AppConfig;
use wordcount::session::server::{router, SessionRegistry};

// Matches the port of the default client connect URL.
const DEFAULT_BIND: &str = "127.0.0.1:15002";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: Option<SocketAddr> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args.get(i + 1).ok_or_else(|| {
                    anyhow::anyhow!("--bind needs a value, e.g. --bind 127.0.0.1:15002")
                })?;
                bind_addr = Some(value.parse()?);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
                eprintln!("Example: {} --bind 0.0.0.0:15002", args[0]);
                return Ok(());
            }
            other => {
                tracing::warn!("Ignoring unknown argument: {}", other);
                i += 1;
            }
        }
    }

    let bind_addr = match bind_addr {
        Some(addr) => addr,
        None => DEFAULT_BIND.parse()?,
    };

    // Partitioning hint shared with the client binary.
    let config = AppConfig::from_env()?;
    let registry = SessionRegistry::new(config.target_partitions);

    tracing::info!("Connect server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, router(registry))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
