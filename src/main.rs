use quiz_app::catalog::load_catalog;
use quiz_app::config::Config;
use quiz_app::sink::{MemorySink, SubmissionSink, WebhookSink};
use quiz_app::storage::load_gate;
use quiz_app::{AppState, router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::load()?;

    let catalog = load_catalog(&config.catalog_path).await?;
    info!("loaded catalog with {} quiz days", catalog.len());

    if let Some(parent) = config.gate_path.parent() {
        fs::create_dir_all(parent).await?;
    }
    let gate = load_gate(&config.gate_path).await;

    let sink: Arc<dyn SubmissionSink> = match &config.sink_url {
        Some(url) => {
            info!("forwarding submissions to {url}");
            Arc::new(WebhookSink::new(url.clone()))
        }
        None => {
            info!("QUIZ_SINK_URL not set, recording submissions in memory");
            Arc::new(MemorySink::default())
        }
    };

    let state = AppState::new(&config, catalog, gate, sink);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
