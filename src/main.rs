use std::{env, net::SocketAddr};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use tracker_app::clock::SystemClock;
use tracker_app::{resolve_data_path, router, AppState, FileStore, Tracker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path();
    if let Some(parent) = data_path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let store = FileStore::load(&data_path);
    let mut tracker = Tracker::new(Box::new(store), Box::new(SystemClock));
    tracker.subscribe(Box::new(|change| debug!("state changed: {change:?}")));

    let app = router(AppState::new(tracker));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
