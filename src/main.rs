use fitness_tracker::{clock::{Clock, SystemClock}, load_state, router, AppConfig, AppState};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let data = load_state(&config.data_path, SystemClock.today()).await;
    info!(
        path = %config.data_path.display(),
        start = %data.tracking_start_date,
        "loaded tracking state"
    );
    let app = router(AppState::new(config.data_path.clone(), data));

    let addr = config.bind_addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
