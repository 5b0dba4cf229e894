use delivery_calendar::{load_deliveries, resolve_deliveries_path, router, AppState, DeliveryIndex};
use std::{env, net::SocketAddr};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let deliveries_path = resolve_deliveries_path()?;
    let records = load_deliveries(&deliveries_path).await;
    let index = DeliveryIndex::build(&records);
    info!(
        records = index.record_count(),
        dates = index.len(),
        "loaded deliveries from {}",
        deliveries_path.display()
    );

    let app = router(AppState::new(index));

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
