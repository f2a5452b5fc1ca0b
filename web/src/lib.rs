use axum::http::{header::CACHE_CONTROL, HeaderName, HeaderValue, Method};
use log::*;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use self::error::{Error, ErrorKind, Result};
pub use service::AppState;

mod controller;
pub mod error;
mod extractors;
mod middleware;
mod router;

pub async fn init_server(app_state: AppState) -> Result<()> {
    let address = app_state.config.bind_address();
    let socket_addr: SocketAddr = address
        .parse()
        .map_err(|e| Error::new(ErrorKind::InvalidBindAddress(address.clone()), e))?;

    match app_state.config.https_port() {
        Some(port) => info!("Redirecting plaintext requests to HTTPS port {port}"),
        None => warn!("No HTTPS port configured, plaintext requests will not be redirected"),
    }

    info!(
        "Server starting... listening for connections on http://{socket_addr} ({} environment)",
        app_state.config.runtime_env()
    );

    let listener = TcpListener::bind(socket_addr)
        .await
        .map_err(|e| Error::new(ErrorKind::Bind(address), e))?;

    let cors_layer = cors_layer(&app_state.config.allowed_origins);
    let shutdown = app_state.shutdown_token().clone();
    let router = router::define_routes(app_state).layer(cors_layer);

    // Open event streams observe the same token and close themselves, which
    // lets graceful shutdown complete.
    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| Error::new(ErrorKind::Serve, e))?;

    info!("Server stopped");
    Ok(())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {origin:?}: {e}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_credentials(true)
        .allow_headers([
            HeaderName::from_static(sse::LAST_EVENT_ID),
            CACHE_CONTROL,
        ])
        .allow_origin(origins)
}
