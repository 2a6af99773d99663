//! HTTP front for the pantry matcher.
//!
//! | Route | Purpose |
//! |---|---|
//! | `GET /` | health check |
//! | `GET /api/recipes?ingredients=a,b` | ranked recipe search |
//! | `GET /api/recipes/{id}` | recipe details, proxied |
//! | `POST /api/ingredients/image` | photo to ingredient list, up to 10 MiB |
//! | `POST /api/subscribe`, `GET /api/subscribers` | premium sign-ups |

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

pub mod error;
pub mod routes;
pub mod state;

use routes::{
    details_handler, health_handler, image_handler, search_handler, subscribe_handler,
    subscribers_handler, MAX_IMAGE_BYTES,
};
pub use state::State;

use crate::config::Config;

pub fn router(state: Arc<State>) -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/api/recipes", get(search_handler))
        .route("/api/recipes/{id}", get(details_handler))
        .route(
            "/api/ingredients/image",
            post(image_handler).layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES)),
        )
        .route("/api/subscribe", post(subscribe_handler))
        .route("/api/subscribers", get(subscribers_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: &Config) -> Result<()> {
    info!("Initializing state...");
    let state = State::from_config(config);
    let app = router(state);

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Server running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
