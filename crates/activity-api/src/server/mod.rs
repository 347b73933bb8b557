//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;

use activity_common::{try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use activity_service::ServiceContext;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = apply_middleware(create_router(), state.config());
    router.with_state(state)
}

/// Serve `app` on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read local address: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Bind the configured address and serve the API backed by `service_context`
///
/// Installs the tracing preset of the configured environment unless the
/// embedding application already set a subscriber.
pub async fn run(config: AppConfig, service_context: ServiceContext) -> Result<(), AppError> {
    let tracing_config = TracingConfig::for_environment(config.app.env);
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        debug!(error = %e, "Keeping existing tracing subscriber");
    }

    let address = config.api.address();
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API address {address}: {e}")))?;

    info!(env = ?config.app.env, "Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    let app = create_app(AppState::new(service_context, config));
    run_server(app, listener).await
}
