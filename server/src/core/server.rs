//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::time::{Duration, Instant};

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

use crate::api;
use crate::auth::require_auth;
use crate::core::{Config, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (tests pass a memory-backed one)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await,
        };

        let app = build_app(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("🛒 Shop server starting on {}", addr);

        // Graceful shutdown on ctrl-c
        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            shutdown_handle.graceful_shutdown(Some(Duration::from_secs(5)));
        });

        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;

        Ok(())
    }
}

/// Assemble the full application router
///
/// Shared between `Server::run` and the integration tests, so both exercise
/// the same middleware stack.
pub fn build_app(state: ServerState) -> Router {
    Router::new()
        .merge(api::health::router())
        .merge(api::auth::router())
        .merge(api::products::router())
        .merge(api::orders::router())
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// Access log middleware
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        target: "http_access",
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
    );

    response
}
