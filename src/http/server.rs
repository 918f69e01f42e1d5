//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit) with
//!   middleware failures mapped to JSON errors
//! - Bind server to listener and stop on the shutdown broadcast

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::encoding::{Dispatcher, EncoderRegistry, Format};
use crate::http::error::handle_layer_error;
use crate::http::handlers::{create_album, get_album, health, list_route};
use crate::http::request::make_request_span;
use crate::remote::RemoteAlbums;
use crate::store::AlbumStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AlbumStore>,
    pub dispatcher: Arc<Dispatcher>,
}

/// HTTP server for the album service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `store`.
    pub fn new(config: ServiceConfig, store: Arc<AlbumStore>) -> Self {
        let remote = RemoteAlbums::new(config.remote.clone());
        tracing::info!(backend = %remote.address(), "Remote protobuf route configured");
        let dispatcher = Dispatcher::new(EncoderRegistry::default(), remote);
        let state = AppState {
            store,
            dispatcher: Arc::new(dispatcher),
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let mut router: Router<AppState> = Router::new();
        for format in Format::ALL {
            router = router.route(
                &format!("/{}/albums", format.path_segment()),
                list_route(format),
            );
        }

        let router = router
            .route("/albums/{id}", get(get_album))
            .route("/albums", post(create_album))
            .route("/health", get(health))
            .with_state(state);
        Self::with_middleware(router, config)
    }

    /// Wrap `router` in the middleware stack.
    ///
    /// Body-limit and timeout failures surface as [`ApiError`](crate::http::ApiError)
    /// JSON like every handler error.
    fn with_middleware(router: Router, config: &ServiceConfig) -> Router {
        router
            .layer(DefaultBodyLimit::max(config.limits.max_body_size))
            .layer(
                ServiceBuilder::new()
                    .layer(HandleErrorLayer::new(handle_layer_error))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on `listener` until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
