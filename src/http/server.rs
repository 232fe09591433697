//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, metrics, headers)
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::artists::{ArtistSearch, StaticArtistDirectory};
use crate::config::AppConfig;
use crate::greeting::Dispatcher;
use crate::http::handlers::{hello_world, say_formal_hello, say_informal_hello, search_artist};
use crate::http::request::{request_id_of, MakeRequestUuid, X_REQUEST_ID};
use crate::http::views::{ViewEngine, ViewError};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Dispatcher,
    pub artists: Arc<dyn ArtistSearch>,
    pub views: Arc<ViewEngine>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher, artists: Arc<dyn ArtistSearch>) -> Result<Self, ViewError> {
        Ok(Self {
            dispatcher,
            artists,
            views: Arc::new(ViewEngine::new()?),
        })
    }

    /// Both greeters and the static artist directory.
    pub fn with_defaults() -> Result<Self, ViewError> {
        Self::new(Dispatcher::default(), Arc::new(StaticArtistDirectory::new()))
    }
}

/// HTTP server for the greeting service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server with the default greeters and artist directory.
    pub fn new(config: AppConfig) -> Result<Self, ViewError> {
        Ok(Self::with_state(config, AppState::with_defaults()?))
    }

    pub fn with_state(config: AppConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(hello_world))
            .route("/SayHello", get(say_formal_hello))
            .route("/SayHello2/{name}", get(say_informal_hello))
            .route("/searchArtist/{artist_name}", get(search_artist))
            .route_layer(middleware::from_fn(metrics::track_metrics))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                        tracing::info_span!(
                            "request",
                            request_id = %request_id_of(request),
                            method = %request.method(),
                            uri = %request.uri(),
                        )
                    }))
                    .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    )))
                    .layer(SetResponseHeaderLayer::if_not_present(
                        header::X_CONTENT_TYPE_OPTIONS,
                        HeaderValue::from_static("nosniff"),
                    )),
            )
    }

    /// The fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve on `listener` until a value arrives on `shutdown`.
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
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
