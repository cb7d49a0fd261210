//! HTTP server for the posts page

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::render::PageRenderer;
use crate::store::ContentStore;

/// Shared server state
pub struct AppState {
    config: AppConfig,
    store: ContentStore,
    renderer: PageRenderer,
}

impl AppState {
    /// Build the state from configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = ContentStore::new(&config.store)?;
        let renderer = PageRenderer::new()?;
        Ok(Self {
            config,
            store,
            renderer,
        })
    }
}

/// A failure that aborts rendering of a page request.
///
/// Any fetch or render error surfaces as a generic bad-gateway response;
/// nothing of the page body is emitted.
pub struct PageError(anyhow::Error);

impl<E> From<E> for PageError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("page request failed: {:#}", self.0);
        (StatusCode::BAD_GATEWAY, "Bad Gateway").into_response()
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(posts_page))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server
pub async fn start(config: AppConfig) -> Result<()> {
    // Handle "localhost" specially
    let bind_ip = if config.server.host == "localhost" {
        "127.0.0.1"
    } else {
        &config.server.host
    };
    let addr: SocketAddr = format!("{}:{}", bind_ip, config.server.port).parse()?;

    let url = format!("http://{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config)?);
    let app = router(state);

    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Render the posts listing: one fetch, one render, no local recovery
async fn posts_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let posts = state.store.fetch_posts().await?;
    let html = state.renderer.render_posts(&state.config.site, &posts)?;
    Ok(Html(html))
}

/// Liveness probe that checks the content store is reachable
async fn healthz(State(state): State<Arc<AppState>>) -> Response {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "ok").into_response(),
        Err(e) => {
            tracing::warn!("content store unreachable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "content store unreachable").into_response()
        }
    }
}
