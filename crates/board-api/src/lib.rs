pub mod error;
pub mod messages;

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{delete, get},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use board_db::MessageStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Box<dyn MessageStore>,
}

impl AppStateInner {
    pub fn new(store: impl MessageStore) -> AppState {
        Arc::new(Self {
            store: Box::new(store),
        })
    }
}

/// Builds the HTTP surface: the message resource under `/api/messages`
/// (open to any origin) plus `/health`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    let api = Router::new()
        .route(
            "/api/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .route("/api/messages/{id}", delete(messages::delete_message))
        .layer(cors)
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
}

/// Full application as served: `router` plus request tracing, with
/// `static_dir` (the built frontend) answering any path the API doesn't.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut app = router(state);
    if let Some(dir) = static_dir {
        info!("Serving frontend from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }
    app.layer(TraceLayer::new_for_http())
}

pub async fn health() -> &'static str {
    "ok"
}
