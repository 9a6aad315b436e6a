use std::{path::PathBuf, sync::Arc};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub mod cli;
pub mod error;
pub mod html;
pub mod routes;
pub mod session;

pub use error::{Error, Result};

#[derive(Clone)]
pub struct AppState {
    identity: Arc<dyn session::Identity>,
    static_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(identity: Arc<dyn session::Identity>, static_dir: impl Into<PathBuf>) -> Self {
        AppState {
            identity,
            static_dir: Arc::new(static_dir.into()),
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::pages::index))
        .route("/script/:file", get(routes::files::script))
        .route("/style/:file", get(routes::files::style))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
