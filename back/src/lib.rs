pub mod error;
pub mod service;
pub mod store;
pub mod v1;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::service::TaskService;

#[derive(Debug)]
pub struct AppState {
    pub tasks: TaskService,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api/v1", v1::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
