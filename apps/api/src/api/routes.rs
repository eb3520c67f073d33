use std::path::Path;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{employees, greeting};
use crate::api::state::AppState;

// Route paths
pub const HELLO: &str = "/hello";
pub const ASSETS: &str = "/assets";
pub const ASSETS_INDEX: &str = "/assets/";
pub const EMPLOYEE: &str = "/employee";

/// Build the application router
///
/// GET and POST on `/employee` share a path and are told apart by method.
/// Files under `assets_dir` are served below `/assets/`.
pub fn create_router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route(HELLO, get(greeting::hello))
        .nest_service(ASSETS, ServeDir::new(assets_dir))
        .route(
            EMPLOYEE,
            get(employees::list_employees).post(employees::create_employee),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
