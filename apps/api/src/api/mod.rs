// API layer module (HTTP adapters)
// Handlers depend only on the repository port carried in AppState

pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
