use crate::interface_adapters::handlers::{get_player, not_found, update_velocity};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};
use std::sync::Arc;

// Build the HTTP router for the player endpoint.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_player).post(update_velocity))
        .fallback(not_found)
        .with_state(state)
}
