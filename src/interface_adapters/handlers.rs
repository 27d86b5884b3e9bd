use crate::interface_adapters::gateway::GatewayError;
use crate::interface_adapters::http::ErrorStatusResponse;
use crate::interface_adapters::protocol::{StateFormat, TEXT_CONTENT_TYPE};
use crate::interface_adapters::state::AppState;
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, warn};

// GET returns the player in the format hinted by the request headers.
pub async fn get_player(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let format = StateFormat::from_headers(&headers);
    match state.gateway.read(format) {
        Ok(body) => state_response(format, body),
        Err(e) => error_response(e),
    }
}

// POST updates the player's velocity and returns the updated player.
pub async fn update_velocity(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let format = StateFormat::from_headers(&headers);
    match state.gateway.write(&body, format) {
        Ok(body) => state_response(format, body),
        Err(e) => error_response(e),
    }
}

// Unknown routes get the JSON error envelope.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorStatusResponse {
            error_status: StatusCode::NOT_FOUND.as_u16().to_string(),
        }),
    )
}

fn state_response(format: StateFormat, body: String) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, format.content_type())],
        body,
    )
        .into_response()
}

fn error_response(err: GatewayError) -> Response {
    let status = if err.is_client_error() {
        warn!(error = %err, "rejected velocity update");
        StatusCode::BAD_REQUEST
    } else {
        error!(error = %err, "failed to serve player state");
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (
        status,
        [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
        err.to_string(),
    )
        .into_response()
}
