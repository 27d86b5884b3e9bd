// Read/update contract between the HTTP handlers and the player state.

use crate::domain::PlayerError;
use crate::interface_adapters::protocol::{StateFormat, VelocityUpdateRequest, render};
use crate::use_cases::PlayerState;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub enum GatewayError {
    // Body was not valid JSON; carries the parser diagnostic.
    MalformedVelocityDocument(String),
    // Body was JSON but `bearing`/`kph` were missing or not numbers.
    InvalidVelocityFields(String),
    InvalidVelocity(PlayerError),
    Render(serde_json::Error),
}

impl GatewayError {
    /// True when the caller sent a bad request rather than the server failing.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, GatewayError::Render(_))
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::MalformedVelocityDocument(detail) => {
                write!(f, "malformed velocity document: {detail}")
            }
            GatewayError::InvalidVelocityFields(detail) => {
                write!(f, "invalid velocity fields: {detail}")
            }
            GatewayError::InvalidVelocity(e) => write!(f, "{e}"),
            GatewayError::Render(e) => write!(f, "failed to render player state: {e}"),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<PlayerError> for GatewayError {
    fn from(e: PlayerError) -> Self {
        GatewayError::InvalidVelocity(e)
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(e: serde_json::Error) -> Self {
        GatewayError::Render(e)
    }
}

#[derive(Debug, Clone)]
pub struct StateAccessGateway {
    player: Arc<PlayerState>,
}

impl StateAccessGateway {
    pub fn new(player: Arc<PlayerState>) -> Self {
        Self { player }
    }

    /// Renders the current player state. Rendering happens after the lock is released.
    pub fn read(&self, format: StateFormat) -> Result<String, GatewayError> {
        let view = self.player.snapshot();
        Ok(render(&view, format)?)
    }

    /// Applies a `{"bearing", "kph"}` document and returns the updated state.
    /// State is untouched on any error.
    pub fn write(&self, body: &str, format: StateFormat) -> Result<String, GatewayError> {
        let request = parse_velocity_update(body)?;
        let bearing = request.bearing.rem_euclid(360.0);
        let velocity = self.player.set_velocity(bearing, request.kph)?;
        info!(bearing = velocity.bearing, kph = velocity.kph, "velocity updated");
        self.read(format)
    }
}

pub fn parse_velocity_update(body: &str) -> Result<VelocityUpdateRequest, GatewayError> {
    let document: Value = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedVelocityDocument(e.to_string()))?;

    let field = |name: &str| -> Result<f64, GatewayError> {
        match document.get(name) {
            Some(value) => value.as_f64().ok_or_else(|| {
                GatewayError::InvalidVelocityFields(format!("`{name}` must be a number"))
            }),
            None => Err(GatewayError::InvalidVelocityFields(format!(
                "`{name}` is required"
            ))),
        }
    };

    Ok(VelocityUpdateRequest {
        bearing: field("bearing")?,
        kph: field("kph")?,
    })
}
