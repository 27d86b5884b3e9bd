// Wire DTOs and render helpers for the player HTTP surface.

use crate::domain::PlayerView;
use axum::http::{HeaderMap, header};
use serde::Serialize;

pub const GEO_JSON_CONTENT_TYPE: &str = "application/geo+json";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

// GeoJSON output is rounded to this many decimal places.
const GEO_JSON_DECIMALS: i32 = 5;

/// Representation a caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFormat {
    #[default]
    Json,
    GeoJson,
    PlainText,
}

impl StateFormat {
    /// Picks a format from a media type, ignoring parameters and case.
    pub fn from_media_type(value: &str) -> Option<Self> {
        let essence = value.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(GEO_JSON_CONTENT_TYPE) {
            Some(Self::GeoJson)
        } else if essence.eq_ignore_ascii_case("text/plain") {
            Some(Self::PlainText)
        } else if essence.eq_ignore_ascii_case(JSON_CONTENT_TYPE) {
            Some(Self::Json)
        } else {
            None
        }
    }

    /// `Accept` wins over `Content-Type`; JSON when neither names a known format.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        [header::ACCEPT, header::CONTENT_TYPE]
            .iter()
            .filter_map(|name| headers.get(name))
            .filter_map(|value| value.to_str().ok())
            .find_map(Self::from_media_type)
            .unwrap_or_default()
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Json => JSON_CONTENT_TYPE,
            Self::GeoJson => GEO_JSON_CONTENT_TYPE,
            Self::PlainText => TEXT_CONTENT_TYPE,
        }
    }
}

/// Flat JSON view of the player at full precision.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerDto {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
    pub bearing: f64,
    pub kph: f64,
}

impl From<&PlayerView> for PlayerDto {
    fn from(view: &PlayerView) -> Self {
        Self {
            name: view.name.clone(),
            lat: view.position.lat,
            lon: view.position.lon,
            alt: view.position.alt,
            bearing: view.velocity.bearing,
            kph: view.velocity.kph,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureDto {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: PointDto,
    pub properties: FeaturePropertiesDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointDto {
    #[serde(rename = "type")]
    pub kind: &'static str,
    // GeoJSON orders coordinates as [lon, lat].
    pub coordinates: [f64; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct FeaturePropertiesDto {
    pub name: String,
}

impl From<&PlayerView> for FeatureDto {
    fn from(view: &PlayerView) -> Self {
        Self {
            kind: "Feature",
            geometry: PointDto {
                kind: "Point",
                coordinates: [
                    round_to(view.position.lon, GEO_JSON_DECIMALS),
                    round_to(view.position.lat, GEO_JSON_DECIMALS),
                ],
            },
            properties: FeaturePropertiesDto {
                name: view.name.clone(),
            },
        }
    }
}

/// Velocity update accepted on POST.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityUpdateRequest {
    pub bearing: f64,
    pub kph: f64,
}

pub fn render(view: &PlayerView, format: StateFormat) -> Result<String, serde_json::Error> {
    match format {
        StateFormat::Json => serde_json::to_string(&PlayerDto::from(view)),
        StateFormat::GeoJson => serde_json::to_string(&FeatureDto::from(view)),
        StateFormat::PlainText => Ok(view.to_string()),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
