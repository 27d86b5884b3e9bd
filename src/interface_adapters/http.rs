// Shared HTTP response types for error payloads.

#[derive(Debug, serde::Serialize)]
pub struct ErrorStatusResponse {
    // Numeric status rendered as a string, e.g. "404".
    #[serde(rename = "ErrorStatus")]
    pub error_status: String,
}
