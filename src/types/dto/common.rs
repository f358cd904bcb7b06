use poem_openapi::Object;

/// Error body returned by every failing endpoint
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

/// Confirmation body for favorite creation
#[derive(Object, Debug)]
pub struct MessageResponse {
    pub msg: String,
}

/// Response model for the health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Crate version serving the request
    pub version: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}
