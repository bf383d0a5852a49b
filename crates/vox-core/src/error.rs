use http::StatusCode;

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each feature crate's error type. The server layer only
/// ever sees the status and the client message, so internal detail stays
/// in the logs.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `invalid_request_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;

    /// Whether the failure is on our side and must be logged in full
    fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}
