use thiserror::Error;

/// Errors raised while configuring or calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Request Error: {0}")]
    RequestError(String),

    #[error("Response Error: {0}")]
    ResponseError(String),

    #[error("Parsing Error: {0}")]
    ParsingError(String),

    #[error("HTTP Error: {status_code} - {message}")]
    HttpError { status_code: u16, message: String },
}

/// Result type for Gemini operations
pub type GeminiResult<T> = Result<T, GeminiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = GeminiError::HttpError {
            status_code: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP Error: 429 - quota exceeded");
    }

    #[test]
    fn test_response_error_display() {
        let err = GeminiError::ResponseError("No candidates in response".to_string());
        assert_eq!(err.to_string(), "Response Error: No candidates in response");
    }
}
