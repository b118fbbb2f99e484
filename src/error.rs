use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the client. Each failure class is a distinct variant
/// so callers can inspect what went wrong; none are swallowed internally.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connectivity failure: connection refused, timeout, DNS, TLS, or a
    /// failure to construct the underlying HTTP client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {}", truncate_body(.body))]
    HttpStatus { status: StatusCode, body: String },

    /// The response body was not well-formed JSON.
    #[error("failed to parse response JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response JSON was well-formed but lacked an expected field.
    #[error("response is missing expected field `{0}`")]
    MissingField(&'static str),

    /// The bulk city-list payload was not valid gzip data.
    #[error("failed to decompress city list: {0}")]
    Decompression(#[source] std::io::Error),
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multi-byte text cannot panic the slice.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_display_mentions_status_and_body() {
        let err = WeatherError::HttpStatus {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"cod":401,"message":"Invalid API key"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Invalid API key"));
    }

    #[test]
    fn http_status_display_truncates_long_bodies() {
        let err = WeatherError::HttpStatus {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "x".repeat(1000),
        };
        let msg = err.to_string();
        assert!(msg.ends_with("..."));
        assert!(msg.len() < 300);
    }

    #[test]
    fn http_status_display_truncates_multibyte_bodies_on_char_boundary() {
        // 100 three-byte characters: byte 200 falls inside a character.
        let err = WeatherError::HttpStatus {
            status: StatusCode::BAD_GATEWAY,
            body: "€".repeat(100),
        };
        let msg = err.to_string();
        assert!(msg.ends_with("..."));
        assert!(msg.contains('€'));
    }

    #[test]
    fn missing_field_display_names_the_field() {
        let err = WeatherError::MissingField("main.temp");
        assert!(err.to_string().contains("main.temp"));
    }
}
