use lambda_http::http::StatusCode;
use serde::Serialize;

/// Everything that can go wrong while answering one invocation.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("missing required header: {0}")]
    MissingHeader(String),

    #[error("AppSync request failed: {0}")]
    Upstream(String),

    #[error("unexpected AppSync response: missing {0}")]
    UnexpectedResponseShape(String),
}

impl HandlerError {
    /// Short machine-readable tag used as the `error` member of error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerError::Configuration(_) => "ConfigurationError",
            HandlerError::MalformedInput(_) => "MalformedInput",
            HandlerError::MissingHeader(_) => "MissingHeader",
            HandlerError::Upstream(_) => "UpstreamError",
            HandlerError::UnexpectedResponseShape(_) => "UnexpectedResponseShape",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HandlerError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            HandlerError::MissingHeader(_) => StatusCode::UNAUTHORIZED,
            HandlerError::Upstream(_) | HandlerError::UnexpectedResponseShape(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    /// Message safe to hand to callers; server-side detail stays in the logs
    pub fn public_message(&self) -> String {
        match self {
            HandlerError::Configuration(_) => "internal configuration error".to_string(),
            HandlerError::Upstream(_) | HandlerError::UnexpectedResponseShape(_) => {
                "upstream service error".to_string()
            }
            HandlerError::MalformedInput(_) | HandlerError::MissingHeader(_) => self.to_string(),
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind().to_string(),
            message: self.public_message(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            HandlerError::MalformedInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HandlerError::MissingHeader("Authorization".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            HandlerError::Upstream("timeout".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            HandlerError::UnexpectedResponseShape("graphqlApi".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            HandlerError::Configuration("GRAPHQL_API_ID".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_body() {
        let err = HandlerError::MissingHeader("Authorization".to_string());
        let body = serde_json::to_value(err.to_error_response()).unwrap();

        assert_eq!(body["error"], "MissingHeader");
        assert_eq!(body["message"], "missing required header: Authorization");
    }

    #[test]
    fn test_server_error_body_hides_detail() {
        let err = HandlerError::Upstream(
            "AccessDeniedException: User: arn:aws:sts::123456789012:assumed-role/lambda-role/fn is not authorized"
                .to_string(),
        );
        let body = serde_json::to_value(err.to_error_response()).unwrap();

        assert_eq!(body["error"], "UpstreamError");
        assert_eq!(body["message"], "upstream service error");

        let err = HandlerError::Configuration("GRAPHQL_API_ID must be set".to_string());
        let body = serde_json::to_value(err.to_error_response()).unwrap();
        assert_eq!(body["message"], "internal configuration error");
    }
}
