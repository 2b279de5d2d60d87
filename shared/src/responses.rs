use crate::error::HandlerError;
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

pub const ALLOWED_METHODS: &str = "GET,POST,OPTIONS";

/// JSON response carrying the CORS headers every caller gets
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", "*")
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?)
}

pub fn error_response(err: &HandlerError) -> Result<Response<Body>, Error> {
    json_response(err.status_code(), &err.to_error_response())
}

/// Answer a CORS preflight
pub fn preflight_response() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", "*")
        .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
        .body(Body::Empty)
        .map_err(Box::new)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_response_headers() {
        let resp = json_response(StatusCode::OK, &json!({"graphql_url": "https://example/graphql"})).unwrap();

        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(resp.headers()["Access-Control-Allow-Headers"], "*");
        assert_eq!(resp.headers()["Content-Type"], "application/json");

        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["graphql_url"], "https://example/graphql");
    }

    #[test]
    fn test_error_response() {
        let resp = error_response(&HandlerError::MalformedInput("expected value".into())).unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");

        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["error"], "MalformedInput");
    }

    #[test]
    fn test_preflight_response() {
        let resp = preflight_response().unwrap();

        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Access-Control-Allow-Methods"], ALLOWED_METHODS);
        assert!(resp.body().is_empty());
    }
}
