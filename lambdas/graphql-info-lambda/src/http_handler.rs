use graphql_info_shared::{
    error::HandlerError,
    responses::{error_response, json_response, preflight_response},
    types::ApiInfo,
    AppState,
};
use lambda_http::{
    http::{header::AUTHORIZATION, Method, StatusCode},
    Body, Error, Request, Response,
};
use std::sync::Arc;

/// Main Lambda handler - describes the configured AppSync GraphQL API
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    tracing::info!(
        "GraphQL info requested - Method: {} Path: {} API: {}",
        method,
        path,
        state.config.graphql_api_id
    );

    // Handle CORS preflight
    if method == Method::OPTIONS {
        return preflight_response();
    }

    match describe(&event, &state).await {
        Ok(info) => json_response(StatusCode::OK, &info),
        Err(e) => {
            if e.status_code().is_server_error() {
                tracing::error!("Request failed: {}", e);
            } else {
                tracing::warn!("Request rejected: {}", e);
            }
            error_response(&e)
        }
    }
}

async fn describe(event: &Request, state: &AppState) -> Result<ApiInfo, HandlerError> {
    validate_body(event.body())?;
    let auth = authorization(event, state.config.require_authorization)?;

    let descriptor = state
        .describer
        .describe_graphql_api(&state.config.graphql_api_id)
        .await?;

    let graphql_url = if state.config.include_graphql_url {
        Some(descriptor.graphql_url()?.to_string())
    } else {
        None
    };

    Ok(ApiInfo {
        graphql_url,
        auth,
        descriptor: state.config.include_descriptor.then_some(descriptor),
    })
}

/// The payload itself is unused; a non-empty body must still be JSON.
fn validate_body(body: &Body) -> Result<(), HandlerError> {
    let bytes: &[u8] = match body {
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
        Body::Empty => &[],
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(());
    }

    serde_json::from_slice::<serde_json::Value>(bytes)
        .map_err(|e| HandlerError::MalformedInput(format!("request body is not valid JSON: {}", e)))?;
    Ok(())
}

/// Authorization header, echoed verbatim and never verified
fn authorization(event: &Request, required: bool) -> Result<Option<String>, HandlerError> {
    match event.headers().get(AUTHORIZATION) {
        Some(value) => std::str::from_utf8(value.as_bytes())
            .map(|s| Some(s.to_string()))
            .map_err(|_| HandlerError::MalformedInput("Authorization header is not valid UTF-8".to_string())),
        None if required => Err(HandlerError::MissingHeader("Authorization".to_string())),
        None => Ok(None),
    }
}
