use aws_sdk_appsync::Client as AppSyncClient;
use graphql_info_shared::{config::Config, AppState};
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Fail the init phase rather than every invocation when misconfigured
    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    // Initialize AWS clients once at startup
    let aws_config = aws_config::load_from_env().await;
    let state = AppState::new(config, Arc::new(AppSyncClient::new(&aws_config)));

    tracing::info!(
        "GraphQL info lambda ready for API {}",
        state.config.graphql_api_id
    );

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
