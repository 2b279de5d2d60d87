use crate::error::HandlerError;
use crate::types::{ApiDescriptor, GraphqlApi};
use async_trait::async_trait;
use aws_sdk_appsync::error::DisplayErrorContext;
use aws_sdk_appsync::Client as AppSyncClient;

/// Source of GraphQL API descriptions (the AppSync control plane in production)
#[async_trait]
pub trait GraphqlApiDescriber: Send + Sync {
    async fn describe_graphql_api(&self, api_id: &str) -> Result<ApiDescriptor, HandlerError>;
}

#[async_trait]
impl GraphqlApiDescriber for AppSyncClient {
    async fn describe_graphql_api(&self, api_id: &str) -> Result<ApiDescriptor, HandlerError> {
        tracing::debug!("Fetching GraphQL API {} from AppSync", api_id);

        let output = self
            .get_graphql_api()
            .api_id(api_id)
            .send()
            .await
            .map_err(|e| HandlerError::Upstream(format!("{}", DisplayErrorContext(&e))))?;

        Ok(ApiDescriptor {
            graphql_api: output.graphql_api().map(GraphqlApi::from),
        })
    }
}
