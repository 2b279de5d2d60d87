use crate::error::HandlerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key of the GraphQL endpoint inside `uris`
pub const GRAPHQL_URI_KEY: &str = "GRAPHQL";

// ========== API DESCRIPTOR ==========
/// AppSync `GetGraphqlApi` output, in the service's own JSON shape
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql_api: Option<GraphqlApi>,
}

/// The string and string-map members of AppSync's `GraphqlApi`. Nested
/// configuration objects (log config, user pool / OIDC / Lambda authorizer
/// configs, additional auth providers) and the numeric/boolean limits are
/// not carried.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlApi {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_type: Option<String>, // API_KEY | AWS_IAM | AMAZON_COGNITO_USER_POOLS | ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<HashMap<String, String>>, // GRAPHQL | REALTIME
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_type: Option<String>, // GRAPHQL | MERGED
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>, // GLOBAL | PRIVATE
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waf_web_acl_arn: Option<String>,
}

impl ApiDescriptor {
    /// The `graphqlApi.uris.GRAPHQL` endpoint, naming the first missing level on failure
    pub fn graphql_url(&self) -> Result<&str, HandlerError> {
        let api = self
            .graphql_api
            .as_ref()
            .ok_or_else(|| HandlerError::UnexpectedResponseShape("graphqlApi".to_string()))?;
        let uris = api
            .uris
            .as_ref()
            .ok_or_else(|| HandlerError::UnexpectedResponseShape("graphqlApi.uris".to_string()))?;
        uris.get(GRAPHQL_URI_KEY)
            .map(String::as_str)
            .ok_or_else(|| {
                HandlerError::UnexpectedResponseShape(format!("graphqlApi.uris.{}", GRAPHQL_URI_KEY))
            })
    }
}

impl From<&aws_sdk_appsync::types::GraphqlApi> for GraphqlApi {
    fn from(api: &aws_sdk_appsync::types::GraphqlApi) -> Self {
        Self {
            name: api.name().map(|s| s.to_string()),
            api_id: api.api_id().map(|s| s.to_string()),
            arn: api.arn().map(|s| s.to_string()),
            authentication_type: api.authentication_type().map(|t| t.as_str().to_string()),
            uris: api.uris().cloned(),
            tags: api.tags().cloned(),
            owner: api.owner().map(|s| s.to_string()),
            owner_contact: api.owner_contact().map(|s| s.to_string()),
            dns: api.dns().cloned(),
            api_type: api.api_type().map(|t| t.as_str().to_string()),
            visibility: api.visibility().map(|v| v.as_str().to_string()),
            waf_web_acl_arn: api.waf_web_acl_arn().map(|s| s.to_string()),
        }
    }
}

// ========== RESPONSE BODY ==========
/// Success body; members the configured variant does not return are omitted
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ApiInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<ApiDescriptor>,
}
