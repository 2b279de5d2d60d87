use crate::error::HandlerError;

pub const GRAPHQL_API_ID: &str = "GRAPHQL_API_ID";
pub const REQUIRE_AUTHORIZATION: &str = "REQUIRE_AUTHORIZATION";
pub const INCLUDE_GRAPHQL_URL: &str = "INCLUDE_GRAPHQL_URL";
pub const INCLUDE_DESCRIPTOR: &str = "INCLUDE_DESCRIPTOR";

/// Settings read once at cold start and shared by every invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub graphql_api_id: String,
    /// Reject requests without an `Authorization` header
    pub require_authorization: bool,
    /// Surface `graphqlApi.uris.GRAPHQL` as `graphql_url`
    pub include_graphql_url: bool,
    /// Return the whole API descriptor under `descriptor`
    pub include_descriptor: bool,
}

impl Config {
    pub fn new(graphql_api_id: impl Into<String>) -> Self {
        Self {
            graphql_api_id: graphql_api_id.into(),
            require_authorization: false,
            include_graphql_url: true,
            include_descriptor: false,
        }
    }

    pub fn from_env() -> Result<Self, HandlerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, so callers other than the
    /// process environment (tests, mostly) can supply values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HandlerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let graphql_api_id = lookup(GRAPHQL_API_ID)
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| HandlerError::Configuration(format!("{} must be set", GRAPHQL_API_ID)))?;

        let defaults = Self::new(graphql_api_id);

        Ok(Self {
            require_authorization: parse_flag(
                REQUIRE_AUTHORIZATION,
                lookup(REQUIRE_AUTHORIZATION),
                defaults.require_authorization,
            )?,
            include_graphql_url: parse_flag(
                INCLUDE_GRAPHQL_URL,
                lookup(INCLUDE_GRAPHQL_URL),
                defaults.include_graphql_url,
            )?,
            include_descriptor: parse_flag(
                INCLUDE_DESCRIPTOR,
                lookup(INCLUDE_DESCRIPTOR),
                defaults.include_descriptor,
            )?,
            ..defaults
        })
    }
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> Result<bool, HandlerError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(HandlerError::Configuration(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
