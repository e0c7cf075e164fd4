use serde::{Deserialize, Serialize};

/// Request body of a GraphQL POST.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GraphQLRequest<V> {
    pub query: String,
    pub variables: V,
}

/// A GraphQL reply; `data` and `errors` may both be set.
#[derive(Debug, Deserialize, Clone)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl<T> GraphQLResponse<T> {
    /// The error list when it is non-empty. Errors win over data.
    pub fn errors(&self) -> Option<&[GraphQLError]> {
        self.errors.as_deref().filter(|errors| !errors.is_empty())
    }
}

/// Error envelope body, shared by the proxy's own failures.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorEnvelope {
    pub errors: Vec<GraphQLError>,
}

impl ErrorEnvelope {
    pub fn single(message: impl Into<String>, details: Option<String>) -> Self {
        ErrorEnvelope {
            errors: vec![GraphQLError {
                message: message.into(),
                details,
            }],
        }
    }
}
