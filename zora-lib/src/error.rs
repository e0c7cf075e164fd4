use std::fmt::Display;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::{
    core::locale::Locale,
    models::graphql::ErrorEnvelope,
    parsers::AddressError,
};

/// Envelope message returned whenever the proxy itself fails.
pub const PROXY_ERROR_MESSAGE: &str = "Token bilgisi alınırken proxy hatası oluştu.";

/// Failures of the proxy forwarder. Every variant is answered with a 500 and
/// the fixed error envelope.
#[derive(Debug)]
pub enum ForwardError {
    ClientBuild(reqwest::Error),
    RequestBody(serde_json::Error),
    Request(reqwest::Error),
    UpstreamBody(String),
}

impl Display for ForwardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForwardError::ClientBuild(e) => write!(f, "Failed to build upstream client: {}", e),
            ForwardError::RequestBody(e) => write!(f, "Request body is not valid JSON: {}", e),
            ForwardError::Request(e) => write!(f, "Upstream request failed: {}", e),
            ForwardError::UpstreamBody(e) => write!(f, "Upstream body is not valid JSON: {}", e),
        }
    }
}

impl std::error::Error for ForwardError {}

impl ForwardError {
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::single(PROXY_ERROR_MESSAGE, Some(self.to_string()))
    }
}

impl ResponseError for ForwardError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.envelope())
    }
}

/// Failure to talk to the proxy at all.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    Client(String),
    Request(String),
}

impl Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Client(e) => write!(f, "{}", e),
            TransportError::Request(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TransportError {}

/// Everything that can end a lookup in the error state.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    InvalidAddress(AddressError),
    UpstreamHttp { status: u16, message: Option<String> },
    UpstreamGraphQL(Option<String>),
    Network(String),
    MalformedResponse(String),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::InvalidAddress(e) => write!(f, "InvalidAddress: {}", e),
            LookupError::UpstreamHttp { status, message } => match message {
                Some(message) => write!(f, "UpstreamHttp: {} ({})", status, message),
                None => write!(f, "UpstreamHttp: {}", status),
            },
            LookupError::UpstreamGraphQL(message) => {
                write!(f, "UpstreamGraphQL: {}", message.as_deref().unwrap_or("-"))
            }
            LookupError::Network(e) => write!(f, "Network: {}", e),
            LookupError::MalformedResponse(e) => write!(f, "MalformedResponse: {}", e),
        }
    }
}

impl std::error::Error for LookupError {}

impl LookupError {
    /// The single line shown in the error panel.
    pub fn user_message(&self, locale: Locale) -> String {
        let messages = locale.messages();
        match self {
            LookupError::InvalidAddress(AddressError::Empty) => messages.empty_address.to_string(),
            LookupError::InvalidAddress(AddressError::Malformed(_)) => {
                messages.invalid_address.to_string()
            }
            LookupError::UpstreamHttp {
                message: Some(message),
                ..
            } => message.clone(),
            LookupError::UpstreamHttp {
                status,
                message: None,
            } => format!("{} {}", messages.request_failed, status),
            LookupError::UpstreamGraphQL(message) => format!(
                "{} {}",
                messages.graphql_prefix,
                message.as_deref().unwrap_or(messages.unknown_graphql_error)
            ),
            LookupError::Network(e) if !e.trim().is_empty() => e.clone(),
            LookupError::Network(_) | LookupError::MalformedResponse(_) => {
                messages.unexpected_error.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn forward_error_renders_fixed_envelope() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let error = ForwardError::RequestBody(parse_error);

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let envelope: ErrorEnvelope = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope.errors.len(), 1);
        assert_eq!(envelope.errors[0].message, PROXY_ERROR_MESSAGE);
        assert!(envelope.errors[0]
            .details
            .as_deref()
            .unwrap()
            .starts_with("Request body is not valid JSON"));
    }

    #[test]
    fn user_messages_follow_fallback_order() {
        let relayed = LookupError::UpstreamHttp {
            status: 503,
            message: Some("maintenance".to_string()),
        };
        assert_eq!(relayed.user_message(Locale::Tr), "maintenance");

        let bare = LookupError::UpstreamHttp {
            status: 503,
            message: None,
        };
        assert_eq!(bare.user_message(Locale::Tr), "API isteği başarısız oldu: 503");
        assert_eq!(bare.user_message(Locale::En), "API request failed: 503");

        let network = LookupError::Network(String::new());
        assert_eq!(
            network.user_message(Locale::Tr),
            "Token bilgisi alınırken beklenmeyen bir hata oluştu."
        );
    }

    #[test]
    fn graphql_messages_are_prefixed() {
        let error = LookupError::UpstreamGraphQL(Some("boom".to_string()));
        assert_eq!(error.user_message(Locale::Tr), "GraphQL hatası: boom");

        let unknown = LookupError::UpstreamGraphQL(None);
        assert_eq!(
            unknown.user_message(Locale::Tr),
            "GraphQL hatası: Bilinmeyen GraphQL hatası (proxy'den)"
        );
    }
}
