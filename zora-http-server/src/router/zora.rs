use actix_web::{http::StatusCode, post, web, HttpResponse};
use zora_lib::{error::ForwardError, external_services::zora::ZoraForwarder};

/// Same-origin proxy to the Zora GraphQL API.
///
/// # Returns
/// The upstream's status and JSON body unchanged. When the incoming body is
/// not JSON, the upstream cannot be reached, or its reply is not JSON, a 500
/// with `{"errors": [{"message", "details"}]}`.
///
/// # Example
/// ```plaintext
/// curl -X POST http://localhost:8080/api/zora \
///   -H 'Content-Type: application/json' \
///   -d '{"query": "query GetZoraTokenAllocation($address: [String!]!) { ... }",
///        "variables": {"address": ["0x000000000000000000000000000000000000dEaD"]}}'
/// ```
///
/// # Response
/// ```
/// {
///   "data": {"zoraTokenAllocation": {"totalTokensEarned": {"totalTokens": 0}}}
/// }
/// ```
#[post("/api/zora")]
pub async fn proxy(
    forwarder: web::Data<ZoraForwarder>,
    body: web::Bytes,
) -> Result<HttpResponse, ForwardError> {
    match forwarder.forward_raw(&body).await {
        Ok(reply) => {
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            Ok(HttpResponse::build(status).json(reply.body))
        }
        Err(e) => {
            log::error!("API Route (Proxy) error: {}", e);
            Err(e)
        }
    }
}
