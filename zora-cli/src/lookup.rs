use zora_lib::{
    core::{
        locale::Locale,
        lookup::{AllocationLookup, LookupView, Panel},
    },
    error::TransportError,
    external_services::proxy::HttpProxyTransport,
};

/// Settled view of one lookup, owned so it can outlive the lookup form.
#[derive(Debug)]
pub struct LookupOutput {
    pub panel: Panel,
}

impl From<LookupView<'_>> for LookupOutput {
    fn from(view: LookupView<'_>) -> Self {
        LookupOutput { panel: view.panel }
    }
}

/// Run a single lookup against the proxy at `proxy_url`.
pub async fn run_lookup(
    proxy_url: &str,
    address: &str,
    locale: Locale,
) -> Result<LookupOutput, TransportError> {
    let transport = HttpProxyTransport::new(proxy_url)?;
    log::info!("Looking up {} through {}", address.trim(), transport.url());

    let mut lookup = AllocationLookup::new(transport, locale);
    lookup.set_address(address);
    lookup.lookup().await;

    Ok(lookup.view().into())
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer};

    use super::*;

    const BURN_ADDRESS: &str = "0x000000000000000000000000000000000000dEaD";

    /// Local stand-in for a running server's `/api/zora` endpoint.
    fn spawn_proxy(status: StatusCode, body: &'static str) -> String {
        let server = HttpServer::new(move || {
            App::new().route(
                "/api/zora",
                web::post().to(move || async move {
                    HttpResponse::build(status)
                        .content_type("application/json")
                        .body(body)
                }),
            )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock proxy");

        let address = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}/api/zora", address)
    }

    #[actix_web::test]
    async fn malformed_address_fails_without_contacting_proxy() {
        let output = run_lookup("http://127.0.0.1:1/api/zora", "0xabc", Locale::En)
            .await
            .unwrap();

        assert_eq!(
            output.panel,
            Panel::Error("Please enter a valid Ethereum wallet address (e.g. 0x...).".to_string())
        );
    }

    #[actix_web::test]
    async fn unreachable_proxy_reports_an_error() {
        let output = run_lookup(
            "http://127.0.0.1:1/api/zora",
            BURN_ADDRESS,
            Locale::Tr,
        )
        .await
        .unwrap();

        assert!(matches!(output.panel, Panel::Error(_)));
    }

    #[actix_web::test]
    async fn reported_total_reaches_result_panel() {
        let proxy = spawn_proxy(
            StatusCode::OK,
            r#"{"data":{"zoraTokenAllocation":{"totalTokensEarned":{"totalTokens":5}}}}"#,
        );

        let output = run_lookup(&proxy, BURN_ADDRESS, Locale::Tr).await.unwrap();

        assert_eq!(output.panel, Panel::Result("5".to_string()));
    }

    #[actix_web::test]
    async fn service_unavailable_relays_upstream_message() {
        let proxy = spawn_proxy(
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"errors":[{"message":"upstream down"}]}"#,
        );

        let output = run_lookup(&proxy, BURN_ADDRESS, Locale::En).await.unwrap();

        assert_eq!(output.panel, Panel::Error("upstream down".to_string()));
    }
}
