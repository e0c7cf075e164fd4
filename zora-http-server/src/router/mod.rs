use actix_web::{get, web, HttpResponse, Responder};

pub mod page;
pub mod zora;

/// Return server health status
#[get("/health")]
pub async fn health() -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().body("OK"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(zora::proxy)
        .service(page::index)
        .service(page::submit);
}

#[cfg(test)]
pub(crate) mod test_support {
    use actix_web::{http::StatusCode, web, App, HttpRequest, HttpResponse, HttpServer};
    use serde_json::{json, Value};

    /// Start a throwaway upstream answering every request with `status` and
    /// the raw `body`. Returns its GraphQL url.
    pub fn spawn_upstream(status: StatusCode, body: String) -> String {
        let server = HttpServer::new(move || {
            let body = body.clone();
            App::new().default_service(web::to(move || {
                let body = body.clone();
                async move {
                    HttpResponse::build(status)
                        .content_type("application/json")
                        .body(body)
                }
            }))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock upstream");

        let address = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}/universal/graphql", address)
    }

    /// Upstream that answers with the method, content type and JSON body it
    /// received.
    pub fn spawn_echo_upstream() -> String {
        let server = HttpServer::new(|| {
            App::new().default_service(web::to(|req: HttpRequest, body: web::Bytes| async move {
                let content_type = req
                    .headers()
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let received: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
                HttpResponse::Ok().json(json!({
                    "method": req.method().as_str(),
                    "contentType": content_type,
                    "received": received,
                }))
            }))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind echo upstream");

        let address = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}/universal/graphql", address)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn health_is_ok() {
        let app = test::init_service(App::new().service(health)).await;
        let req = test::TestRequest::get().uri("/health").to_request();

        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(test::read_body(resp).await, web::Bytes::from_static(b"OK"));
    }
}
