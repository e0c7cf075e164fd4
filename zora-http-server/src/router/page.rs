use actix_web::{
    get,
    http::header::{self, ContentType},
    post, web, HttpRequest, HttpResponse, Responder,
};
use serde::Deserialize;
use zora_lib::{
    core::{
        locale::Locale,
        lookup::{AllocationLookup, LookupView},
        page::render_page,
    },
    external_services::{proxy::ForwarderTransport, zora::ZoraForwarder},
    parsers::parse_accept_language,
};

#[derive(Deserialize, Debug)]
pub struct LookupForm {
    #[serde(default)]
    address: String,
}

fn request_locale(req: &HttpRequest, fallback: Locale) -> Locale {
    req.headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_accept_language)
        .unwrap_or(fallback)
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

/// The lookup page with an empty form.
#[get("/")]
pub async fn index(req: HttpRequest, default_locale: web::Data<Locale>) -> impl Responder {
    let locale = request_locale(&req, *default_locale.get_ref());
    html(render_page(&LookupView::idle(locale)))
}

/// Form submission: one lookup against the in-process proxy forwarder, then
/// the page in its settled state.
#[post("/")]
pub async fn submit(
    req: HttpRequest,
    form: web::Form<LookupForm>,
    forwarder: web::Data<ZoraForwarder>,
    default_locale: web::Data<Locale>,
) -> impl Responder {
    let locale = request_locale(&req, *default_locale.get_ref());
    let transport = ForwarderTransport::new(forwarder.get_ref().clone());

    let mut lookup = AllocationLookup::new(transport, locale);
    lookup.set_address(form.into_inner().address);
    let state = lookup.lookup().await;
    log::debug!("Lookup settled in {:?}", state);

    html(render_page(&lookup.view()))
}
