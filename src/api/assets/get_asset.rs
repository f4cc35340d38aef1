use actix_web::http::header;
use actix_web::{HttpResponse, get};

static CARD: &[u8] = include_bytes!("./blank.gif");
static STYLESHEET: &str = include_str!("./site.css");

/// Image assets never change under one URL, so crawlers and browsers may
/// cache them for a year.
const IMMUTABLE_CACHE: (header::HeaderName, &str) =
    (header::CACHE_CONTROL, "public, max-age=31536000, immutable");

#[get("/favicon.ico")]
pub async fn favicon() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("image/gif")
        .insert_header(IMMUTABLE_CACHE)
        .body(CARD)
}

#[get("/static/og-card.gif")]
pub async fn og_card() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("image/gif")
        .insert_header(IMMUTABLE_CACHE)
        .body(CARD)
}

#[get("/static/site.css")]
pub async fn stylesheet() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(STYLESHEET)
}
