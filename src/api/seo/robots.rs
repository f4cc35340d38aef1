use actix_web::{HttpResponse, get, web};

use crate::models::GlobalState;

/// Crawl policy: administrative and API namespaces are off limits, and the
/// sitemap is advertised on the canonical origin.
const DISALLOWED_PREFIXES: &[&str] = &["/api/", "/wp-admin/"];

#[get("/robots.txt")]
pub async fn robots_txt(state: web::Data<GlobalState>) -> HttpResponse {
    let mut body = String::from("User-agent: *\n");
    for prefix in DISALLOWED_PREFIXES {
        body.push_str(&format!("Disallow: {prefix}\n"));
    }
    body.push_str(&format!(
        "\nSitemap: {}/sitemap.xml\n",
        state.config.origin.base_url()
    ));

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(body)
}
