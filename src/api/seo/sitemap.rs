use actix_web::{HttpResponse, get, web};

use crate::models::{GlobalState, STATIC_ROUTES};
use crate::utils::canonical_url;

const SITEMAP_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
    <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n";
const SITEMAP_FOOTER: &str = "</urlset>\n";

/// The fixed list of canonical URLs with their crawl hints. Blog posts are
/// discovered through the blog index rather than enumerated here.
#[get("/sitemap.xml")]
pub async fn sitemap_xml(state: web::Data<GlobalState>) -> HttpResponse {
    let base = state.config.origin.base_url();
    let last_modified = chrono::Utc::now().format("%Y-%m-%d");

    let mut body = String::from(SITEMAP_HEADER);
    for route in STATIC_ROUTES {
        body.push_str(&format!(
            "<url>\
             <loc>{}</loc>\
             <lastmod>{last_modified}</lastmod>\
             <changefreq>{}</changefreq>\
             <priority>{}</priority>\
             </url>\n",
            canonical_url(&base, route.path),
            route.change_freq,
            route.priority,
        ));
    }
    body.push_str(SITEMAP_FOOTER);

    HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(body)
}
