use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{PageMetadata, SITE_NAME};

/// A rendered page: the metadata record for the head plus a body fragment.
///
/// The body markup is deliberately minimal; the metadata is the part search
/// engines and link previews consume.
pub struct RenderedPage {
    pub status: StatusCode,
    pub metadata: PageMetadata,
    pub body_html: String,
}

impl RenderedPage {
    pub fn ok(metadata: PageMetadata, body_html: String) -> Self {
        Self {
            status: StatusCode::OK,
            metadata,
            body_html,
        }
    }

    pub fn with_status(status: StatusCode, metadata: PageMetadata, body_html: String) -> Self {
        Self {
            status,
            metadata,
            body_html,
        }
    }

    fn to_html(&self) -> String {
        let meta = &self.metadata;
        let mut head = String::new();

        head.push_str(&format!("<title>{}</title>\n", encode_text(&meta.title)));
        head.push_str(&meta_name("description", &meta.description));
        head.push_str(&meta_name("keywords", &meta.keywords));
        head.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\"/>\n",
            encode_double_quoted_attribute(&meta.canonical_url)
        ));
        head.push_str(&meta_property("og:type", meta.open_graph.kind));
        head.push_str(&meta_property("og:title", &meta.title));
        head.push_str(&meta_property("og:description", &meta.description));
        head.push_str(&meta_property("og:url", &meta.canonical_url));
        head.push_str(&meta_property("og:site_name", SITE_NAME));

        if let Some(image) = &meta.open_graph.image {
            head.push_str(&meta_property("og:image", &image.url));
            head.push_str(&meta_property("og:image:alt", &image.alt));
            head.push_str(&meta_name("twitter:card", "summary_large_image"));
        }

        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
             <meta charset=\"utf-8\"/>\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n\
             {head}\
             <link rel=\"stylesheet\" href=\"/static/site.css\"/>\n\
             </head>\n<body>\n<main>\n{}\n</main>\n</body>\n</html>\n",
            self.body_html
        )
    }
}

fn meta_name(name: &str, content: &str) -> String {
    format!(
        "<meta name=\"{name}\" content=\"{}\"/>\n",
        encode_double_quoted_attribute(content)
    )
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        "<meta property=\"{property}\" content=\"{}\"/>\n",
        encode_double_quoted_attribute(content)
    )
}

impl Responder for RenderedPage {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(self.status)
            .content_type("text/html; charset=utf-8")
            .body(self.to_html())
    }
}
