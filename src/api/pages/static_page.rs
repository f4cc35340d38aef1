use actix_web::{HttpRequest, web};
use html_escape::encode_text;
use tracing_batteries::prelude::*;

use super::render::RenderedPage;
use crate::api::APIError;
use crate::models::*;

#[tracing::instrument(err, skip(state), fields(otel.kind = "internal"))]
pub async fn static_page(
    req: HttpRequest,
    state: web::Data<GlobalState>,
) -> Result<RenderedPage, APIError> {
    let route = find_static_route(req.path()).ok_or_else(|| {
        APIError::new(
            404,
            "Not Found",
            "The page you requested could not be found.",
        )
    })?;

    let metadata = PageMetadata::for_static(&state.config.origin, route);
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>",
        encode_text(route.title),
        encode_text(route.description)
    );

    Ok(RenderedPage::ok(metadata, body))
}

#[cfg(test)]
mod tests {
    use crate::api::test::*;

    #[actix_rt::test]
    async fn home_page_canonical_is_the_bare_origin() {
        test_log_init();

        test_state!(state = []);

        let html: String = test_request!(GET "/" => OK with text | state = state);
        assert!(html.contains("<link rel=\"canonical\" href=\"https://www.pestcontrol99.com\"/>"));
        assert!(html.contains("<title>Pest Control 99 | Professional Pest Control Services</title>"));
    }

    #[actix_rt::test]
    async fn every_response_carries_the_security_headers() {
        test_log_init();

        test_state!(state = []);

        let response = test_request!(GET "/" => OK | state = state);
        for (name, value) in [
            ("X-Frame-Options", "DENY"),
            ("X-Content-Type-Options", "nosniff"),
            ("Referrer-Policy", "origin-when-cross-origin"),
            ("X-DNS-Prefetch-Control", "on"),
        ] {
            assert_eq!(
                response.headers().get(name).and_then(|v| v.to_str().ok()),
                Some(value),
                "wrong or missing {name} header"
            );
        }
    }

    #[actix_rt::test]
    async fn static_pages_carry_their_declared_metadata() {
        test_log_init();

        test_state!(state = []);

        let html: String = test_request!(GET "/services/" => OK with text | state = state);
        assert!(html.contains(
            "<link rel=\"canonical\" href=\"https://www.pestcontrol99.com/services/\"/>"
        ));
        assert!(html.contains("<title>Our Services | Pest Control 99</title>"));
        assert!(html.contains("<meta name=\"keywords\""));
    }
}
