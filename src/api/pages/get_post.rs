use actix_web::http::StatusCode;
use actix_web::{HttpRequest, get, web};
use html_escape::encode_text;
use tracing_batteries::prelude::*;

use super::render::RenderedPage;
use crate::api::APIError;
use crate::models::*;
use crate::telemetry::TraceMessageExt;
use crate::utils::clean_text;

#[tracing::instrument(skip(state), fields(otel.kind = "internal"))]
#[get("/blog/{slug}/")]
pub async fn get_post(req: HttpRequest, state: web::Data<GlobalState>) -> RenderedPage {
    let slug = req.match_info().query("slug").to_string();
    let path = format!("/blog/{slug}/");
    let origin = &state.config.origin;

    let outcome = match state.store.send(GetPost { slug }.trace()).await {
        Ok(result) => result,
        Err(err) => Err(APIError::from(err)),
    };

    match outcome {
        Ok(Some(post)) => {
            let metadata = PageMetadata::for_post(origin, &post);
            RenderedPage::ok(metadata, post_body(&post))
        }
        Ok(None) => RenderedPage::with_status(
            StatusCode::NOT_FOUND,
            PageMetadata::fallback(origin, &path, FallbackReason::NotFound),
            "<h1>Article not found</h1>\n<p>This article is no longer available.</p>".to_string(),
        ),
        Err(err) => {
            // Metadata is supplementary; an upstream failure never aborts
            // page rendering.
            warn!({ exception.message = %err }, "Serving generic metadata for a blog page");

            RenderedPage::with_status(
                StatusCode::OK,
                PageMetadata::fallback(origin, &path, FallbackReason::Unavailable),
                "<h1>Our blog</h1>\n<p>This article is temporarily unavailable.</p>".to_string(),
            )
        }
    }
}

fn post_body(post: &Post) -> String {
    let mut byline = String::new();
    if let Some(author) = post.author_name() {
        byline.push_str("By ");
        byline.push_str(&encode_text(author));
    }
    if let Some(date) = post.date.as_deref() {
        if !byline.is_empty() {
            byline.push_str(" · ");
        }
        byline.push_str(&encode_text(date));
    }

    format!(
        "<article>\n<h1>{}</h1>\n<p class=\"byline\">{byline}</p>\n{}\n</article>",
        encode_text(&clean_text(&post.title.rendered)),
        post.content.rendered
    )
}

#[cfg(test)]
mod tests {
    use crate::api::test::*;
    use crate::models::*;

    #[actix_rt::test]
    async fn known_slug_renders_decoded_content_metadata() {
        test_log_init();

        test_state!(
            state = [SeedPost {
                post: Post::sample(
                    "ant-control-guide",
                    "Ants &#038; You",
                    "<p>Keeping ants out of your kitchen, one bait at a time.</p>"
                )
            }]
        );

        let html: String =
            test_request!(GET "/blog/ant-control-guide/" => OK with text | state = state);

        assert!(html.contains("<title>Ants &amp; You | Pest Control 99</title>"));
        assert!(!html.contains("&#038;"), "raw entity codes must not survive");
        assert!(html.contains(
            "<link rel=\"canonical\" href=\"https://www.pestcontrol99.com/blog/ant-control-guide/\"/>"
        ));
        assert!(html.contains("<meta property=\"og:type\" content=\"article\"/>"));
    }

    #[actix_rt::test]
    async fn unknown_slug_falls_back_to_not_found_metadata() {
        test_log_init();

        test_state!(state = []);

        let html: String = test_request!(GET "/blog/not-a-post/" => NOT_FOUND with text | state = state);
        assert!(html.contains("<title>Article Not Found | Pest Control 99</title>"));
        assert!(html.contains(
            "<link rel=\"canonical\" href=\"https://www.pestcontrol99.com/blog/not-a-post/\"/>"
        ));
    }

    #[actix_rt::test]
    async fn upstream_outage_falls_back_to_generic_metadata() {
        test_log_init();

        test_state!(
            state = [SetUnavailable {
                unavailable: true
            }]
        );

        let html: String = test_request!(GET "/blog/any-post/" => OK with text | state = state);
        assert!(html.contains("<title>Pest Control Blog | Pest Control 99</title>"));
    }

    #[actix_rt::test]
    async fn long_excerpts_become_160_character_descriptions() {
        test_log_init();

        let excerpt = format!("<p>{}</p>", "termites ".repeat(60));
        test_state!(
            state = [SeedPost {
                post: Post::sample("termite-season", "Termite Season", &excerpt)
            }]
        );

        let html: String =
            test_request!(GET "/blog/termite-season/" => OK with text | state = state);

        let marker = "<meta name=\"description\" content=\"";
        let start = html.find(marker).expect("a description tag") + marker.len();
        let end = html[start..].find('"').expect("a closing quote") + start;
        assert_eq!(html[start..end].chars().count(), 160);
    }
}
