use crate::models::{CanonicalOrigin, Post, StaticRoute};
use crate::utils::{canonical_url, clean_text, meta_description};

pub const SITE_NAME: &str = "Pest Control 99";

/// The head-of-page record attached to every rendered response: SEO text
/// fields plus the absolute canonical URL.
///
/// Recomputed per request for dynamic routes, fixed for static ones; never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical_url: String,
    pub open_graph: OpenGraph,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OpenGraph {
    pub kind: &'static str,
    pub image: Option<OgImage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OgImage {
    pub url: String,
    pub alt: String,
}

/// Why a dynamic route fell back to generic metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    NotFound,
    Unavailable,
}

impl PageMetadata {
    pub fn for_static(origin: &CanonicalOrigin, route: &StaticRoute) -> Self {
        Self {
            title: route.title.to_string(),
            description: route.description.to_string(),
            keywords: route.keywords.to_string(),
            canonical_url: canonical_url(&origin.base_url(), route.path),
            open_graph: OpenGraph {
                kind: "website",
                image: Some(default_card(origin)),
            },
        }
    }

    /// Metadata for a content-backed page. The canonical URL comes from the
    /// route template with the slug substituted, never from the record
    /// itself.
    pub fn for_post(origin: &CanonicalOrigin, post: &Post) -> Self {
        let image = post
            .featured_image()
            .map(|media| OgImage {
                url: media.source_url.clone(),
                alt: clean_text(&media.alt_text),
            })
            .or_else(|| Some(default_card(origin)));

        Self {
            title: format!("{} | {SITE_NAME}", clean_text(&post.title.rendered)),
            description: meta_description(&post.excerpt.rendered),
            keywords: "pest control blog, pest prevention tips".to_string(),
            canonical_url: canonical_url(&origin.base_url(), &format!("/blog/{}/", post.slug)),
            open_graph: OpenGraph {
                kind: "article",
                image,
            },
        }
    }

    /// Generic metadata for a dynamic route whose content could not be
    /// resolved. Still addressed by the route's own canonical URL.
    pub fn fallback(origin: &CanonicalOrigin, path: &str, reason: FallbackReason) -> Self {
        let (title, description) = match reason {
            FallbackReason::NotFound => (
                format!("Article Not Found | {SITE_NAME}"),
                "The article you are looking for is no longer available. Browse our \
                 latest pest control guides instead."
                    .to_string(),
            ),
            FallbackReason::Unavailable => (
                format!("Pest Control Blog | {SITE_NAME}"),
                "Guides and seasonal advice from our technicians on keeping your home \
                 free of pests."
                    .to_string(),
            ),
        };

        Self {
            title,
            description,
            keywords: "pest control blog".to_string(),
            canonical_url: canonical_url(&origin.base_url(), path),
            open_graph: OpenGraph {
                kind: "website",
                image: Some(default_card(origin)),
            },
        }
    }
}

fn default_card(origin: &CanonicalOrigin) -> OgImage {
    OgImage {
        url: canonical_url(&origin.base_url(), "/static/og-card.gif"),
        alt: SITE_NAME.to_string(),
    }
}
