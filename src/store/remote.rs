use std::sync::Arc;
use std::time::Duration;

use actix::prelude::*;
use tracing_batteries::prelude::*;

use super::cache::PostCache;
use crate::api::APIError;
use crate::models::*;
use crate::trace_handler;

/// How long a slug lookup (hit or miss) is reused before the content API is
/// asked again. Content updates may take up to this long to propagate.
const POST_CACHE_TTL: Duration = Duration::from_secs(3600);

/// How many slug lookups are held at once. Beyond this the oldest entry is
/// dropped, which keeps crawls of nonexistent posts from exhausting memory.
const POST_CACHE_CAPACITY: usize = 512;

/// The production store: talks to the external content API for blog posts
/// and forwards lead inquiries to the CRM backend. No retries anywhere; a
/// failed call is terminal for its request.
pub struct RemoteStore {
    started_at: chrono::DateTime<chrono::Utc>,
    http: reqwest::Client,
    content_api: String,
    backend: Backend,
    post_cache: Arc<PostCache>,
}

impl RemoteStore {
    pub fn new(config: &SiteConfig) -> Result<Self, APIError> {
        Ok(Self {
            started_at: chrono::Utc::now(),
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()?,
            content_api: config.content_api.trim_end_matches('/').to_string(),
            backend: config.backend.clone(),
            post_cache: Arc::new(PostCache::new(POST_CACHE_TTL, POST_CACHE_CAPACITY)),
        })
    }
}

impl Actor for RemoteStore {
    type Context = Context<Self>;
}

trace_handler!(RemoteStore, GetHealth, Result<Health, APIError>);

impl Handler<GetHealth> for RemoteStore {
    type Result = Result<Health, APIError>;

    fn handle(&mut self, _: GetHealth, _: &mut Self::Context) -> Self::Result {
        Ok(Health {
            ok: true,
            started_at: self.started_at,
        })
    }
}

trace_handler!(
    RemoteStore,
    GetPost,
    ResponseFuture<Result<Option<Post>, APIError>>
);

impl Handler<GetPost> for RemoteStore {
    type Result = ResponseFuture<Result<Option<Post>, APIError>>;

    fn handle(&mut self, msg: GetPost, _: &mut Self::Context) -> Self::Result {
        if let Some(hit) = self.post_cache.get(&msg.slug) {
            return Box::pin(futures::future::ready(Ok(hit)));
        }

        let request = self
            .http
            .get(format!("{}/posts", self.content_api))
            .query(&[("slug", msg.slug.as_str()), ("_embed", "true")]);
        let cache = Arc::clone(&self.post_cache);
        let slug = msg.slug;

        Box::pin(async move {
            let response = request.send().await?;

            if !response.status().is_success() {
                error!(
                    { http.status_code = response.status().as_u16() },
                    "The content API answered with a non-success status"
                );
                return Err(APIError::new(
                    502,
                    "Bad Gateway",
                    "The content service is currently unavailable.",
                ));
            }

            let mut posts: Vec<Post> = response.json().await?;
            let post = if posts.is_empty() {
                None
            } else {
                Some(posts.remove(0))
            };

            cache.insert(slug, post.clone());

            Ok(post)
        })
    }
}

trace_handler!(
    RemoteStore,
    SubmitInquiry,
    ResponseFuture<Result<InquiryReceipt, APIError>>
);

impl Handler<SubmitInquiry> for RemoteStore {
    type Result = ResponseFuture<Result<InquiryReceipt, APIError>>;

    fn handle(&mut self, msg: SubmitInquiry, _: &mut Self::Context) -> Self::Result {
        let request = self
            .http
            .post(format!("{}/api/inquiries/", self.backend.url))
            .json(&msg.inquiry);
        let backend = self.backend.name.clone();

        Box::pin(async move {
            let response = request.send().await?;

            if response.status().is_success() {
                Ok(InquiryReceipt { backend })
            } else {
                error!(
                    { http.status_code = response.status().as_u16() },
                    "The lead backend rejected an inquiry"
                );
                Err(APIError::new(
                    502,
                    "Bad Gateway",
                    "We could not record your inquiry, please try again later.",
                ))
            }
        })
    }
}
