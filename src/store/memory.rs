use std::collections::BTreeMap;

use actix::prelude::*;

use crate::api::APIError;
use crate::models::*;
use crate::trace_handler;

/// Test stand-in for the remote collaborators: posts are seeded with
/// `SeedPost`, inquiries are recorded, and `SetUnavailable` simulates an
/// upstream outage.
pub struct MemoryStore {
    started_at: chrono::DateTime<chrono::Utc>,
    backend_name: String,
    posts: BTreeMap<String, Post>,
    inquiries: Vec<Inquiry>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new(config: &SiteConfig) -> Result<Self, APIError> {
        Ok(Self {
            started_at: chrono::Utc::now(),
            backend_name: config.backend.name.clone(),
            posts: BTreeMap::new(),
            inquiries: Vec::new(),
            unavailable: false,
        })
    }

    fn ensure_available(&self) -> Result<(), APIError> {
        if self.unavailable {
            Err(APIError::new(
                502,
                "Bad Gateway",
                "The content service is currently unavailable.",
            ))
        } else {
            Ok(())
        }
    }
}

impl Actor for MemoryStore {
    type Context = Context<Self>;
}

trace_handler!(MemoryStore, GetHealth, Result<Health, APIError>);

impl Handler<GetHealth> for MemoryStore {
    type Result = Result<Health, APIError>;

    fn handle(&mut self, _: GetHealth, _: &mut Self::Context) -> Self::Result {
        Ok(Health {
            ok: true,
            started_at: self.started_at,
        })
    }
}

trace_handler!(MemoryStore, GetPost, Result<Option<Post>, APIError>);

impl Handler<GetPost> for MemoryStore {
    type Result = Result<Option<Post>, APIError>;

    fn handle(&mut self, msg: GetPost, _: &mut Self::Context) -> Self::Result {
        self.ensure_available()?;
        Ok(self.posts.get(&msg.slug).cloned())
    }
}

trace_handler!(MemoryStore, SubmitInquiry, Result<InquiryReceipt, APIError>);

impl Handler<SubmitInquiry> for MemoryStore {
    type Result = Result<InquiryReceipt, APIError>;

    fn handle(&mut self, msg: SubmitInquiry, _: &mut Self::Context) -> Self::Result {
        self.ensure_available()?;
        self.inquiries.push(msg.inquiry);

        Ok(InquiryReceipt {
            backend: self.backend_name.clone(),
        })
    }
}

impl Handler<SeedPost> for MemoryStore {
    type Result = Result<Post, APIError>;

    fn handle(&mut self, msg: SeedPost, _: &mut Self::Context) -> Self::Result {
        self.posts.insert(msg.post.slug.clone(), msg.post.clone());
        Ok(msg.post)
    }
}

impl Handler<SetUnavailable> for MemoryStore {
    type Result = Result<(), APIError>;

    fn handle(&mut self, msg: SetUnavailable, _: &mut Self::Context) -> Self::Result {
        self.unavailable = msg.unavailable;
        Ok(())
    }
}

impl Handler<GetInquiries> for MemoryStore {
    type Result = Result<Vec<Inquiry>, APIError>;

    fn handle(&mut self, _: GetInquiries, _: &mut Self::Context) -> Self::Result {
        Ok(self.inquiries.clone())
    }
}
