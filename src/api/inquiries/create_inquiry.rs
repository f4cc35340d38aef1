use crate::api::APIError;
use crate::{models::*, telemetry::TraceMessageExt};
use actix_web::{post, web};
use tracing_batteries::prelude::*;

/// Thin proxy onto the CRM backend: one forwarded call, no retries.
#[tracing::instrument(err, skip(state, inquiry), fields(otel.kind = "internal"))]
#[post("/api/inquiries/")]
pub async fn create_inquiry_v1(
    inquiry: web::Json<Inquiry>,
    state: web::Data<GlobalState>,
) -> Result<InquiryV1, APIError> {
    state
        .store
        .send(
            SubmitInquiry {
                inquiry: inquiry.into_inner(),
            }
            .trace(),
        )
        .await?
        .map(|receipt| receipt.into())
}
