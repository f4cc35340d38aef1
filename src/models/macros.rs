/// Declares an actor message struct together with its result type.
///
/// Every store message resolves to `Result<T, APIError>` so that handler
/// failures surface as API errors at the call site.
macro_rules! actor_message {
    ($name:ident ( $($field:ident: $type:ty),* ) -> $result:ty) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            $(pub $field: $type,)*
        }

        impl actix::Message for $name {
            type Result = Result<$result, crate::api::APIError>;
        }
    };
}

/// Implements `Responder` for a serializable view model, rendering it as
/// a JSON response body.
macro_rules! json_responder {
    ($type:ty) => {
        impl actix_web::Responder for $type {
            type Body = actix_web::body::BoxBody;

            fn respond_to(
                self,
                _req: &actix_web::HttpRequest,
            ) -> actix_web::HttpResponse<Self::Body> {
                actix_web::HttpResponse::Ok().json(&self)
            }
        }
    };
}
