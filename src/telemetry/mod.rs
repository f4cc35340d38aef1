use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::{LocalBoxFuture, Ready, ready};
use tracing_batteries::prelude::*;

/// Wraps every request in a tracing span and logs its outcome.
pub struct TracingLogger;

impl<S, B> Transform<S, ServiceRequest> for TracingLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = TracingLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TracingLoggerMiddleware { service }))
    }
}

pub struct TracingLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TracingLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let span = tracing::info_span!(
            "http.request",
            otel.kind = "server",
            http.method = %req.method(),
            http.target = %req.path()
        );
        let started = Instant::now();

        let fut = {
            let _entered = span.enter();
            self.service.call(req)
        };

        Box::pin(async move {
            let res = fut.await;

            span.in_scope(|| match &res {
                Ok(response) => debug!(
                    {
                        http.status_code = response.status().as_u16(),
                        duration_ms = started.elapsed().as_millis() as u64
                    },
                    "Request completed"
                ),
                Err(err) => error!({ exception.message = %err }, "Request failed"),
            });

            res
        })
    }
}

/// A store message paired with the span it was sent from, so actor-side
/// work is attributed to the originating request.
pub struct TraceMessage<M> {
    message: M,
    span: tracing::Span,
}

impl<M> TraceMessage<M> {
    pub fn into_parts(self) -> (M, tracing::Span) {
        (self.message, self.span)
    }
}

impl<M: actix::Message> actix::Message for TraceMessage<M> {
    type Result = M::Result;
}

pub trait TraceMessageExt: actix::Message + Sized {
    fn trace(self) -> TraceMessage<Self>;
}

impl<M: actix::Message> TraceMessageExt for M {
    fn trace(self) -> TraceMessage<M> {
        TraceMessage {
            message: self,
            span: tracing::Span::current(),
        }
    }
}

/// Implements `Handler<TraceMessage<M>>` for an actor that already handles
/// `M`, entering the originating span for the synchronous part of the work.
#[macro_export]
macro_rules! trace_handler {
    ($actor:ty, $message:ty, $result:ty) => {
        impl actix::Handler<$crate::telemetry::TraceMessage<$message>> for $actor {
            type Result = $result;

            fn handle(
                &mut self,
                msg: $crate::telemetry::TraceMessage<$message>,
                ctx: &mut Self::Context,
            ) -> Self::Result {
                let (message, span) = msg.into_parts();
                let _entered = span.enter();
                <Self as actix::Handler<$message>>::handle(self, message, ctx)
            }
        }
    };
}
