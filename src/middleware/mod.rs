use actix_web::middleware::DefaultHeaders;

mod canonical_host;

pub use canonical_host::CanonicalHost;

/// The uniform security headers carried by every response the server emits.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Frame-Options", "DENY"))
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("Referrer-Policy", "origin-when-cross-origin"))
        .add(("X-DNS-Prefetch-Control", "on"))
}
