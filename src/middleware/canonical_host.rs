use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpResponse};
use futures::future::{LocalBoxFuture, Ready, ready};
use tracing_batteries::prelude::*;

use crate::models::CanonicalOrigin;
use crate::utils::has_file_extension;

/// Path prefixes that bypass normalization entirely: API calls and static
/// assets are addressed as-is and never redirected.
const SKIP_PREFIXES: &[&str] = &["/api/", "/static/"];

#[derive(Debug, PartialEq, Eq)]
pub enum Disposition {
    Redirect(String),
    Pass,
}

/// The normalizer's decision for one inbound request.
///
/// Rules are evaluated in order, first match wins; every redirect is a 301
/// so clients and crawlers consolidate onto the canonical origin.
pub fn disposition(
    origin: &CanonicalOrigin,
    host: &str,
    scheme: &str,
    path: &str,
    query: &str,
) -> Disposition {
    if SKIP_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return Disposition::Pass;
    }

    let suffix = if query.is_empty() {
        String::new()
    } else {
        format!("?{query}")
    };

    // Bare domain: one hop onto https + the preferred host.
    if host == origin.bare_host {
        return Disposition::Redirect(format!(
            "https://{}{}{}",
            origin.preferred_host, path, suffix
        ));
    }

    // Preferred host reached over plaintext (behind the terminating proxy).
    if host == origin.preferred_host && scheme == "http" {
        return Disposition::Redirect(format!(
            "https://{}{}{}",
            origin.preferred_host, path, suffix
        ));
    }

    // Directory-style paths end with a separator; file-like paths pass.
    if (host == origin.preferred_host || CanonicalOrigin::is_local_host(host))
        && !path.ends_with('/')
        && !has_file_extension(path)
    {
        return Disposition::Redirect(format!("{path}/{suffix}"));
    }

    Disposition::Pass
}

/// Middleware guaranteeing that every request reaching a page handler is
/// already in canonical host, protocol and trailing-slash form.
pub struct CanonicalHost {
    origin: CanonicalOrigin,
}

impl CanonicalHost {
    pub fn new(origin: CanonicalOrigin) -> Self {
        Self { origin }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CanonicalHost
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CanonicalHostMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CanonicalHostMiddleware {
            service,
            origin: self.origin.clone(),
        }))
    }
}

pub struct CanonicalHostMiddleware<S> {
    service: S,
    origin: CanonicalOrigin,
}

impl<S, B> Service<ServiceRequest> for CanonicalHostMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let conn = req.connection_info().clone();

        match disposition(
            &self.origin,
            conn.host(),
            conn.scheme(),
            req.path(),
            req.query_string(),
        ) {
            Disposition::Redirect(location) => {
                debug!({ http.location = %location }, "Redirecting to canonical form");

                let (request, _) = req.into_parts();
                let response = HttpResponse::MovedPermanently()
                    .insert_header((header::LOCATION, location))
                    .finish()
                    .map_into_right_body();

                Box::pin(ready(Ok(ServiceResponse::new(request, response))))
            }
            Disposition::Pass => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(|res| res.map_into_left_body()) })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::STATIC_ROUTES;
    use crate::utils::canonical_url;
    use actix_web::http::StatusCode;
    use actix_web::{App, web};

    fn origin() -> CanonicalOrigin {
        CanonicalOrigin::new("pestcontrol99.com")
    }

    fn redirect(host: &str, scheme: &str, path: &str, query: &str) -> Option<String> {
        match disposition(&origin(), host, scheme, path, query) {
            Disposition::Redirect(location) => Some(location),
            Disposition::Pass => None,
        }
    }

    #[test]
    fn bare_host_is_rewritten_in_one_hop() {
        assert_eq!(
            redirect("pestcontrol99.com", "http", "/services", ""),
            Some("https://www.pestcontrol99.com/services".to_string())
        );
        assert_eq!(
            redirect("pestcontrol99.com", "https", "/blog/ants/", "ref=ad"),
            Some("https://www.pestcontrol99.com/blog/ants/?ref=ad".to_string())
        );
    }

    #[test]
    fn plaintext_on_preferred_host_is_upgraded() {
        assert_eq!(
            redirect("www.pestcontrol99.com", "http", "/contact/", ""),
            Some("https://www.pestcontrol99.com/contact/".to_string())
        );
    }

    #[test]
    fn trailing_slash_is_appended_with_query_preserved() {
        assert_eq!(
            redirect("www.pestcontrol99.com", "https", "/services", "city=pune"),
            Some("/services/?city=pune".to_string())
        );
        assert_eq!(
            redirect("localhost:8000", "http", "/quote", ""),
            Some("/quote/".to_string())
        );
    }

    #[test]
    fn file_like_paths_pass_through() {
        assert_eq!(redirect("www.pestcontrol99.com", "https", "/favicon.ico", ""), None);
        assert_eq!(redirect("www.pestcontrol99.com", "https", "/sitemap.xml", ""), None);
    }

    #[test]
    fn canonical_paths_pass_through() {
        assert_eq!(redirect("www.pestcontrol99.com", "https", "/", ""), None);
        assert_eq!(redirect("www.pestcontrol99.com", "https", "/services/", ""), None);
    }

    #[test]
    fn excluded_namespaces_bypass_the_normalizer() {
        assert_eq!(redirect("pestcontrol99.com", "http", "/api/health", ""), None);
        assert_eq!(redirect("www.pestcontrol99.com", "http", "/static/site.css", ""), None);
    }

    #[test]
    fn unknown_hosts_are_left_alone() {
        assert_eq!(redirect("staging.pestcontrol99.com", "https", "/services", ""), None);
    }

    // Shared invariant: every canonical URL the metadata generator can emit
    // is accepted by the normalizer without rewriting.
    #[test]
    fn generated_canonical_urls_are_accepted() {
        let origin = origin();
        let base = origin.base_url();

        let mut paths: Vec<String> = STATIC_ROUTES.iter().map(|r| r.path.to_string()).collect();
        paths.push("/blog/ant-control-guide/".to_string());
        paths.push("/static/og-card.gif".to_string());

        for path in paths {
            let canonical = canonical_url(&base, &path);
            let canonical_path = canonical.trim_start_matches(&base);
            let canonical_path = if canonical_path.is_empty() {
                "/"
            } else {
                canonical_path
            };

            assert_eq!(
                disposition(&origin, &origin.preferred_host, "https", canonical_path, ""),
                Disposition::Pass,
                "canonical URL {canonical} would be rewritten"
            );
        }
    }

    async fn test_app(
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = Error,
    > {
        actix_web::test::init_service(
            App::new().wrap(CanonicalHost::new(origin())).default_service(
                web::to(|| async { HttpResponse::Ok().body("page") }),
            ),
        )
        .await
    }

    #[actix_rt::test]
    async fn bare_host_request_gets_a_permanent_redirect() {
        let app = test_app().await;

        let req = actix_web::test::TestRequest::with_uri("/services")
            .insert_header(("Host", "pestcontrol99.com"))
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "https://www.pestcontrol99.com/services"
        );

        // Following the hop lands on the preferred host, which then gets the
        // trailing-slash normalization; the chain ends fully canonical.
        let req = actix_web::test::TestRequest::with_uri("/services")
            .insert_header(("Host", "www.pestcontrol99.com"))
            .insert_header(("X-Forwarded-Proto", "https"))
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/services/");
    }

    #[actix_rt::test]
    async fn forwarded_plaintext_is_upgraded() {
        let app = test_app().await;

        let req = actix_web::test::TestRequest::with_uri("/contact/")
            .insert_header(("Host", "www.pestcontrol99.com"))
            .insert_header(("X-Forwarded-Proto", "http"))
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "https://www.pestcontrol99.com/contact/"
        );
    }

    #[actix_rt::test]
    async fn canonical_requests_reach_the_handler() {
        let app = test_app().await;

        let req = actix_web::test::TestRequest::with_uri("/favicon.ico")
            .insert_header(("Host", "www.pestcontrol99.com"))
            .insert_header(("X-Forwarded-Proto", "https"))
            .to_request();
        let resp = actix_web::test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
