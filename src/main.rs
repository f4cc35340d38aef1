extern crate actix_web;
extern crate chrono;
#[macro_use]
extern crate serde;
extern crate serde_json;

use actix_cors::Cors;
use clap::Parser;
use tracing_batteries::{OpenTelemetry, Sentry, Session, prelude::*};

#[macro_use]
mod macros;

mod api;
mod middleware;
mod models;
mod store;
mod telemetry;
mod utils;

use actix_web::{App, HttpServer};
use telemetry::TracingLogger;

/// Marketing site server for Pest Control 99: canonical-origin enforcement,
/// SEO metadata for static and blog pages, and a thin lead-inquiry proxy.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The bare canonical domain; pages are served from `www.` + this value
    /// and every other host variant is permanently redirected there.
    #[arg(short, long, default_value = "pestcontrol99.com", env = "DOMAIN")]
    domain: String,

    /// The port to listen for incoming requests on.
    #[arg(short, long, default_value_t = 8000, env = "PORT")]
    port: u16,

    /// Base URL of the WordPress REST API serving the blog content.
    #[arg(
        long,
        default_value = "https://blog.pestcontrol99.com/wp-json/wp/v2",
        env = "CONTENT_API"
    )]
    content_api: String,

    /// Explicit CRM backend base URL, overriding backend selection.
    #[arg(long, env = "BACKEND_URL")]
    backend_url: Option<String>,

    /// Send lead inquiries to the local development CRM backend.
    #[arg(long, env = "LOCAL_BACKEND")]
    local_backend: bool,

    /// The name of the service which will be reported to OpenTelemetry endpoints.
    #[arg(long, env = "SERVICE_NAME", default_value = "pest99-web")]
    service_name: String,

    /// The Sentry DSN to use for error reporting.
    #[arg(long, env = "SENTRY_DSN")]
    sentry_dsn: Option<String>,

    /// The environment to report to Sentry.
    #[arg(long, env = "SENTRY_ENVIRONMENT")]
    sentry_environment: Option<String>,
}

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let session = Session::new(args.service_name, version!("v"))
        .with_battery(Sentry::new((
            args.sentry_dsn.unwrap_or_default(),
            sentry::ClientOptions {
                environment: args.sentry_environment.map(|v| v.into()),
                ..Default::default()
            },
        )))
        .with_battery(OpenTelemetry::new(""));

    let config = models::SiteConfig {
        origin: models::CanonicalOrigin::new(&args.domain),
        content_api: args.content_api,
        backend: models::Backend::resolve(args.backend_url, args.local_backend),
    };
    info!(
        "Lead inquiries will be forwarded to the {} backend at {}",
        config.backend.name, config.backend.url
    );

    let state = models::GlobalState::new(config).map_err(|e| {
        eprintln!("Failed to initialize the collaborator store: {e}");
        session.record_error(&e);

        std::io::ErrorKind::Other
    })?;

    info!("Starting server on :{}", args.port);
    let port = args.port;
    let result = HttpServer::new(move || {
        App::new()
            .app_data(actix_web::web::Data::new(state.clone()))
            .wrap(middleware::CanonicalHost::new(state.config.origin.clone()))
            .wrap(middleware::security_headers())
            .wrap(TracingLogger)
            .wrap(Cors::default().allow_any_origin().send_wildcard())
            .configure(api::configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
    .map_err(|err| {
        error!("The server exited unexpectedly: {}", err);
        sentry::capture_event(sentry::protocol::Event {
            message: Some(format!("Server Exited Unexpectedly: {}", err)),
            level: sentry::protocol::Level::Fatal,
            ..Default::default()
        });

        err
    });

    session.shutdown();
    result
}
