#[macro_use]
mod macros;

mod assets;
mod error;
mod health;
mod inquiries;
mod pages;
mod seo;


use actix_web::web;

pub use error::APIError;

pub fn configure(cfg: &mut web::ServiceConfig) {
    assets::configure(cfg);
    health::configure(cfg);
    inquiries::configure(cfg);
    pages::configure(cfg);
    seo::configure(cfg);
}
