use actix_web::web;

mod get_post;
mod render;
mod static_page;

use crate::models::STATIC_ROUTES;

pub fn configure(cfg: &mut web::ServiceConfig) {
    for route in STATIC_ROUTES {
        cfg.service(web::resource(route.path).route(web::get().to(static_page::static_page)));
    }

    cfg.service(get_post::get_post);
}
