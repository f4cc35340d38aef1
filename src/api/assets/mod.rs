use actix_web::web;

mod get_asset;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_asset::favicon)
        .service(get_asset::og_card)
        .service(get_asset::stylesheet);
}
