use actix_web::web;

mod create_inquiry;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_inquiry::create_inquiry_v1);
}
