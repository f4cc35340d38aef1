use actix_web::web;

mod robots;
mod sitemap;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(robots::robots_txt).service(sitemap::sitemap_xml);
}
