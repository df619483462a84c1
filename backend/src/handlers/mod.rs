use actix_web::web;

pub mod books;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(books::configure));
}
