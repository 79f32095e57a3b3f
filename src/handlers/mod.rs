pub mod schools;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── HTML list page and its page-size switch ──
    cfg.route("/", web::get().to(schools::index));
    cfg.route("/resize", web::get().to(schools::resize));

    // ── JSON view model ──
    cfg.service(web::scope("/api").route("/schools", web::get().to(schools::list_schools)));
}
