mod get_financial_summary;

use actix_web::web;
use get_financial_summary::get_financial_summary_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/financial/summary",
        web::get().to(get_financial_summary_controller),
    );
}
