mod end_assignment;
mod list_assignments;

use actix_web::web;
use end_assignment::end_assignment_controller;
use list_assignments::list_assignments_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/assignments", web::get().to(list_assignments_controller));
    cfg.route(
        "/assignments/{kind}/{assignment_id}/end",
        web::put().to(end_assignment_controller),
    );
}
