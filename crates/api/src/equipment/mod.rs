mod create_equipment;
mod delete_equipment;
mod equipment_analytics;
mod get_equipment;
mod list_equipment;
mod update_equipment;

use actix_web::web;
use create_equipment::create_equipment_controller;
use delete_equipment::delete_equipment_controller;
use equipment_analytics::equipment_analytics_controller;
use get_equipment::get_equipment_controller;
use list_equipment::list_equipment_controller;
use update_equipment::update_equipment_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/equipment", web::get().to(list_equipment_controller));
    cfg.route("/equipment", web::post().to(create_equipment_controller));
    cfg.route(
        "/equipment/analytics",
        web::get().to(equipment_analytics_controller),
    );
    cfg.route(
        "/equipment/{equipment_id}",
        web::get().to(get_equipment_controller),
    );
    cfg.route(
        "/equipment/{equipment_id}",
        web::put().to(update_equipment_controller),
    );
    cfg.route(
        "/equipment/{equipment_id}",
        web::delete().to(delete_equipment_controller),
    );
}
