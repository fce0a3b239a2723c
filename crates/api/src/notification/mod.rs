mod create_notification;
pub mod generate_reminders;
mod helpers;
mod list_notifications;
mod mark_notification_read;

use actix_web::web;
use create_notification::create_notification_controller;
use generate_reminders::generate_reminders_controller;
use list_notifications::list_notifications_controller;
use mark_notification_read::mark_notification_read_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications",
        web::get().to(list_notifications_controller),
    );
    cfg.route(
        "/notifications",
        web::post().to(create_notification_controller),
    );
    cfg.route(
        "/notifications",
        web::put().to(mark_notification_read_controller),
    );
    cfg.route(
        "/cron/notifications",
        web::get().to(generate_reminders_controller),
    );
}
