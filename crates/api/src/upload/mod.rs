mod delete_file;
mod list_files;
mod upload_files;

use actix_web::web;
use delete_file::delete_file_controller;
use list_files::list_files_controller;
use upload_files::upload_files_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/upload", web::post().to(upload_files_controller));
    cfg.route("/upload", web::get().to(list_files_controller));
    cfg.route("/upload", web::delete().to(delete_file_controller));
}
