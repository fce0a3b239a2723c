mod assign_project_resource;
mod create_project_document;
mod get_preparation_costs;
mod get_project_documents;
mod get_project_resources;

use actix_web::web;
use assign_project_resource::assign_project_resource_controller;
use create_project_document::create_project_document_controller;
use get_preparation_costs::get_preparation_costs_controller;
use get_project_documents::get_project_documents_controller;
use get_project_resources::get_project_resources_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/projects/{project_id}/documents",
        web::get().to(get_project_documents_controller),
    );
    cfg.route(
        "/projects/{project_id}/documents",
        web::post().to(create_project_document_controller),
    );
    cfg.route(
        "/projects/{project_id}/resources",
        web::get().to(get_project_resources_controller),
    );
    cfg.route(
        "/projects/{project_id}/resources",
        web::post().to(assign_project_resource_controller),
    );
    cfg.route(
        "/project-preparation/costs",
        web::get().to(get_preparation_costs_controller),
    );
}
