mod assignment;
mod equipment;
mod error;
mod financial;
mod job_schedulers;
mod notification;
mod project;
mod shared;
mod status;
mod upload;
mod vehicle;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use bauhub_infra::Context;
use job_schedulers::start_reminder_job;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    assignment::configure_routes(cfg);
    equipment::configure_routes(cfg);
    financial::configure_routes(cfg);
    notification::configure_routes(cfg);
    project::configure_routes(cfg);
    status::configure_routes(cfg);
    upload::configure_routes(cfg);
    vehicle::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: Context) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: Context) {
        start_reminder_job(context);
    }

    async fn configure_server(context: Context) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr().unwrap().port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .data(ctx)
                .service(web::scope("/api/v1").configure(|cfg| configure_server_api(cfg)))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
