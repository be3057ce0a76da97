use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use shared_kernel::configuration;
use shared_kernel::tracing::config_telemetry;
use tracing_actix_web::TracingLogger;
use web_page_extractor::{CnnPageFetcher, PageFetcher};

use crate::app_container::Application;

mod app_container;
mod errors;
mod routes;
mod snapshot;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config_telemetry();

    let settings = configuration::config()?;
    let fetcher: Arc<dyn PageFetcher> = Arc::new(CnnPageFetcher::new(settings.page.url.clone()));
    let application = web::Data::new(Application::new(fetcher));

    let address = settings.server.address();
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(routes::config)
            .app_data(application.clone())
    })
    .bind(&address)
    .with_context(|| format!("Failed to bind {address}"))?
    .run()
    .await
    .context("Server failed to run")
}
