use actix_web::web;
use outage_analysis::CountSeries;
use serde::Serialize;

use crate::app_container::Application;
use crate::errors::ApiError;

#[derive(Serialize)]
struct StatusDistributionResponse {
    status_distribution: CountSeries,
}

async fn status_distribution(
    app: web::Data<Application>,
) -> Result<web::Json<StatusDistributionResponse>, ApiError> {
    let table = app.snapshot().await;
    if table.is_empty() {
        return Err(ApiError::NoData);
    }
    Ok(web::Json(StatusDistributionResponse {
        status_distribution: outage_analysis::status_distribution(&table),
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/status-distribution")
            .service(web::resource("").route(web::get().to(status_distribution))),
    );
}
