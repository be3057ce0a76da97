use actix_web::web;
use outage_analysis::CountSeries;
use serde::Serialize;

use crate::app_container::Application;
use crate::errors::ApiError;

#[derive(Serialize)]
struct CausesResponse {
    frequent_reasons: CountSeries,
}

async fn causes(app: web::Data<Application>) -> Result<web::Json<CausesResponse>, ApiError> {
    let table = app.snapshot().await;
    if table.is_empty() {
        return Err(ApiError::NoData);
    }
    Ok(web::Json(CausesResponse {
        frequent_reasons: outage_analysis::frequent_reasons(&table, 5),
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/causes").service(web::resource("").route(web::get().to(causes))));
}
