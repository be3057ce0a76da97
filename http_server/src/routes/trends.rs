use std::collections::BTreeMap;

use actix_web::web;
use chrono::NaiveDate;

use crate::app_container::Application;
use crate::errors::ApiError;

/// Outage counts per calendar date, ascending.
async fn trends(app: web::Data<Application>) -> Result<web::Json<BTreeMap<NaiveDate, u64>>, ApiError> {
    let table = app.snapshot().await;
    if table.is_empty() {
        return Err(ApiError::NoData);
    }
    Ok(web::Json(outage_analysis::daily_trend(&table)))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/trends").service(web::resource("").route(web::get().to(trends))));
}
