use actix_web::web;
use cnn_text_parser::OutageRecord;

use crate::app_container::Application;
use crate::errors::ApiError;

/// The full cleaned record table.
async fn all_data(app: web::Data<Application>) -> Result<web::Json<Vec<OutageRecord>>, ApiError> {
    let table = app.snapshot().await;
    if table.is_empty() {
        return Err(ApiError::NoData);
    }
    Ok(web::Json(table.records().to_vec()))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/data").service(web::resource("").route(web::get().to(all_data))));
}
