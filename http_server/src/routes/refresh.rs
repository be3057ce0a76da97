use actix_web::web;
use serde::Serialize;

use crate::app_container::Application;

#[derive(Serialize)]
struct RefreshResponse {
    message: &'static str,
}

/// Drops the current snapshot and re-extracts from the live page.
async fn refresh(app: web::Data<Application>) -> web::Json<RefreshResponse> {
    app.refresh().await;
    web::Json(RefreshResponse {
        message:
            "Data refresh initiated. Check /api/data or /api/outage-summary for updated results.",
    })
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/refresh-data").service(web::resource("").route(web::get().to(refresh))));
}
