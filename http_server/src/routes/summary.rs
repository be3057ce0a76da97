use actix_web::{web, HttpResponse};
use chrono::Local;
use outage_analysis::{outage_summary, CountSeries};
use serde::Serialize;
use serde_json::json;

use crate::app_container::Application;

#[derive(Serialize)]
struct SummaryResponse {
    top_feeders: CountSeries,
    most_affected_areas: CountSeries,
    frequent_reasons: CountSeries,
    status_distribution: CountSeries,
    all_locations: Vec<String>,
    last_updated: String,
}

async fn summary(app: web::Data<Application>) -> HttpResponse {
    let table = app.snapshot().await;
    if table.is_empty() {
        // The 500 still carries every section, emptied, so consumers can
        // read a fixed shape.
        return HttpResponse::InternalServerError().json(json!({
            "error": "No data available to generate summary",
            "top_feeders": {},
            "most_affected_areas": {},
            "frequent_reasons": {},
            "status_distribution": {},
            "all_locations": []
        }));
    }

    let bundle = outage_summary(&table);
    HttpResponse::Ok().json(SummaryResponse {
        top_feeders: bundle.top_faulty_feeders,
        most_affected_areas: bundle.top_affected_areas,
        frequent_reasons: bundle.frequent_reasons,
        status_distribution: bundle.status_distribution,
        all_locations: bundle.all_locations,
        last_updated: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/outage-summary").service(web::resource("").route(web::get().to(summary))),
    );
}
