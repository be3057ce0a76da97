use actix_web::web;
use cnn_text_parser::OutageRecord;
use serde::{Deserialize, Serialize};

use crate::app_container::Application;
use crate::errors::ApiError;

#[derive(Deserialize, Debug)]
struct Request {
    location: Option<String>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum LocationDataResponse {
    /// No record mentions the location; still a 200, with the miss spelled
    /// out and an empty data list.
    NoMatch {
        error: String,
        location: String,
        data: Vec<OutageRecord>,
    },
    Matches {
        location: String,
        data: Vec<OutageRecord>,
        count: usize,
    },
}

/// Records whose affected area mentions the queried location.
async fn location_data(
    query: web::Query<Request>,
    app: web::Data<Application>,
) -> Result<web::Json<LocationDataResponse>, ApiError> {
    let location = query.into_inner().location.unwrap_or_default();
    if location.is_empty() {
        return Err(ApiError::BadRequest(
            "Location parameter is required".to_owned(),
        ));
    }

    let table = app.snapshot().await;
    if table.is_empty() {
        return Err(ApiError::NoData);
    }

    let data = outage_analysis::location_data(&table, &location);
    if data.is_empty() {
        return Ok(web::Json(LocationDataResponse::NoMatch {
            error: format!("No data found for location: {location}"),
            location,
            data,
        }));
    }

    let count = data.len();
    Ok(web::Json(LocationDataResponse::Matches {
        location,
        data,
        count,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/location-data").service(web::resource("").route(web::get().to(location_data))),
    );
}

#[cfg(test)]
mod tests {
    use super::init_routes;
    use crate::app_container::Application;
    use actix_web::{test, web, App};
    use async_trait::async_trait;
    use std::sync::Arc;
    use web_page_extractor::PageFetcher;

    struct StubFetcher(&'static str);

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn fetch_lines(&self) -> anyhow::Result<Vec<String>> {
            Ok(self
                .0
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToOwned::to_owned)
                .collect())
        }
    }

    const PAGE: &str = r"
        Mon, 3 Jun 2024
        UNDERTAKING:
        OGBA FAULT: cable cut
        AREAS AFFECTED:
        Ajao Estate
        ";

    #[actix_web::test]
    async fn test_unmatched_location_reports_the_miss_with_empty_data() {
        let app = Application::new(Arc::new(StubFetcher(PAGE)) as Arc<dyn PageFetcher>);
        let service = test::init_service(
            App::new()
                .app_data(web::Data::new(app))
                .configure(init_routes),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/location-data?location=Badagry")
            .to_request();
        let response = test::call_service(&service, request).await;
        assert!(response.status().is_success());

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "No data found for location: Badagry");
        assert_eq!(body["location"], "Badagry");
        assert_eq!(body["data"], serde_json::json!([]));
        assert!(body.get("count").is_none());
    }

    #[actix_web::test]
    async fn test_matched_location_reports_records_and_count() {
        let app = Application::new(Arc::new(StubFetcher(PAGE)) as Arc<dyn PageFetcher>);
        let service = test::init_service(
            App::new()
                .app_data(web::Data::new(app))
                .configure(init_routes),
        )
        .await;

        let request = test::TestRequest::get()
            .uri("/location-data?location=ajao")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&service, request).await;

        assert_eq!(body["count"], 1);
        assert_eq!(body["data"][0]["Feeder"], "OGBA");
        assert!(body.get("error").is_none());
    }
}
