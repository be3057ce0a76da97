use anyhow::Context;
use lazy_static::lazy_static;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use url::Url;

lazy_static! {
    static ref CLIENT: ClientWithMiddleware = {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);
        ClientBuilder::new(reqwest::Client::new())
            // Retry failed requests.
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    };
}

pub struct HttpClient;

impl HttpClient {
    pub async fn get_text(url: Url) -> anyhow::Result<String> {
        let response = CLIENT
            .get(url.clone())
            // Some status pages reject requests without a browser UA.
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await
            .with_context(|| format!("Failed to fetch request from {url}"))?;
        response.text().await.context("Failed to get text response")
    }
}
