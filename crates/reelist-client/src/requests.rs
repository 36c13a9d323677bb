//! Skip/take-addressed request-list source.

use std::time::Instant;

use async_trait::async_trait;
use reelist_core::{
    defaults, CollectionSource, Error, MediaRequest, PageDescriptor, PageResult, Result,
};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;

/// `GET /api/v1/request?take=10&skip={(n-1)*10}&filter={f}&sort={s}`
///
/// The endpoint addresses pages with `skip`/`take` and wraps its metadata in
/// a `pageInfo` object; this source normalizes both to the 1-based
/// [`PageResult`] addressing the controller expects.
pub struct RequestListSource {
    client: reqwest::Client,
    config: ClientConfig,
    page_size: usize,
}

/// Wire shape of the request-list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestListResponse {
    page_info: RequestPageInfo,
    results: Vec<MediaRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestPageInfo {
    pages: u32,
    /// Total result count across all pages.
    results: u64,
}

impl RequestListSource {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = config.build_http_client()?;
        Ok(Self {
            client,
            config,
            page_size: defaults::REQUEST_PAGE_SIZE,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1/request", self.config.base_url)
    }
}

#[async_trait]
impl CollectionSource for RequestListSource {
    type Item = MediaRequest;

    #[instrument(
        skip(self, descriptor),
        fields(
            subsystem = "client",
            component = "requests",
            op = "fetch_page",
            page = descriptor.page,
            epoch = descriptor.epoch
        )
    )]
    async fn fetch_page(&self, descriptor: &PageDescriptor) -> Result<PageResult<MediaRequest>> {
        let start = Instant::now();

        // page n -> skip (n-1) * take
        let skip = (descriptor.page as u64 - 1) * self.page_size as u64;
        let mut request = self.client.get(self.endpoint()).query(&[
            ("take", self.page_size.to_string()),
            ("skip", skip.to_string()),
        ]);
        for (key, value) in descriptor.criteria.iter() {
            request = request.query(&[(key, value)]);
        }
        if let Some(api_key) = &self.config.api_key {
            request = request.header("X-Api-Key", api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Server { status, message });
        }

        let body: RequestListResponse = response
            .json()
            .await
            .map_err(|e| Error::Deserialize(e.to_string()))?;

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            result_count = body.results.len(),
            total_pages = body.page_info.pages,
            duration_ms = elapsed,
            "Request page fetched"
        );
        if elapsed > defaults::SLOW_FETCH_MS {
            warn!(duration_ms = elapsed, slow = true, "Slow request-list fetch");
        }

        Ok(PageResult {
            page: descriptor.page,
            total_results: body.page_info.results,
            total_pages: body.page_info.pages,
            results: body.results,
        })
    }
}
