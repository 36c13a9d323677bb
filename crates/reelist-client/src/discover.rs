//! Page-addressed discover source (upcoming movies).

use std::time::Instant;

use async_trait::async_trait;
use reelist_core::{
    defaults, CollectionSource, Criteria, Error, MediaResult, PageDescriptor, PageResult, Result,
};
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;

/// `GET /api/v1/discover/movies/upcoming?page={n}&language={locale}`
///
/// The endpoint is natively page-addressed and already returns the
/// normalized `{ page, totalResults, totalPages, results }` shape, 20 items
/// per full page. All criteria keys pass through as query parameters.
pub struct UpcomingMoviesSource {
    client: reqwest::Client,
    config: ClientConfig,
}

impl UpcomingMoviesSource {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = config.build_http_client()?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Discover criteria for the locale configured via `REELIST_LOCALE`.
    pub fn env_criteria() -> Criteria {
        let locale = std::env::var(defaults::ENV_LOCALE)
            .unwrap_or_else(|_| defaults::DEFAULT_LOCALE.to_string());
        Criteria::discover(&locale)
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1/discover/movies/upcoming", self.config.base_url)
    }
}

#[async_trait]
impl CollectionSource for UpcomingMoviesSource {
    type Item = MediaResult;

    #[instrument(
        skip(self, descriptor),
        fields(
            subsystem = "client",
            component = "discover",
            op = "fetch_page",
            page = descriptor.page,
            epoch = descriptor.epoch
        )
    )]
    async fn fetch_page(&self, descriptor: &PageDescriptor) -> Result<PageResult<MediaResult>> {
        let start = Instant::now();

        let mut request = self
            .client
            .get(self.endpoint())
            .query(&[("page", descriptor.page.to_string())]);
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

        let page: PageResult<MediaResult> = response
            .json()
            .await
            .map_err(|e| Error::Deserialize(e.to_string()))?;

        let elapsed = start.elapsed().as_millis() as u64;
        debug!(
            result_count = page.results.len(),
            total_pages = page.total_pages,
            duration_ms = elapsed,
            "Discover page fetched"
        );
        if elapsed > defaults::SLOW_FETCH_MS {
            warn!(duration_ms = elapsed, slow = true, "Slow discover fetch");
        }

        Ok(page)
    }
}
