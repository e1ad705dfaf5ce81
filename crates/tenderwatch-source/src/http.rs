//! HTTP tender source.
//!
//! Fetches a portal endpoint expected to return a JSON array of tender
//! drafts. Real HTML scraping is out of scope; portals that cannot serve
//! JSON are handled by the mock source instead.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use tenderwatch_core::error::{AppError, ErrorKind};
use tenderwatch_core::result::AppResult;
use tenderwatch_entity::{Portal, TenderDraft};

use crate::source::TenderSource;

/// A [`TenderSource`] that performs an HTTP GET against the portal URL.
#[derive(Debug, Clone)]
pub struct HttpTenderSource {
    client: reqwest::Client,
}

impl HttpTenderSource {
    /// Create a source with the given request timeout.
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tenderwatch/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TenderSource for HttpTenderSource {
    async fn fetch(&self, portal: &Portal) -> AppResult<Vec<TenderDraft>> {
        let response = self
            .client
            .get(&portal.url)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Fetch,
                    format!("Portal {} unreachable: {e}", portal.id),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::fetch(format!(
                "Portal {} returned HTTP {status}",
                portal.id
            )));
        }

        let drafts: Vec<TenderDraft> = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Fetch,
                format!("Portal {} returned malformed payload: {e}", portal.id),
                e,
            )
        })?;

        debug!(portal = %portal.id, candidates = drafts.len(), "Fetched portal listings");
        Ok(drafts)
    }
}
