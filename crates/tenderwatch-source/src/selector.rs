//! Source selection per portal.

use std::sync::Arc;
use std::time::Duration;

use tenderwatch_core::result::AppResult;
use tenderwatch_entity::Portal;

use crate::http::HttpTenderSource;
use crate::mock::MockTenderSource;
use crate::source::TenderSource;

/// Resolves the fetch strategy for a portal.
pub trait SourceRoute: Send + Sync {
    /// Pick the source that serves this portal.
    fn select(&self, portal: &Portal) -> Arc<dyn TenderSource>;
}

/// Picks a fetch strategy for each portal.
///
/// Portals with an `http` or `https` URL are fetched over the network;
/// everything else (e.g. `mock://` seeds) is served by the synthetic
/// generator.
pub struct SourceSelector {
    mock: Arc<MockTenderSource>,
    http: Arc<HttpTenderSource>,
}

impl SourceSelector {
    /// Build a selector with a live HTTP client using the given timeout.
    pub fn new(fetch_timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            mock: Arc::new(MockTenderSource::new()),
            http: Arc::new(HttpTenderSource::new(fetch_timeout)?),
        })
    }

    /// Build a selector whose mock source is deterministic.
    pub fn with_seeded_mock(seed: u64, fetch_timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            mock: Arc::new(MockTenderSource::with_seed(seed)),
            http: Arc::new(HttpTenderSource::new(fetch_timeout)?),
        })
    }
}

impl SourceRoute for SourceSelector {
    fn select(&self, portal: &Portal) -> Arc<dyn TenderSource> {
        if portal.url.starts_with("http://") || portal.url.starts_with("https://") {
            self.http.clone()
        } else {
            self.mock.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use tenderwatch_entity::PortalType;

    use super::*;

    fn portal(url: &str) -> Portal {
        Portal::seeded("p1", "Portal", url, PortalType::Government, Utc::now())
    }

    #[tokio::test]
    async fn mock_urls_are_served_synthetically() {
        let selector = SourceSelector::with_seeded_mock(1, Duration::from_secs(5)).unwrap();
        let source = selector.select(&portal("mock://gem"));
        // The mock source never fails.
        assert!(source.fetch(&portal("mock://gem")).await.is_ok());
    }
}
