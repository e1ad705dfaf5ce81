//! Shared test helpers for integration tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::body::Body;
use axum::Router;
use chrono::{Duration as ChronoDuration, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use tenderwatch_core::config::{AppConfig, PortalSeed};
use tenderwatch_core::result::AppResult;
use tenderwatch_core::error::AppError;
use tenderwatch_database::StoreSet;
use tenderwatch_entity::tender::ValueBandScorer;
use tenderwatch_entity::{Portal, TenderDraft};
use tenderwatch_monitor::{MonitorScheduler, ScanRunner};
use tenderwatch_realtime::BroadcastHub;
use tenderwatch_service::{
    EventBroadcaster, NotificationEmitter, NotificationService, PortalRegistry, TenderDirectory,
    TenderIngest,
};
use tenderwatch_source::{KeywordFilter, SourceRoute, TenderSource};

/// What a scripted portal answers with.
#[derive(Clone)]
pub enum Script {
    /// Fixed candidate drafts, returned on every fetch.
    Drafts(Vec<TenderDraft>),
    /// Fetch failure.
    Fail,
}

struct ScriptedSource {
    script: Script,
}

#[async_trait]
impl TenderSource for ScriptedSource {
    async fn fetch(&self, portal: &Portal) -> AppResult<Vec<TenderDraft>> {
        match &self.script {
            Script::Drafts(drafts) => Ok(drafts.clone()),
            Script::Fail => Err(AppError::fetch(format!("Portal {} unreachable", portal.id))),
        }
    }
}

struct ScriptedRoute {
    scripts: HashMap<String, Script>,
}

impl SourceRoute for ScriptedRoute {
    fn select(&self, portal: &Portal) -> Arc<dyn TenderSource> {
        let script = self
            .scripts
            .get(&portal.id)
            .cloned()
            .unwrap_or(Script::Drafts(Vec::new()));
        Arc::new(ScriptedSource { script })
    }
}

/// Test application backed by in-memory stores and scripted sources.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Direct access to the scan runner.
    pub runner: Arc<ScanRunner>,
    /// The scheduler wired into the router.
    pub scheduler: Arc<MonitorScheduler>,
    /// The realtime hub wired into the emitter.
    pub hub: Arc<BroadcastHub>,
    /// The underlying stores.
    pub stores: StoreSet,
}

/// A decoded test response.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body (Null for empty bodies).
    pub body: Value,
}

impl TestApp {
    /// Build an app whose portals answer with the given scripts.
    ///
    /// Keywords are fixed to `{"metro", "railway"}`; the scan interval is
    /// one minute.
    pub async fn new(portals: Vec<(&str, Script)>) -> Self {
        let stores = StoreSet::memory();
        let registry = PortalRegistry::new(stores.portals.clone());

        let seeds: Vec<PortalSeed> = portals
            .iter()
            .map(|(id, _)| PortalSeed {
                id: id.to_string(),
                name: id.to_uppercase(),
                url: format!("mock://{id}"),
                portal_type: "government".to_string(),
            })
            .collect();
        registry.seed(&seeds).await.expect("Failed to seed portals");

        let scripts: HashMap<String, Script> = portals
            .into_iter()
            .map(|(id, script)| (id.to_string(), script))
            .collect();

        let hub = Arc::new(BroadcastHub::new(64));
        let emitter = NotificationEmitter::new(
            stores.notifications.clone(),
            Arc::clone(&hub) as Arc<dyn EventBroadcaster>,
        );
        let ingest = TenderIngest::new(stores.tenders.clone(), Arc::new(ValueBandScorer));

        let runner = Arc::new(ScanRunner::new(
            registry.clone(),
            ingest,
            emitter,
            Arc::new(ScriptedRoute { scripts }),
            KeywordFilter::new(&["metro".to_string(), "railway".to_string()]),
            Duration::from_secs(5),
        ));
        let scheduler = Arc::new(MonitorScheduler::new(
            Arc::clone(&runner),
            Duration::from_secs(60),
        ));

        let state = tenderwatch_api::AppState {
            config: Arc::new(AppConfig::default()),
            portals: registry,
            tenders: TenderDirectory::new(stores.tenders.clone()),
            notifications: NotificationService::new(stores.notifications.clone()),
            scheduler: Arc::clone(&scheduler),
            hub: Arc::clone(&hub),
            db: None,
            started_at: Instant::now(),
        };

        Self {
            router: tenderwatch_api::build_router(state),
            runner,
            scheduler,
            hub,
            stores,
        }
    }

    /// Make an HTTP request to the test app.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        TestResponse { status, body }
    }
}

/// Build a draft with the given id and title; the rest is boilerplate.
pub fn draft(external_id: &str, title: &str) -> TenderDraft {
    let now = Utc::now();
    TenderDraft {
        external_id: external_id.to_string(),
        title: title.to_string(),
        organization: "Kochi Metro Rail Ltd".to_string(),
        description: "Procurement notice".to_string(),
        value: 150_000_000,
        publish_date: now - ChronoDuration::days(1),
        submission_deadline: now + ChronoDuration::days(30),
        location: "Kochi".to_string(),
        category: "Civil Works".to_string(),
        keywords: vec![],
        source_name: "Test Portal".to_string(),
        source_url: "mock://test".to_string(),
    }
}
