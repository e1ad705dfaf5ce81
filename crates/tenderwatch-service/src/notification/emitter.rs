//! Notification construction and delivery.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use tenderwatch_core::result::AppResult;
use tenderwatch_database::NotificationStore;
use tenderwatch_entity::{
    Notification, NotificationChannel, NotificationKind, Portal, Tender, TenderPriority,
};

use crate::broadcast::{EventBroadcaster, OutboundEvent};
use crate::scan::ScanSummary;

/// Builds notification records and publishes them.
///
/// Each notification is persisted first, then pushed to realtime
/// subscribers. Per-tender notifications are emitted in the order the
/// candidates appeared in the portal's result list.
#[derive(Clone)]
pub struct NotificationEmitter {
    /// Notification store.
    store: Arc<dyn NotificationStore>,
    /// Realtime publisher.
    broadcaster: Arc<dyn EventBroadcaster>,
}

impl NotificationEmitter {
    /// Create a new emitter.
    pub fn new(store: Arc<dyn NotificationStore>, broadcaster: Arc<dyn EventBroadcaster>) -> Self {
        Self { store, broadcaster }
    }

    /// Emit a notification for one newly persisted tender.
    pub async fn emit_new_tender(&self, tender: &Tender, portal: &Portal) -> AppResult<Notification> {
        let mut channels = vec![NotificationChannel::Dashboard];
        if tender.priority >= TenderPriority::High {
            channels.push(NotificationChannel::Email);
        }

        let notification = Notification {
            id: Uuid::new_v4(),
            kind: NotificationKind::NewTender,
            title: format!("New Tender: {}", tender.title),
            message: format!(
                "{} published a new tender on {} (deadline {})",
                tender.organization,
                portal.name,
                tender.submission_deadline.format("%Y-%m-%d")
            ),
            category: tender.category.clone(),
            priority: tender.priority,
            payload: serde_json::json!({
                "tender_id": tender.id,
                "portal_id": portal.id,
                "external_id": tender.external_id,
                "value": tender.value,
                "submission_deadline": tender.submission_deadline,
            }),
            channels,
            read: false,
            created_at: Utc::now(),
        };

        self.store.insert(&notification).await?;
        self.broadcaster
            .broadcast(OutboundEvent::NewTender(tender.clone()));
        self.broadcaster
            .broadcast(OutboundEvent::NewNotification(notification.clone()));
        Ok(notification)
    }

    /// Emit the end-of-cycle summary.
    ///
    /// Suppressed when the cycle found nothing: returns `Ok(None)` and
    /// neither persists nor publishes.
    pub async fn emit_scan_summary(&self, summary: &ScanSummary) -> AppResult<Option<Notification>> {
        if summary.total_new_tenders == 0 {
            return Ok(None);
        }

        let notification = Notification {
            id: Uuid::new_v4(),
            kind: NotificationKind::ScanSummary,
            title: format!("Scan complete: {} new tenders", summary.total_new_tenders),
            message: format!(
                "Scanned {} portals ({} failed) and found {} new tenders",
                summary.scanned_portals(),
                summary.failed_portals,
                summary.total_new_tenders
            ),
            category: "monitoring".to_string(),
            priority: TenderPriority::Medium,
            payload: serde_json::to_value(summary)?,
            channels: vec![NotificationChannel::Dashboard],
            read: false,
            created_at: Utc::now(),
        };

        self.store.insert(&notification).await?;
        self.broadcaster
            .broadcast(OutboundEvent::NewNotification(notification.clone()));
        info!(
            new_tenders = summary.total_new_tenders,
            failed = summary.failed_portals,
            "Scan summary notification emitted"
        );
        Ok(Some(notification))
    }
}
