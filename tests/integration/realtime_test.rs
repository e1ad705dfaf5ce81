//! Realtime event fan-out during scans.

use tenderwatch_service::OutboundEvent;

use crate::helpers::{draft, Script, TestApp};

#[tokio::test]
async fn subscribers_see_tender_and_notification_events() {
    let app = TestApp::new(vec![(
        "gem",
        Script::Drafts(vec![draft("T1", "Metro Station Platform")]),
    )])
    .await;
    let mut events = app.hub.subscribe();

    app.runner.run_once().await.unwrap();

    // One tender event, then its notification, then the summary
    // notification.
    match events.recv().await.unwrap() {
        OutboundEvent::NewTender(t) => assert_eq!(t.external_id, "T1"),
        other => panic!("expected tender event, got {other:?}"),
    }
    match events.recv().await.unwrap() {
        OutboundEvent::NewNotification(n) => assert_eq!(n.kind.as_str(), "new-tender"),
        other => panic!("expected notification event, got {other:?}"),
    }
    match events.recv().await.unwrap() {
        OutboundEvent::NewNotification(n) => assert_eq!(n.kind.as_str(), "scan-summary"),
        other => panic!("expected summary event, got {other:?}"),
    }
}

#[tokio::test]
async fn quiet_scans_publish_nothing() {
    let app = TestApp::new(vec![("gem", Script::Drafts(vec![]))]).await;
    let mut events = app.hub.subscribe();

    app.runner.run_once().await.unwrap();

    assert!(matches!(
        events.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Empty)
    ));
}
