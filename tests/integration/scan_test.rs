//! End-to-end scan cycle behavior.

use crate::helpers::{draft, Script, TestApp};

#[tokio::test]
async fn scan_persists_relevant_tenders_and_notifies() {
    let app = TestApp::new(vec![(
        "gem",
        Script::Drafts(vec![
            draft("T1", "Metro Station Platform"),
            draft("T2", "Office Stationery Supply"),
        ]),
    )])
    .await;

    let summary = app.runner.run_once().await.unwrap();
    assert_eq!(summary.total_new_tenders, 1);
    assert_eq!(summary.successful_portals, 1);

    // Only T1 survived the keyword filter.
    let tenders = app.request("GET", "/api/tenders", None).await;
    assert_eq!(tenders.body["data"]["total_items"], 1);
    assert_eq!(tenders.body["data"]["items"][0]["external_id"], "T1");

    // One new-tender notification plus one scan summary.
    let notifications = app.request("GET", "/api/notifications", None).await;
    assert_eq!(notifications.body["data"]["total_items"], 2);
    let kinds: Vec<&str> = notifications.body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"new-tender"));
    assert!(kinds.contains(&"scan-summary"));

    let summary_notif = notifications.body["data"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|n| n["kind"] == "scan-summary")
        .unwrap();
    assert_eq!(summary_notif["payload"]["total_new_tenders"], 1);
}

#[tokio::test]
async fn failing_portal_leaves_others_untouched() {
    let app = TestApp::new(vec![
        (
            "good",
            Script::Drafts(vec![draft("T1", "Railway Track Renewal")]),
        ),
        ("bad", Script::Fail),
    ])
    .await;

    let summary = app.runner.run_once().await.unwrap();

    assert_eq!(summary.successful_portals, 1);
    assert_eq!(summary.failed_portals, 1);
    assert_eq!(summary.total_new_tenders, 1);

    let tenders = app.request("GET", "/api/tenders", None).await;
    assert_eq!(tenders.body["data"]["total_items"], 1);
}

#[tokio::test]
async fn repeated_scans_do_not_duplicate_or_renotify() {
    let app = TestApp::new(vec![(
        "gem",
        Script::Drafts(vec![draft("T1", "Metro Coach Procurement")]),
    )])
    .await;

    app.runner.run_once().await.unwrap();
    let second = app.runner.run_once().await.unwrap();

    assert_eq!(second.total_new_tenders, 0);

    let tenders = app.request("GET", "/api/tenders", None).await;
    assert_eq!(tenders.body["data"]["total_items"], 1);

    // First cycle: new-tender + summary. Second cycle: nothing.
    let notifications = app.request("GET", "/api/notifications", None).await;
    assert_eq!(notifications.body["data"]["total_items"], 2);
}

#[tokio::test]
async fn quiet_scan_emits_no_summary() {
    let app = TestApp::new(vec![("gem", Script::Drafts(vec![]))]).await;

    let summary = app.runner.run_once().await.unwrap();
    assert_eq!(summary.total_new_tenders, 0);

    let notifications = app.request("GET", "/api/notifications", None).await;
    assert_eq!(notifications.body["data"]["total_items"], 0);
}

#[tokio::test]
async fn scan_updates_portal_counters() {
    let app = TestApp::new(vec![(
        "gem",
        Script::Drafts(vec![
            draft("T1", "Metro Depot Works"),
            draft("T2", "Railway Signalling Upgrade"),
        ]),
    )])
    .await;

    app.runner.run_once().await.unwrap();

    let portal = app.request("GET", "/api/portals/gem", None).await;
    assert_eq!(portal.body["data"]["total_tenders"], 2);
    assert_eq!(portal.body["data"]["new_tenders"], 2);
    assert!(!portal.body["data"]["last_scanned"].is_null());

    // A quiet re-scan resets the per-cycle counter but keeps the total.
    app.runner.run_once().await.unwrap();
    let portal = app.request("GET", "/api/portals/gem", None).await;
    assert_eq!(portal.body["data"]["total_tenders"], 2);
    assert_eq!(portal.body["data"]["new_tenders"], 0);
}
