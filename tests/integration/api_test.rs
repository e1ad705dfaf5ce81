//! HTTP API surface tests.

use http::StatusCode;

use crate::helpers::{draft, Script, TestApp};

#[tokio::test]
async fn health_reports_memory_backend() {
    let app = TestApp::new(vec![]).await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "memory");
}

#[tokio::test]
async fn portals_are_listed_and_fetched() {
    let app = TestApp::new(vec![
        ("gem", Script::Drafts(vec![])),
        ("ireps", Script::Drafts(vec![])),
    ])
    .await;

    let list = app.request("GET", "/api/portals", None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["data"].as_array().unwrap().len(), 2);

    let one = app.request("GET", "/api/portals/gem", None).await;
    assert_eq!(one.status, StatusCode::OK);
    assert_eq!(one.body["data"]["id"], "gem");

    let missing = app.request("GET", "/api/portals/nope", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn tenders_support_filtering_and_pagination() {
    let app = TestApp::new(vec![
        (
            "gem",
            Script::Drafts(vec![
                draft("T1", "Metro Station Platform"),
                draft("T2", "Railway Electrification"),
            ]),
        ),
        (
            "ireps",
            Script::Drafts(vec![draft("T1", "Metro Rolling Stock")]),
        ),
    ])
    .await;
    app.runner.run_once().await.unwrap();

    let all = app.request("GET", "/api/tenders", None).await;
    assert_eq!(all.body["data"]["total_items"], 3);

    let gem_only = app
        .request("GET", "/api/tenders?portal_id=gem", None)
        .await;
    assert_eq!(gem_only.body["data"]["total_items"], 2);

    let search = app
        .request("GET", "/api/tenders?search=electrification", None)
        .await;
    assert_eq!(search.body["data"]["total_items"], 1);

    let by_category = app
        .request("GET", "/api/tenders?category=civil%20works", None)
        .await;
    assert_eq!(by_category.body["data"]["total_items"], 3);

    let no_category = app
        .request("GET", "/api/tenders?category=consultancy", None)
        .await;
    assert_eq!(no_category.body["data"]["total_items"], 0);

    let paged = app
        .request("GET", "/api/tenders?page=2&page_size=2", None)
        .await;
    assert_eq!(paged.body["data"]["items"].as_array().unwrap().len(), 1);
    assert_eq!(paged.body["data"]["has_previous"], true);

    let id = all.body["data"]["items"][0]["id"].as_str().unwrap();
    let one = app.request("GET", &format!("/api/tenders/{id}"), None).await;
    assert_eq!(one.status, StatusCode::OK);

    let missing = app
        .request(
            "GET",
            "/api/tenders/00000000-0000-0000-0000-000000000000",
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn notification_read_state_flow() {
    let app = TestApp::new(vec![(
        "gem",
        Script::Drafts(vec![
            draft("T1", "Metro Station Platform"),
            draft("T2", "Railway Track Works"),
        ]),
    )])
    .await;
    app.runner.run_once().await.unwrap();

    // 2 new-tender + 1 summary.
    let count = app
        .request("GET", "/api/notifications/unread-count", None)
        .await;
    assert_eq!(count.body["data"]["count"], 3);

    let list = app.request("GET", "/api/notifications", None).await;
    let first_id = list.body["data"]["items"][0]["id"].as_str().unwrap();

    let marked = app
        .request("PUT", &format!("/api/notifications/{first_id}/read"), None)
        .await;
    assert_eq!(marked.status, StatusCode::OK);

    let count = app
        .request("GET", "/api/notifications/unread-count", None)
        .await;
    assert_eq!(count.body["data"]["count"], 2);

    let unread = app
        .request("GET", "/api/notifications?unread_only=true", None)
        .await;
    assert_eq!(unread.body["data"]["total_items"], 2);

    let all_read = app
        .request("PUT", "/api/notifications/read-all", None)
        .await;
    assert_eq!(all_read.body["data"]["count"], 2);

    let count = app
        .request("GET", "/api/notifications/unread-count", None)
        .await;
    assert_eq!(count.body["data"]["count"], 0);

    let missing = app
        .request(
            "PUT",
            "/api/notifications/00000000-0000-0000-0000-000000000000/read",
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn monitor_control_round_trip() {
    let app = TestApp::new(vec![("gem", Script::Drafts(vec![]))]).await;

    let status = app.request("GET", "/api/monitor/status", None).await;
    assert_eq!(status.body["data"]["active"], false);

    let started = app.request("POST", "/api/monitor/start", None).await;
    assert_eq!(started.body["data"]["changed"], true);

    // Second start is a no-op.
    let restarted = app.request("POST", "/api/monitor/start", None).await;
    assert_eq!(restarted.body["data"]["changed"], false);

    let status = app.request("GET", "/api/monitor/status", None).await;
    assert_eq!(status.body["data"]["active"], true);

    let stopped = app.request("POST", "/api/monitor/stop", None).await;
    assert_eq!(stopped.body["data"]["changed"], true);

    let stopped_again = app.request("POST", "/api/monitor/stop", None).await;
    assert_eq!(stopped_again.body["data"]["changed"], false);

    let status = app.request("GET", "/api/monitor/status", None).await;
    assert_eq!(status.body["data"]["active"], false);
}
