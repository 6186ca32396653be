use std::sync::Arc;
use std::time::{Duration, Instant};

use dashboard_engine::{
    fetch_detail, ApiRequest, ApiResponse, EngineEvent, EngineHandle, GatewayError,
    GatewaySettings, ReqwestGateway,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> ReqwestGateway {
    ReqwestGateway::new(GatewaySettings {
        base_url: server.uri(),
        ..GatewaySettings::default()
    })
    .expect("gateway")
}

async fn mount_articles(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/articles"))
        .and(query_param("keyword_id", "1"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_trend(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/trend"))
        .and(query_param("keyword_id", "1"))
        .respond_with(template)
        .mount(server)
        .await;
}

fn articles_body() -> serde_json::Value {
    json!([{"id": 1, "keyword_id": 1, "title": "a", "url": "https://n.example/1"}])
}

fn trend_body() -> serde_json::Value {
    json!([{"date": "2024-05-01", "count": 1}])
}

#[tokio::test]
async fn detail_requests_run_concurrently() {
    let server = MockServer::start().await;
    let delay = Duration::from_millis(400);
    mount_articles(
        &server,
        ResponseTemplate::new(200)
            .set_delay(delay)
            .set_body_json(articles_body()),
    )
    .await;
    mount_trend(
        &server,
        ResponseTemplate::new(200)
            .set_delay(delay)
            .set_body_json(trend_body()),
    )
    .await;

    let gateway = gateway_for(&server);
    let started = Instant::now();
    let detail = fetch_detail(&gateway, 1).await.expect("detail");
    let elapsed = started.elapsed();

    assert_eq!(detail.articles.len(), 1);
    assert_eq!(detail.trend.len(), 1);
    assert!(
        elapsed < delay * 2 - Duration::from_millis(50),
        "requests ran sequentially: {elapsed:?}"
    );
}

#[tokio::test]
async fn detail_fails_fast_when_one_side_fails() {
    let server = MockServer::start().await;
    mount_articles(
        &server,
        ResponseTemplate::new(200)
            .set_delay(Duration::from_secs(2))
            .set_body_json(articles_body()),
    )
    .await;
    mount_trend(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({"detail": "aggregation failed"})),
    )
    .await;

    let gateway = gateway_for(&server);
    let started = Instant::now();
    let err = fetch_detail(&gateway, 1).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "HTTP 500 Internal Server Error - aggregation failed"
    );
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn detail_fails_when_articles_fail() {
    let server = MockServer::start().await;
    mount_articles(&server, ResponseTemplate::new(503)).await;
    mount_trend(&server, ResponseTemplate::new(200).set_body_json(trend_body())).await;

    let err = fetch_detail(&gateway_for(&server), 1).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test(flavor = "multi_thread")]
async fn engine_reports_each_request_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/keywords"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "term": "rust", "created_at": "2024-05-01T08:00:00"}
        ])))
        .mount(&server)
        .await;
    mount_articles(&server, ResponseTemplate::new(200).set_body_json(articles_body())).await;
    mount_trend(&server, ResponseTemplate::new(404)).await;

    let engine = EngineHandle::with_gateway(Arc::new(gateway_for(&server))).expect("engine");
    engine.submit(1, ApiRequest::ListKeywords);
    engine.submit(2, ApiRequest::LoadDetail { keyword_id: 1 });
    engine.submit(
        3,
        ApiRequest::CreateKeyword {
            term: String::new(),
        },
    );

    let mut events = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    while events.len() < 3 && Instant::now() < deadline {
        if let Some(event) = tokio::task::block_in_place(|| {
            engine.recv_timeout(Duration::from_millis(100))
        }) {
            events.push(event);
        }
    }
    assert_eq!(events.len(), 3);

    events.sort_by_key(|event| match event {
        EngineEvent::Completed { request_id, .. } => *request_id,
    });
    let results: Vec<_> = events
        .into_iter()
        .map(|event| match event {
            EngineEvent::Completed { result, .. } => result,
        })
        .collect();

    assert!(matches!(&results[0], Ok(ApiResponse::Keywords(list)) if list.len() == 1));
    assert!(matches!(&results[1], Err(GatewayError::Remote { status: 404, .. })));
    assert_eq!(
        results[2],
        Err(GatewayError::Validation("term is empty".to_string()))
    );
}
