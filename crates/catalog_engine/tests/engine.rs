use std::sync::{mpsc, Arc};
use std::time::Duration;

use catalog_engine::{
    CatalogClient, CatalogRequest, CatalogResponse, ChannelEventSink, EngineEvent, EngineHandle,
    FailureKind, FetchError,
};

/// Answers every request after a per-request delay, failing page "0".
struct ScriptedClient;

#[async_trait::async_trait]
impl CatalogClient for ScriptedClient {
    async fn fetch_catalog(&self, request: &CatalogRequest) -> Result<CatalogResponse, FetchError> {
        let page = request
            .extra_params
            .iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.clone())
            .unwrap_or_default();
        let delay = if page == "1" { 200 } else { 10 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if page == "0" {
            return Err(FetchError {
                kind: FailureKind::HttpStatus(500),
                message: "scripted failure".to_string(),
            });
        }
        Ok(CatalogResponse::List {
            items: Some(Vec::new()),
            categories: Vec::new(),
            total_pages: page.parse().ok(),
        })
    }
}

fn page_request(page: &str) -> CatalogRequest {
    CatalogRequest {
        extra_params: vec![("page".to_string(), page.to_string())],
        ..CatalogRequest::default()
    }
}

fn request_id(event: &EngineEvent) -> u64 {
    match event {
        EngineEvent::CatalogFetched { request_id, .. } => *request_id,
    }
}

#[test]
fn overlapping_requests_complete_out_of_order() {
    let (tx, rx) = mpsc::channel();
    let engine =
        EngineHandle::with_client(Arc::new(ScriptedClient), Arc::new(ChannelEventSink::new(tx)))
            .expect("engine");

    engine.fetch(1, page_request("1"));
    engine.fetch(2, page_request("2"));

    let first = rx.recv_timeout(Duration::from_secs(5)).expect("first event");
    let second = rx.recv_timeout(Duration::from_secs(5)).expect("second event");

    assert_eq!(request_id(&first), 2);
    assert_eq!(request_id(&second), 1);
}

#[test]
fn failures_are_reported_as_events() {
    let (tx, rx) = mpsc::channel();
    let engine =
        EngineHandle::with_client(Arc::new(ScriptedClient), Arc::new(ChannelEventSink::new(tx)))
            .expect("engine");

    engine.fetch(9, page_request("0"));

    match rx.recv_timeout(Duration::from_secs(5)).expect("event") {
        EngineEvent::CatalogFetched { request_id, result } => {
            assert_eq!(request_id, 9);
            assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(500));
        }
    }
}
