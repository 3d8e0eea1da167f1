//! Probes over real HTTP against a local mock backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use pathprobe::config::{ProbeConfig, RetryConfig};
use pathprobe::lifecycle::ShutdownSignal;
use pathprobe::probe::{ProbeCoordinator, ProbeError, ProbeWorker, ReqwestFetcher};
use pathprobe::resilience::RetryPolicy;
use pathprobe::scan;

mod common;

fn fetcher() -> ReqwestFetcher {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    ReqwestFetcher::from_client(client)
}

fn fast_retries() -> RetryPolicy {
    RetryPolicy::from_config(&RetryConfig {
        base_delay_ms: 20,
        max_delay_ms: 20,
        ..RetryConfig::default()
    })
}

#[tokio::test]
async fn test_statuses_from_live_server() {
    let requests = Arc::new(AtomicUsize::new(0));
    let seen = requests.clone();
    let addr = common::start_path_backend(move |path| {
        seen.fetch_add(1, Ordering::SeqCst);
        match path {
            "/admin" => 200,
            "/login" => 403,
            "/broken" => 500,
            _ => 404,
        }
    })
    .await;
    let base_url = format!("http://{addr}");

    let worker = ProbeWorker::new(fetcher(), fast_retries());
    let coordinator = ProbeCoordinator::new(worker, 0);
    let candidates = ["admin", "login", "broken", "nothing"]
        .into_iter()
        .map(String::from)
        .collect();

    let mut rx = coordinator
        .run(&base_url, candidates, ShutdownSignal::never())
        .await;

    let mut outcomes = Vec::new();
    while let Some(outcome) = rx.recv().await {
        outcomes.push(outcome);
    }
    assert_eq!(outcomes.len(), 4);

    let error_for = |candidate: &str| {
        let url = format!("{base_url}/{candidate}");
        outcomes
            .iter()
            .find(|o| o.tested_url == url)
            .map(|o| o.error.clone())
            .unwrap()
    };
    assert_eq!(error_for("admin"), None);
    assert_eq!(error_for("login"), Some(ProbeError::StatusFailure(403)));
    assert_eq!(error_for("broken"), Some(ProbeError::StatusFailure(500)));
    assert_eq!(error_for("nothing"), Some(ProbeError::StatusFailure(404)));
    // Responses are never retried.
    assert_eq!(requests.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_unreachable_server_exhausts_retries() {
    let addr = common::closed_addr().await;
    let worker = ProbeWorker::new(fetcher(), fast_retries());

    let outcome = worker
        .probe(&format!("http://{addr}"), "admin", ShutdownSignal::never())
        .await;

    match outcome.error {
        Some(ProbeError::ExhaustedRetries { attempts, .. }) => assert_eq!(attempts, 3),
        other => panic!("expected ExhaustedRetries, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_base_url_is_transport_failure() {
    let worker = ProbeWorker::new(fetcher(), fast_retries());

    let outcome = worker
        .probe("not a url", "admin", ShutdownSignal::never())
        .await;

    assert!(matches!(outcome.error, Some(ProbeError::TransportFailure(_))));
}

#[tokio::test]
async fn test_full_scan_against_live_server() {
    let addr = common::start_path_backend(|path| if path == "/panel" { 200 } else { 404 }).await;
    let candidates = common::temp_path("candidates");
    let hits = common::temp_path("hits");
    tokio::fs::write(&candidates, "admin\npanel\n\nwp-login\n").await.unwrap();

    let mut config = ProbeConfig::default();
    config.target.base_url = Some(format!("http://{addr}"));
    config.target.candidates_file = candidates.to_string_lossy().into_owned();
    config.output.hits_file = hits.to_string_lossy().into_owned();
    config.concurrency.max_in_flight = 2;

    let mut console = Vec::new();

    let summary = scan::run(&config, fetcher(), ShutdownSignal::never(), &mut console)
        .await
        .unwrap();

    assert_eq!(summary.total, 3);
    assert_eq!(summary.hits, 1);
    let saved = tokio::fs::read_to_string(&hits).await.unwrap();
    assert_eq!(saved, format!("http://{addr}/panel\n"));

    let _ = tokio::fs::remove_file(&candidates).await;
    let _ = tokio::fs::remove_file(&hits).await;
}
