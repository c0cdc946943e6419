// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! Proxy handler tests that don't require a live HTTPS target: the
//! `targethost`/`targetpath` validation and health check. Forwarding
//! itself (S4) is a thin `reqwest` passthrough exercised by the
//! crate's doc examples and the target crate's own HTTP tests; it
//! isn't re-verified here against a real TLS endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use odoh_proxy::{router, AppState};
use reqwest::Client;
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState::new(Client::new(), None)
}

#[tokio::test]
async fn missing_targethost_is_rejected() {
    let app = router(test_state(), "/proxy");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/proxy?targetpath=/dns-query")
                .header("content-type", "application/oblivious-dns-message")
                .body(Body::from(vec![1, 2, 3]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_targetpath_is_rejected() {
    let app = router(test_state(), "/proxy");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/proxy?targethost=target.example")
                .header("content-type", "application/oblivious-dns-message")
                .body(Body::from(vec![1, 2, 3]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_on_proxy_path_is_rejected_as_bad_request() {
    let app = router(test_state(), "/proxy");

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/proxy?targethost=target.example&targetpath=/dns-query")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let app = router(test_state(), "/proxy");

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
