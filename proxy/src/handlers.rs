// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The forwarding handler: copy the request body verbatim into a new
// POST against `https://{targethost}{targetpath}`, preserving
// Content-Type, and hand the upstream response straight back. The
// proxy never inspects, caches, or transforms the body it carries.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use reqwest::Client;
use tower_http::trace::TraceLayer;

use crate::error::ProxyError;

#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<Inner>,
}

pub struct Inner {
    pub client: Client,
    pub instance_name: Option<String>,
}

impl AppState {
    pub fn new(client: Client, instance_name: Option<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                instance_name,
            }),
        }
    }
}

pub fn router(state: AppState, proxy_path: &str) -> Router {
    Router::new()
        .route(proxy_path, any(forward_handler))
        .route("/health", axum::routing::get(health_handler))
        .route("/healthz", axum::routing::get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn forward_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    if method != Method::POST {
        return Err(ProxyError::BadRequest("method must be POST".into()));
    }

    let targethost = params
        .get("targethost")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ProxyError::BadRequest("missing targethost".into()))?;
    let targetpath = params
        .get("targetpath")
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ProxyError::BadRequest("missing targetpath".into()))?;

    let url = format!("https://{targethost}{targetpath}");

    let content_type = headers
        .get(axum::http::header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| "application/oblivious-dns-message".parse().unwrap());

    let upstream = state
        .inner
        .client
        .post(&url)
        .header(axum::http::header::CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::TargetUnavailable(e.to_string()))?;

    let status = upstream.status();
    let upstream_body = upstream
        .bytes()
        .await
        .map_err(|e| ProxyError::TargetUnavailable(e.to_string()))?;

    Ok((
        StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY),
        [(
            axum::http::header::CONTENT_TYPE,
            "application/oblivious-dns-message",
        )],
        upstream_body,
    )
        .into_response())
}
