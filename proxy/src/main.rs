// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ODoH Proxy — terminates the client's TLS connection, forwards the
// opaque oblivious-dns-message envelope to a target chosen by the
// client's `targethost`/`targetpath` parameters, and relays the answer
// back. Never holds key material and never decrypts anything it
// carries.

use clap::Parser;
use odoh_proxy::config::Args;
use odoh_proxy::{router, AppState};
use reqwest::Client;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    let client = Client::builder()
        .pool_max_idle_per_host(args.pool_max_idle_per_host)
        .build()?;

    let state = AppState::new(client, args.instance_name.clone());
    let app = router(state, &args.proxy_path);

    let listener = TcpListener::bind(args.listen).await?;
    info!(
        listen = %args.listen,
        proxy_path = %args.proxy_path,
        pool_max_idle_per_host = args.pool_max_idle_per_host,
        "odoh-proxy listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
