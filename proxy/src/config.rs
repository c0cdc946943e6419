// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser)]
#[command(name = "odoh-proxy", about = "Oblivious DNS over HTTPS forwarding proxy")]
pub struct Args {
    /// Address to listen on for HTTP requests
    #[arg(long, env = "ODOH_PROXY_LISTEN", default_value = "0.0.0.0:8081")]
    pub listen: SocketAddr,

    /// Path this proxy serves the forwarding endpoint on
    #[arg(long, env = "ODOH_PROXY_PATH", default_value = "/proxy")]
    pub proxy_path: String,

    /// Per-host idle HTTPS connection pool capacity kept open to targets
    #[arg(long, env = "ODOH_PROXY_POOL_SIZE", default_value_t = 1024)]
    pub pool_max_idle_per_host: usize,

    /// Human-readable instance name attached to log lines
    #[arg(long, env = "ODOH_INSTANCE_NAME")]
    pub instance_name: Option<String>,
}
