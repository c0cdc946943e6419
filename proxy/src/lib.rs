// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ODoH Proxy — forwards opaque oblivious-dns-message envelopes to a
// target chosen by the client, never holding key material.

pub mod config;
pub mod error;
pub mod handlers;

pub use error::ProxyError;
pub use handlers::{router, AppState};
