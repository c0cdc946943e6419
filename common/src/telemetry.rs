// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fire-and-forget telemetry relay. Handlers send a fully serialized
// `TelemetryEvent` to a bounded channel and move on; a single
// background worker drains it and logs the event. The handler never
// blocks on or awaits telemetry delivery, and a full channel drops the
// newest event rather than applying backpressure to the request path.

use serde::Serialize;
use tokio::sync::mpsc::{self, Sender};
use tracing::{info, warn};

/// Millisecond-to-nanosecond breakdown of where a request's time went.
#[derive(Debug, Clone, Serialize)]
pub struct RunningTime {
    pub start_ns: u128,
    pub decrypt_ns: Option<u128>,
    pub resolve_ns: Option<u128>,
    pub encrypt_ns: Option<u128>,
    pub end_ns: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct TelemetryEvent {
    pub protocol: &'static str,
    pub request_id: String,
    pub resolver: Option<String>,
    pub success: bool,
    pub experiment_id: Option<String>,
    pub server_instance: Option<String>,
    pub timing: RunningTime,
}

const CHANNEL_CAPACITY: usize = 1024;

/// Spawns the background worker and returns the sender half handlers
/// use to submit events. Dropping all senders shuts the worker down.
pub fn spawn_worker() -> Sender<TelemetryEvent> {
    let (tx, mut rx) = mpsc::channel::<TelemetryEvent>(CHANNEL_CAPACITY);

    tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(line) => info!(target: "telemetry", event = %line),
                Err(e) => warn!(error = %e, "failed to serialize telemetry event"),
            }
        }
    });

    tx
}

/// Submit an event without blocking. A full channel drops the event and
/// logs a warning; telemetry delivery is best-effort by design.
pub fn submit(tx: &Sender<TelemetryEvent>, event: TelemetryEvent) {
    if tx.try_send(event).is_err() {
        warn!("telemetry channel full, dropping event");
    }
}
