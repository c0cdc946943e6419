// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ODoH Common — shared wire types and cryptography for the target and
// proxy binaries.
//
// Cryptographic stack:
//   HPKE:      DHKEM(X25519, HKDF-SHA256) / HKDF-SHA256 / AES-128-GCM (RFC 9180)
//   Key-id:    SHA-256
//   Response:  direct AES-128-GCM keyed by the client-chosen response_key

pub mod error;
pub mod hpke_query;
pub mod key;
pub mod message;
pub mod response;
pub mod suite;
pub mod telemetry;

pub use error::Error;
pub use key::{OdohKeyPair, OdohPublicKey};
pub use message::{MessageType, ObliviousDnsMessage, ObliviousDnsQuery};
pub use suite::CipherSuite;
