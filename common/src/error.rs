// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Error kinds surfaced by the ODoH cryptographic core (spec §7). Kept
// deliberately coarse: *Decrypt* and *Malformed* are distinct variants
// internally but both map to the same HTTP status at the edge, so the
// wire never distinguishes "bad bytes" from "authentication failure".

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed message")]
    Malformed,

    #[error("unsupported cipher suite")]
    UnsupportedSuite,

    #[error("unknown key id")]
    UnknownKey,

    #[error("decryption failed")]
    Decrypt,

    #[error("wrong message type")]
    WrongMessageType,

    #[error("internal error: {0}")]
    Internal(String),
}
