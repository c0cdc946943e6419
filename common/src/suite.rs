// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Ciphersuite identifiers and dispatch. Only one triple is supported;
// unsupported identifiers fail at decode time with `UnsupportedSuite`
// rather than falling through to a lookup table.

use hpke::aead::{Aead, AesGcm128};
use hpke::kdf::{HkdfSha256, Kdf};
use hpke::kem::{Kem, X25519HkdfSha256};

use crate::error::Error;

/// DHKEM(X25519, HKDF-SHA256) — RFC 9180 §7.1.
pub const KEM_X25519_HKDF_SHA256: u16 = X25519HkdfSha256::KEM_ID;
/// HKDF-SHA256 — RFC 9180 §7.2.
pub const KDF_HKDF_SHA256: u16 = HkdfSha256::KDF_ID;
/// AES-128-GCM — RFC 9180 §7.3.
pub const AEAD_AES_128_GCM: u16 = AesGcm128::AEAD_ID;

/// AES-128-GCM key size in bytes.
pub const AEAD_KEY_SIZE: usize = 16;
/// AES-128-GCM nonce size in bytes.
pub const AEAD_NONCE_SIZE: usize = 12;
/// X25519 encapsulated-key size in bytes (the `enc` prefix of a sealed query).
pub const KEM_ENC_SIZE: usize = 32;

/// The single ciphersuite this core understands. A tagged-variant
/// representation rather than a lookup table: adding a second triple
/// means adding a variant, not threading a new map through call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherSuite {
    X25519HkdfSha256Aes128Gcm,
}

impl CipherSuite {
    /// Resolve a suite from its three wire identifiers, or fail with
    /// `UnsupportedSuite` if the triple isn't the one this core speaks.
    pub fn from_ids(kem_id: u16, kdf_id: u16, aead_id: u16) -> Result<Self, Error> {
        match (kem_id, kdf_id, aead_id) {
            (KEM_X25519_HKDF_SHA256, KDF_HKDF_SHA256, AEAD_AES_128_GCM) => {
                Ok(Self::X25519HkdfSha256Aes128Gcm)
            }
            _ => Err(Error::UnsupportedSuite),
        }
    }

    pub fn kem_id(&self) -> u16 {
        KEM_X25519_HKDF_SHA256
    }

    pub fn kdf_id(&self) -> u16 {
        KDF_HKDF_SHA256
    }

    pub fn aead_id(&self) -> u16 {
        AEAD_AES_128_GCM
    }

    /// Size of the AEAD key this suite's response encryption uses.
    pub fn aead_key_size(&self) -> usize {
        AEAD_KEY_SIZE
    }

    /// Size of the AEAD nonce this suite's response encryption uses.
    pub fn aead_nonce_size(&self) -> usize {
        AEAD_NONCE_SIZE
    }

    /// Size of the KEM's encapsulated public key (the `enc` prefix of a
    /// sealed query's `encrypted_message`).
    pub fn kem_public_key_size(&self) -> usize {
        KEM_ENC_SIZE
    }
}
