// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ODoH public key object and key pair.
//
// Wire form: `u16be kem || u16be kdf || u16be aead || u16be pk_len || pk`.
// The key-id is `SHA-256` of that same prefix (§6 of the wire contract).

use hpke::kem::{Kem as KemTrait, X25519HkdfSha256};
use hpke::Serializable;
use sha2::{Digest, Sha256};

use crate::error::Error;
use crate::suite::CipherSuite;

type Kem = X25519HkdfSha256;

/// An ODoH target's public key, plus the identifiers of the ciphersuite
/// it is meant to be used with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OdohPublicKey {
    pub kem_id: u16,
    pub kdf_id: u16,
    pub aead_id: u16,
    pub public_key: Vec<u8>,
}

impl OdohPublicKey {
    /// The SHA-256 digest that names this key on the wire and doubles as
    /// the query AAD prefix's suffix.
    pub fn key_id(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.kem_id.to_be_bytes());
        hasher.update(self.kdf_id.to_be_bytes());
        hasher.update(self.aead_id.to_be_bytes());
        hasher.update((self.public_key.len() as u16).to_be_bytes());
        hasher.update(&self.public_key);
        hasher.finalize().into()
    }

    /// `u16be kem || u16be kdf || u16be aead || u16be pk_len || pk`.
    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.public_key.len());
        out.extend_from_slice(&self.kem_id.to_be_bytes());
        out.extend_from_slice(&self.kdf_id.to_be_bytes());
        out.extend_from_slice(&self.aead_id.to_be_bytes());
        out.extend_from_slice(&(self.public_key.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.public_key);
        out
    }

    /// Reads the eight-byte identifier prefix, validates it names a
    /// known suite, then copies the remaining `pk_len` bytes.
    pub fn unmarshal(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < 8 {
            return Err(Error::Malformed);
        }
        let kem_id = u16::from_be_bytes([bytes[0], bytes[1]]);
        let kdf_id = u16::from_be_bytes([bytes[2], bytes[3]]);
        let aead_id = u16::from_be_bytes([bytes[4], bytes[5]]);
        let pk_len = u16::from_be_bytes([bytes[6], bytes[7]]) as usize;

        CipherSuite::from_ids(kem_id, kdf_id, aead_id)?;

        let rest = &bytes[8..];
        if rest.len() < pk_len {
            return Err(Error::Malformed);
        }

        Ok(Self {
            kem_id,
            kdf_id,
            aead_id,
            public_key: rest[..pk_len].to_vec(),
        })
    }

    pub fn cipher_suite(&self) -> Result<CipherSuite, Error> {
        CipherSuite::from_ids(self.kem_id, self.kdf_id, self.aead_id)
    }
}

/// An ODoH target's key pair: the public key it advertises, plus the
/// matching KEM private key. Lifetime equals the target process.
pub struct OdohKeyPair {
    pub public: OdohPublicKey,
    pub(crate) private_key: <Kem as KemTrait>::PrivateKey,
}

impl OdohKeyPair {
    /// Fresh key pair drawn from OS randomness.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        let (private_key, public_key) = Kem::gen_keypair(&mut csprng);
        Self::from_keys(private_key, public_key)
    }

    /// Deterministic key pair derived from a 16-byte seed — used for
    /// reproducible redeploys (the target's `--seed` configuration).
    pub fn from_seed(seed: &[u8; 16]) -> Result<Self, Error> {
        let (private_key, public_key) = Kem::derive_keypair(seed);
        Ok(Self::from_keys(private_key, public_key))
    }

    fn from_keys(
        private_key: <Kem as KemTrait>::PrivateKey,
        public_key: <Kem as KemTrait>::PublicKey,
    ) -> Self {
        let public = OdohPublicKey {
            kem_id: CipherSuite::X25519HkdfSha256Aes128Gcm.kem_id(),
            kdf_id: CipherSuite::X25519HkdfSha256Aes128Gcm.kdf_id(),
            aead_id: CipherSuite::X25519HkdfSha256Aes128Gcm.aead_id(),
            public_key: public_key.to_bytes().to_vec(),
        };
        Self {
            public,
            private_key,
        }
    }

    pub(crate) fn private_key(&self) -> &<Kem as KemTrait>::PrivateKey {
        &self.private_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_id_is_deterministic() {
        let kp = OdohKeyPair::from_seed(&[0u8; 16]).unwrap();
        assert_eq!(kp.public.key_id(), kp.public.key_id());
    }

    #[test]
    fn key_id_changes_with_pk_bytes() {
        let mut pk = OdohPublicKey {
            kem_id: 0x0020,
            kdf_id: 0x0001,
            aead_id: 0x0001,
            public_key: vec![0u8; 32],
        };
        let id1 = pk.key_id();
        pk.public_key[0] ^= 0xff;
        let id2 = pk.key_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn key_id_changes_with_identifier_byte() {
        let pk1 = OdohPublicKey {
            kem_id: 0x0020,
            kdf_id: 0x0001,
            aead_id: 0x0001,
            public_key: vec![7u8; 32],
        };
        let mut pk2 = pk1.clone();
        pk2.aead_id = 0x0002;
        assert_ne!(pk1.key_id(), pk2.key_id());
    }

    #[test]
    fn marshal_unmarshal_roundtrip() {
        let kp = OdohKeyPair::generate();
        let bytes = kp.public.marshal();
        let parsed = OdohPublicKey::unmarshal(&bytes).unwrap();
        assert_eq!(parsed, kp.public);
    }

    #[test]
    fn unmarshal_rejects_unsupported_suite() {
        let mut bytes = vec![0u8; 8 + 32];
        bytes[0..2].copy_from_slice(&0xffffu16.to_be_bytes());
        bytes[6..8].copy_from_slice(&32u16.to_be_bytes());
        let err = OdohPublicKey::unmarshal(&bytes).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSuite));
    }

    #[test]
    fn unmarshal_rejects_truncated_input() {
        let err = OdohPublicKey::unmarshal(&[0u8; 4]).unwrap_err();
        assert!(matches!(err, Error::Malformed));
    }

    #[test]
    fn from_seed_is_reproducible() {
        let kp1 = OdohKeyPair::from_seed(&[7u8; 16]).unwrap();
        let kp2 = OdohKeyPair::from_seed(&[7u8; 16]).unwrap();
        assert_eq!(kp1.public, kp2.public);
    }
}
