// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Response AEAD: AES-128-GCM keyed directly by the client-chosen
// `response_key`, all-zero nonce. Safe only because each response key
// is single-use — callers MUST NOT reuse one across answers.
//
// The response AAD is the literal two zero bytes `0x02 || 0x00 0x00`
// (type tag + a placeholder empty key-id field), not whatever the
// envelope encoder would produce for an empty key-id — the two happen
// to coincide but the AAD here is fixed independently of the encoder.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Key, Nonce};

use crate::error::Error;
use crate::message::{MessageType, ObliviousDnsMessage};
use crate::suite::{AEAD_KEY_SIZE, AEAD_NONCE_SIZE};

const RESPONSE_AAD: &[u8] = &[0x02, 0x00, 0x00];

/// Seal a packed DNS answer under `response_key`, producing a Response
/// envelope with an empty key-id.
pub fn seal_response(response_key: &[u8], plaintext: &[u8]) -> Result<ObliviousDnsMessage, Error> {
    if response_key.len() != AEAD_KEY_SIZE {
        return Err(Error::Malformed);
    }

    let key = Key::<Aes128Gcm>::from_slice(response_key);
    let cipher = Aes128Gcm::new(key);
    let nonce = Nonce::from_slice(&[0u8; AEAD_NONCE_SIZE]);

    let ciphertext = cipher
        .encrypt(
            nonce,
            Payload {
                msg: plaintext,
                aad: RESPONSE_AAD,
            },
        )
        .map_err(|_| Error::Internal("response seal failed".into()))?;

    Ok(ObliviousDnsMessage {
        message_type: MessageType::Response,
        key_id: Vec::new(),
        encrypted_message: ciphertext,
    })
}

/// Open a Response envelope under `response_key`, recovering the packed
/// DNS answer.
pub fn open_response(response_key: &[u8], envelope: &ObliviousDnsMessage) -> Result<Vec<u8>, Error> {
    if !matches!(envelope.message_type, MessageType::Response) {
        return Err(Error::WrongMessageType);
    }
    if response_key.len() != AEAD_KEY_SIZE {
        return Err(Error::Malformed);
    }

    let key = Key::<Aes128Gcm>::from_slice(response_key);
    let cipher = Aes128Gcm::new(key);
    let nonce = Nonce::from_slice(&[0u8; AEAD_NONCE_SIZE]);

    cipher
        .decrypt(
            nonce,
            Payload {
                msg: &envelope.encrypted_message,
                aad: RESPONSE_AAD,
            },
        )
        .map_err(|_| Error::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_open_roundtrip() {
        let key = vec![9u8; AEAD_KEY_SIZE];
        let plaintext = b"packed dns answer bytes";
        let envelope = seal_response(&key, plaintext).unwrap();
        assert!(envelope.key_id.is_empty());
        assert_eq!(open_response(&key, &envelope).unwrap(), plaintext);
    }

    #[test]
    fn open_with_wrong_key_fails() {
        let key = vec![1u8; AEAD_KEY_SIZE];
        let wrong_key = vec![2u8; AEAD_KEY_SIZE];
        let envelope = seal_response(&key, b"answer").unwrap();
        assert!(matches!(
            open_response(&wrong_key, &envelope),
            Err(Error::Decrypt)
        ));
    }

    #[test]
    fn open_rejects_tampered_ciphertext() {
        let key = vec![1u8; AEAD_KEY_SIZE];
        let mut envelope = seal_response(&key, b"answer").unwrap();
        let last = envelope.encrypted_message.len() - 1;
        envelope.encrypted_message[last] ^= 0xff;
        assert!(matches!(open_response(&key, &envelope), Err(Error::Decrypt)));
    }

    #[test]
    fn seal_rejects_wrong_key_size() {
        let err = seal_response(&[0u8; 8], b"x").unwrap_err();
        assert!(matches!(err, Error::Malformed));
    }
}
