// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HPKE sealing/opening of the inner query (RFC 9180 base mode).
//
//   seal: assemble the suite, SetupBaseS(pk_R, info="odns-query"),
//         AAD = 0x01 || target.key_id(), ct = Seal(AAD, plaintext).
//   open: reject on key-id mismatch, split enc||ct at the KEM's
//         encapsulated-key size, SetupBaseR, AAD = 0x01 || local key-id,
//         plaintext = Open(AAD, ct).

use hpke::aead::AesGcm128;
use hpke::kdf::HkdfSha256;
use hpke::kem::X25519HkdfSha256;
use hpke::{Deserializable, OpModeR, OpModeS, Serializable};

use crate::error::Error;
use crate::key::{OdohKeyPair, OdohPublicKey};
use crate::message::{MessageType, ObliviousDnsMessage, ObliviousDnsQuery};
use crate::suite::KEM_ENC_SIZE;

/// Domain-separation string for the HPKE context, per the wire contract.
const INFO: &[u8] = b"odns-query";

type Kem = X25519HkdfSha256;
type Kdf = HkdfSha256;
type Aead = AesGcm128;

/// Seal an inner query under the target's public key. Client-side;
/// included for completeness even though the target core only opens.
pub fn seal_query(query: &ObliviousDnsQuery, target: &OdohPublicKey) -> Result<ObliviousDnsMessage, Error> {
    target.cipher_suite()?;

    let pk_r = <Kem as hpke::kem::Kem>::PublicKey::from_bytes(&target.public_key)
        .map_err(|_| Error::Malformed)?;

    let mut csprng = rand::rngs::OsRng;
    let (encapped_key, mut ctx) =
        hpke::setup_sender::<Aead, Kdf, Kem, _>(&OpModeS::Base, &pk_r, INFO, &mut csprng)
            .map_err(|_| Error::Internal("hpke setup_sender failed".into()))?;

    let key_id = target.key_id();
    let aad = query_aad(&key_id);
    let ct = ctx
        .seal(&query.marshal(), &aad)
        .map_err(|_| Error::Internal("hpke seal failed".into()))?;

    let mut encrypted_message = encapped_key.to_bytes().to_vec();
    encrypted_message.extend_from_slice(&ct);

    Ok(ObliviousDnsMessage {
        message_type: MessageType::Query,
        key_id: key_id.to_vec(),
        encrypted_message,
    })
}

/// Open a Query envelope addressed to `keypair`, recovering the inner
/// response key and DNS message.
pub fn open_query(envelope: &ObliviousDnsMessage, keypair: &OdohKeyPair) -> Result<ObliviousDnsQuery, Error> {
    if !matches!(envelope.message_type, MessageType::Query) {
        return Err(Error::WrongMessageType);
    }

    let local_key_id = keypair.public.key_id();
    if envelope.key_id != local_key_id {
        return Err(Error::UnknownKey);
    }

    if envelope.encrypted_message.len() < KEM_ENC_SIZE {
        return Err(Error::Malformed);
    }
    let (enc_bytes, ct) = envelope.encrypted_message.split_at(KEM_ENC_SIZE);

    let encapped_key = <Kem as hpke::kem::Kem>::EncappedKey::from_bytes(enc_bytes)
        .map_err(|_| Error::Malformed)?;

    let mut ctx = hpke::setup_receiver::<Aead, Kdf, Kem>(
        &OpModeR::Base,
        keypair.private_key(),
        &encapped_key,
        INFO,
    )
    .map_err(|_| Error::Decrypt)?;

    let aad = query_aad(&local_key_id);
    let plaintext = ctx.open(ct, &aad).map_err(|_| Error::Decrypt)?;

    ObliviousDnsQuery::unmarshal(&plaintext)
}

fn query_aad(key_id: &[u8]) -> Vec<u8> {
    let mut aad = Vec::with_capacity(1 + key_id.len());
    aad.push(0x01);
    aad.extend_from_slice(key_id);
    aad
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_open_roundtrip() {
        let keypair = OdohKeyPair::generate();
        let query = ObliviousDnsQuery {
            response_key: vec![3u8; 16],
            dns_message: b"fake dns wire bytes for example.com AAAA".to_vec(),
        };

        let envelope = seal_query(&query, &keypair.public).unwrap();
        assert!(matches!(envelope.message_type, MessageType::Query));
        assert_eq!(envelope.key_id, keypair.public.key_id().to_vec());

        let opened = open_query(&envelope, &keypair).unwrap();
        assert_eq!(opened, query);
    }

    #[test]
    fn open_rejects_unknown_key_id() {
        let keypair = OdohKeyPair::generate();
        let other = OdohKeyPair::generate();
        let query = ObliviousDnsQuery {
            response_key: vec![1u8; 16],
            dns_message: b"abc".to_vec(),
        };
        let envelope = seal_query(&query, &other.public).unwrap();
        let err = open_query(&envelope, &keypair).unwrap_err();
        assert!(matches!(err, Error::UnknownKey));
    }

    #[test]
    fn open_rejects_tampered_ciphertext() {
        let keypair = OdohKeyPair::generate();
        let query = ObliviousDnsQuery {
            response_key: vec![1u8; 16],
            dns_message: b"abc".to_vec(),
        };
        let mut envelope = seal_query(&query, &keypair.public).unwrap();
        let last = envelope.encrypted_message.len() - 1;
        envelope.encrypted_message[last] ^= 0xff;

        let err = open_query(&envelope, &keypair).unwrap_err();
        assert!(matches!(err, Error::Decrypt));
    }

    #[test]
    fn open_rejects_response_type() {
        let keypair = OdohKeyPair::generate();
        let query = ObliviousDnsQuery {
            response_key: vec![1u8; 16],
            dns_message: b"abc".to_vec(),
        };
        let mut envelope = seal_query(&query, &keypair.public).unwrap();
        envelope.message_type = MessageType::Response;

        let err = open_query(&envelope, &keypair).unwrap_err();
        assert!(matches!(err, Error::WrongMessageType));
    }
}
