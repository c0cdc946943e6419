// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ODoH message framing. Every length-prefixed field uses a 16-bit
// big-endian length; decoders advance a running offset and never
// allocate more than the declared size.

use crate::error::Error;

/// The outer envelope's type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Query,
    Response,
}

impl MessageType {
    fn to_byte(self) -> u8 {
        match self {
            Self::Query => 0x01,
            Self::Response => 0x02,
        }
    }

    fn from_byte(b: u8) -> Result<Self, Error> {
        match b {
            0x01 => Ok(Self::Query),
            0x02 => Ok(Self::Response),
            _ => Err(Error::Malformed),
        }
    }
}

/// The outer wire envelope: `u8 type || u16be key_id_len || key_id ||
/// u16be ct_len || ciphertext`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObliviousDnsMessage {
    pub message_type: MessageType,
    pub key_id: Vec<u8>,
    pub encrypted_message: Vec<u8>,
}

impl ObliviousDnsMessage {
    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 2 + self.key_id.len() + 2 + self.encrypted_message.len());
        out.push(self.message_type.to_byte());
        write_field(&mut out, &self.key_id);
        write_field(&mut out, &self.encrypted_message);
        out
    }

    pub fn unmarshal(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.is_empty() {
            return Err(Error::Malformed);
        }
        let message_type = MessageType::from_byte(bytes[0])?;
        let mut offset = 1usize;

        let key_id = read_field(bytes, &mut offset)?;
        let encrypted_message = read_field(bytes, &mut offset)?;

        Ok(Self {
            message_type,
            key_id,
            encrypted_message,
        })
    }
}

/// The inner plaintext: `u16be rk_len || response_key || u16be dns_len
/// || dns_message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObliviousDnsQuery {
    pub response_key: Vec<u8>,
    pub dns_message: Vec<u8>,
}

impl ObliviousDnsQuery {
    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + self.response_key.len() + 2 + self.dns_message.len());
        write_field(&mut out, &self.response_key);
        write_field(&mut out, &self.dns_message);
        out
    }

    pub fn unmarshal(bytes: &[u8]) -> Result<Self, Error> {
        let mut offset = 0usize;
        let response_key = read_field(bytes, &mut offset)?;
        let dns_message = read_field(bytes, &mut offset)?;
        Ok(Self {
            response_key,
            dns_message,
        })
    }
}

fn write_field(out: &mut Vec<u8>, field: &[u8]) {
    out.extend_from_slice(&(field.len() as u16).to_be_bytes());
    out.extend_from_slice(field);
}

/// Reads one `u16be len || bytes` field starting at `*offset`, advancing
/// it past the field. Never allocates beyond the declared length.
fn read_field(bytes: &[u8], offset: &mut usize) -> Result<Vec<u8>, Error> {
    if bytes.len() < *offset + 2 {
        return Err(Error::Malformed);
    }
    let len = u16::from_be_bytes([bytes[*offset], bytes[*offset + 1]]) as usize;
    *offset += 2;

    if bytes.len() < *offset + len {
        return Err(Error::Malformed);
    }
    let field = bytes[*offset..*offset + len].to_vec();
    *offset += len;
    Ok(field)
}
