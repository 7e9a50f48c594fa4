//! IPv4 layer decoding
//!
//! IPv4 is the one layer in the stack whose header and total length are
//! both declared on the wire, so validation cross-checks three things
//! against each other and against the buffer: the version nibble, the
//! IHL-derived header length, and the total-length field.

use pktstack_core::{ip_protocols, ProtocolId};

use crate::cursor::Cursor;
use crate::layer::Layer;

/// IPv4 layer operations.
pub struct Ipv4;

impl Ipv4 {
    /// Minimum header size (IHL = 5, no options).
    pub const MIN_HEADER_LEN: usize = 20;

    const TOTAL_LENGTH_OFFSET: usize = 2;
    const PROTOCOL_OFFSET: usize = 9;

    /// Header length declared by the IHL nibble, in bytes.
    fn declared_header_len(cur: &Cursor<'_>) -> usize {
        cur.peek_u8(0)
            .map(|b| ((b & 0x0f) as usize) * 4)
            .unwrap_or(0)
    }

    /// Total packet length declared by the header, in bytes.
    fn declared_total_len(cur: &Cursor<'_>) -> usize {
        cur.peek_u16(Self::TOTAL_LENGTH_OFFSET)
            .map(usize::from)
            .unwrap_or(0)
    }
}

impl Layer for Ipv4 {
    fn validate_packet(cur: &Cursor<'_>) -> bool {
        if !Self::validate_header(cur) {
            return false;
        }
        Self::declared_total_len(cur) <= cur.remaining()
    }

    fn validate_header(cur: &Cursor<'_>) -> bool {
        if cur.remaining() < Self::MIN_HEADER_LEN {
            return false;
        }
        let Ok(ver_ihl) = cur.peek_u8(0) else {
            return false;
        };
        if ver_ihl >> 4 != 4 {
            return false;
        }
        let header_len = ((ver_ihl & 0x0f) as usize) * 4;
        if header_len < Self::MIN_HEADER_LEN || header_len > cur.remaining() {
            return false;
        }
        Self::declared_total_len(cur) >= header_len
    }

    fn header_len(cur: &Cursor<'_>) -> usize {
        Self::declared_header_len(cur)
    }

    fn payload_len(cur: &Cursor<'_>) -> usize {
        Self::declared_total_len(cur).saturating_sub(Self::declared_header_len(cur))
    }

    fn next_protocol(cur: &Cursor<'_>) -> ProtocolId {
        match cur.peek_u8(Self::PROTOCOL_OFFSET) {
            Ok(ip_protocols::UDP) => ProtocolId::Udp,
            Ok(ip_protocols::GRE) => ProtocolId::Gre,
            Ok(ip_protocols::SCTP) => ProtocolId::Sctp,
            _ => ProtocolId::End,
        }
    }
}
