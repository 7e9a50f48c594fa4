//! SCTP layer decoding
//!
//! Only the common header is decoded; the chunk list that follows is the
//! payload.

use pktstack_core::ProtocolId;

use crate::cursor::Cursor;
use crate::layer::Layer;

/// SCTP layer operations.
pub struct Sctp;

impl Sctp {
    /// Common header size: ports, verification tag, checksum.
    pub const HEADER_LEN: usize = 12;
}

impl Layer for Sctp {
    fn validate_packet(cur: &Cursor<'_>) -> bool {
        cur.remaining() >= Self::HEADER_LEN
    }

    fn validate_header(cur: &Cursor<'_>) -> bool {
        Self::validate_packet(cur)
    }

    fn header_len(_cur: &Cursor<'_>) -> usize {
        Self::HEADER_LEN
    }

    fn payload_len(cur: &Cursor<'_>) -> usize {
        cur.remaining().saturating_sub(Self::HEADER_LEN)
    }

    fn next_protocol(_cur: &Cursor<'_>) -> ProtocolId {
        ProtocolId::End
    }
}
