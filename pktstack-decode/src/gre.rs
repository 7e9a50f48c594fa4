//! GRE tunnel layer decoding
//!
//! The GRE header is four fixed bytes (flags/version + protocol type)
//! plus four optional bytes for each of the checksum, key, and sequence
//! fields, announced by the C, K and S flag bits. Only version 0 is
//! decoded; headers with the source-routing flag set are rejected.

use pktstack_core::{ethertypes, ProtocolId};

use crate::cursor::Cursor;
use crate::layer::Layer;

/// GRE layer operations.
pub struct Gre;

impl Gre {
    /// Fixed part: flags/version word + protocol type.
    pub const BASE_HEADER_LEN: usize = 4;

    /// Checksum present (C bit).
    const FLAG_CHECKSUM: u16 = 0x8000;
    /// Source routing present (R bit, RFC 1701); not decoded.
    const FLAG_ROUTING: u16 = 0x4000;
    /// Key present (K bit).
    const FLAG_KEY: u16 = 0x2000;
    /// Sequence number present (S bit).
    const FLAG_SEQUENCE: u16 = 0x1000;

    const VERSION_MASK: u16 = 0x0007;
    const PROTOCOL_TYPE_OFFSET: usize = 2;
}

impl Layer for Gre {
    fn validate_packet(cur: &Cursor<'_>) -> bool {
        // GRE declares no payload length, so the two flavors coincide.
        Self::validate_header(cur)
    }

    fn validate_header(cur: &Cursor<'_>) -> bool {
        let Ok(flags) = cur.peek_u16(0) else {
            return false;
        };
        if flags & Self::VERSION_MASK != 0 {
            return false;
        }
        if flags & Self::FLAG_ROUTING != 0 {
            return false;
        }
        Self::header_len(cur) <= cur.remaining()
    }

    fn header_len(cur: &Cursor<'_>) -> usize {
        let Ok(flags) = cur.peek_u16(0) else {
            return 0;
        };
        let mut len = Self::BASE_HEADER_LEN;
        // the checksum word is present when either C or R is set
        if flags & (Self::FLAG_CHECKSUM | Self::FLAG_ROUTING) != 0 {
            len += 4;
        }
        if flags & Self::FLAG_KEY != 0 {
            len += 4;
        }
        if flags & Self::FLAG_SEQUENCE != 0 {
            len += 4;
        }
        len
    }

    fn payload_len(cur: &Cursor<'_>) -> usize {
        cur.remaining().saturating_sub(Self::header_len(cur))
    }

    fn next_protocol(cur: &Cursor<'_>) -> ProtocolId {
        match cur.peek_u16(Self::PROTOCOL_TYPE_OFFSET) {
            Ok(ethertypes::IPV4) => ProtocolId::Ipv4,
            // transparent Ethernet bridging: a full frame inside the tunnel
            Ok(ethertypes::TEB) => ProtocolId::Ethernet,
            _ => ProtocolId::End,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(flags: u16, protocol_type: u16, optional_words: usize) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&flags.to_be_bytes());
        data.extend_from_slice(&protocol_type.to_be_bytes());
        data.extend_from_slice(&vec![0u8; optional_words * 4]);
        data
    }

    #[test]
    fn test_base_header() {
        let data = header(0x0000, 0x0800, 0);
        let cur = Cursor::new(&data);
        assert!(Gre::validate_packet(&cur));
        assert_eq!(Gre::header_len(&cur), 4);
    }

    #[test]
    fn test_header_len_tracks_flag_bits() {
        // checksum only
        let c = header(0x8000, 0x0800, 1);
        assert_eq!(Gre::header_len(&Cursor::new(&c)), 8);

        // key + sequence
        let ks = header(0x3000, 0x0800, 2);
        assert_eq!(Gre::header_len(&Cursor::new(&ks)), 12);

        // checksum + key + sequence
        let cks = header(0xb000, 0x0800, 3);
        let cur = Cursor::new(&cks);
        assert!(Gre::validate_packet(&cur));
        assert_eq!(Gre::header_len(&cur), 16);
        assert_eq!(Gre::payload_len(&cur), 0);
    }

    #[test]
    fn test_optional_fields_must_fit() {
        // K and S announced but only the base header present
        let data = header(0x3000, 0x0800, 0);
        assert!(!Gre::validate_packet(&Cursor::new(&data)));
    }

    #[test]
    fn test_rejects_nonzero_version() {
        // version 1 (PPTP-style)
        let data = header(0x0001, 0x880b, 0);
        assert!(!Gre::validate_packet(&Cursor::new(&data)));
    }

    #[test]
    fn test_rejects_routing_flag() {
        let data = header(0x4000, 0x0800, 1);
        assert!(!Gre::validate_packet(&Cursor::new(&data)));
    }

    #[test]
    fn test_truncated_base_header() {
        let data = header(0x0000, 0x0800, 0);
        assert!(!Gre::validate_packet(&Cursor::new(&data[..3])));
    }

    #[test]
    fn test_next_protocol_mapping() {
        let ip = header(0x0000, 0x0800, 0);
        assert_eq!(Gre::next_protocol(&Cursor::new(&ip)), ProtocolId::Ipv4);

        let teb = header(0x0000, 0x6558, 0);
        assert_eq!(Gre::next_protocol(&Cursor::new(&teb)), ProtocolId::Ethernet);

        let ipv6 = header(0x0000, 0x86dd, 0);
        assert_eq!(Gre::next_protocol(&Cursor::new(&ipv6)), ProtocolId::End);
    }
}
