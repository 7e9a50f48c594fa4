//! Ethernet II layer decoding
//!
//! An Ethernet II frame carries no total-length field, so the payload is
//! whatever the buffer still holds past the 14-byte header. Frames using
//! the 802.3 length field (values up to 1500) simply fail to map to a
//! known ethertype and terminate the stack.

use pktstack_core::{ethertypes, ProtocolId};

use crate::cursor::Cursor;
use crate::layer::Layer;

/// Ethernet II layer operations.
pub struct Ethernet;

impl Ethernet {
    /// Header size: destination MAC + source MAC + ethertype.
    pub const HEADER_LEN: usize = 14;

    /// Offset of the ethertype field within the header.
    const ETHERTYPE_OFFSET: usize = 12;
}

impl Layer for Ethernet {
    fn validate_packet(cur: &Cursor<'_>) -> bool {
        cur.remaining() >= Self::HEADER_LEN
    }

    fn validate_header(cur: &Cursor<'_>) -> bool {
        // No declared lengths to cross-check; same requirement as the
        // full-packet flavor.
        Self::validate_packet(cur)
    }

    fn header_len(_cur: &Cursor<'_>) -> usize {
        Self::HEADER_LEN
    }

    fn payload_len(cur: &Cursor<'_>) -> usize {
        cur.remaining().saturating_sub(Self::HEADER_LEN)
    }

    fn next_protocol(cur: &Cursor<'_>) -> ProtocolId {
        match cur.peek_u16(Self::ETHERTYPE_OFFSET) {
            Ok(ethertypes::DOT1Q) => ProtocolId::Vlan,
            Ok(ethertypes::IPV4) => ProtocolId::Ipv4,
            _ => ProtocolId::End,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(ethertype: u16, payload_len: usize) -> Vec<u8> {
        let mut data = vec![
            0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff, // dst
            0x00, 0x11, 0x22, 0x33, 0x44, 0x55, // src
        ];
        data.extend_from_slice(&ethertype.to_be_bytes());
        data.resize(14 + payload_len, 0);
        data
    }

    #[test]
    fn test_validate_minimum_size() {
        let data = frame(0x0800, 0);
        assert!(Ethernet::validate_packet(&Cursor::new(&data)));
        assert!(!Ethernet::validate_packet(&Cursor::new(&data[..13])));
        assert!(!Ethernet::validate_packet(&Cursor::new(&[])));
    }

    #[test]
    fn test_next_protocol_mapping() {
        let ipv4 = frame(0x0800, 0);
        assert_eq!(
            Ethernet::next_protocol(&Cursor::new(&ipv4)),
            ProtocolId::Ipv4
        );

        let vlan = frame(0x8100, 0);
        assert_eq!(
            Ethernet::next_protocol(&Cursor::new(&vlan)),
            ProtocolId::Vlan
        );

        let arp = frame(0x0806, 0);
        assert_eq!(Ethernet::next_protocol(&Cursor::new(&arp)), ProtocolId::End);

        // 802.3 length field instead of an ethertype
        let llc = frame(0x0040, 0);
        assert_eq!(Ethernet::next_protocol(&Cursor::new(&llc)), ProtocolId::End);
    }

    #[test]
    fn test_payload_clipped_to_remaining() {
        let data = frame(0x0800, 30);
        let cur = Cursor::new(&data);
        assert_eq!(Ethernet::header_len(&cur), 14);
        assert_eq!(Ethernet::payload_len(&cur), 30);
    }
}
