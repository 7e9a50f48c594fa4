//! 802.1Q VLAN tag layer decoding
//!
//! When the enclosing frame announces ethertype 0x8100, the four bytes
//! that follow form their own layer: two bytes of TCI and the ethertype
//! of the encapsulated protocol.
//!
//! TCI format:
//! ```text
//! | PCP (3 bits) | DEI (1 bit) | VID (12 bits) |
//! ```

use pktstack_core::{ethertypes, ProtocolId};

use crate::cursor::Cursor;
use crate::layer::Layer;

/// 802.1Q VLAN tag layer operations.
pub struct Vlan;

impl Vlan {
    /// Tag size: TCI + encapsulated ethertype.
    pub const HEADER_LEN: usize = 4;

    /// Offset of the encapsulated ethertype within the tag.
    const ETHERTYPE_OFFSET: usize = 2;
}

impl Layer for Vlan {
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

    fn next_protocol(cur: &Cursor<'_>) -> ProtocolId {
        match cur.peek_u16(Self::ETHERTYPE_OFFSET) {
            // stacked tags (Q-in-Q)
            Ok(ethertypes::DOT1Q) => ProtocolId::Vlan,
            Ok(ethertypes::IPV4) => ProtocolId::Ipv4,
            _ => ProtocolId::End,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(inner_ethertype: u16) -> Vec<u8> {
        // priority 3, VID 100
        let mut data = vec![0x60, 0x64];
        data.extend_from_slice(&inner_ethertype.to_be_bytes());
        data
    }

    #[test]
    fn test_validate_minimum_size() {
        let data = tag(0x0800);
        assert!(Vlan::validate_packet(&Cursor::new(&data)));
        assert!(!Vlan::validate_packet(&Cursor::new(&data[..3])));
    }

    #[test]
    fn test_next_protocol_mapping() {
        assert_eq!(
            Vlan::next_protocol(&Cursor::new(&tag(0x0800))),
            ProtocolId::Ipv4
        );
        assert_eq!(
            Vlan::next_protocol(&Cursor::new(&tag(0x8100))),
            ProtocolId::Vlan
        );
        assert_eq!(
            Vlan::next_protocol(&Cursor::new(&tag(0x86dd))),
            ProtocolId::End
        );
    }

    #[test]
    fn test_lengths() {
        let mut data = tag(0x0800);
        data.extend_from_slice(&[0u8; 20]);
        let cur = Cursor::new(&data);
        assert_eq!(Vlan::header_len(&cur), 4);
        assert_eq!(Vlan::payload_len(&cur), 20);
    }
}
