//! UDP layer decoding

use pktstack_core::ProtocolId;

use crate::cursor::Cursor;
use crate::layer::Layer;

/// UDP layer operations.
pub struct Udp;

impl Udp {
    /// Header size: ports, length, checksum.
    pub const HEADER_LEN: usize = 8;

    const LENGTH_OFFSET: usize = 4;

    /// Datagram length (header + data) declared by the header.
    fn declared_len(cur: &Cursor<'_>) -> usize {
        cur.peek_u16(Self::LENGTH_OFFSET)
            .map(usize::from)
            .unwrap_or(0)
    }
}

impl Layer for Udp {
    fn validate_packet(cur: &Cursor<'_>) -> bool {
        Self::validate_header(cur) && Self::declared_len(cur) <= cur.remaining()
    }

    fn validate_header(cur: &Cursor<'_>) -> bool {
        cur.remaining() >= Self::HEADER_LEN && Self::declared_len(cur) >= Self::HEADER_LEN
    }

    fn header_len(_cur: &Cursor<'_>) -> usize {
        Self::HEADER_LEN
    }

    fn payload_len(cur: &Cursor<'_>) -> usize {
        Self::declared_len(cur).saturating_sub(Self::HEADER_LEN)
    }

    /// UDP is the innermost decodable layer; its payload is opaque.
    fn next_protocol(_cur: &Cursor<'_>) -> ProtocolId {
        ProtocolId::End
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datagram(length: u16, actual_payload: usize) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&12345u16.to_be_bytes());
        data.extend_from_slice(&53u16.to_be_bytes());
        data.extend_from_slice(&length.to_be_bytes());
        data.extend_from_slice(&0u16.to_be_bytes());
        data.extend_from_slice(&vec![0u8; actual_payload]);
        data
    }

    #[test]
    fn test_validate_zero_payload() {
        let data = datagram(8, 0);
        let cur = Cursor::new(&data);
        assert!(Udp::validate_packet(&cur));
        assert_eq!(Udp::payload_len(&cur), 0);
    }

    #[test]
    fn test_validate_rejects_short_length_field() {
        // length field below the header size is structurally invalid
        let data = datagram(7, 0);
        assert!(!Udp::validate_packet(&Cursor::new(&data)));
        assert!(!Udp::validate_header(&Cursor::new(&data)));
    }

    #[test]
    fn test_validate_rejects_length_past_buffer() {
        let data = datagram(32, 8);
        assert!(!Udp::validate_packet(&Cursor::new(&data)));
        // header-only flavor tolerates the missing payload bytes
        assert!(Udp::validate_header(&Cursor::new(&data)));
    }

    #[test]
    fn test_payload_len_from_length_field() {
        // 4 trailing bytes beyond the declared datagram are padding
        let data = datagram(20, 16);
        let cur = Cursor::new(&data);
        assert!(Udp::validate_packet(&cur));
        assert_eq!(Udp::payload_len(&cur), 12);
    }

    #[test]
    fn test_terminal_layer() {
        let data = datagram(8, 0);
        assert_eq!(Udp::next_protocol(&Cursor::new(&data)), ProtocolId::End);
    }
}
