//! Per-layer decode contract and protocol dispatch
//!
//! Each supported protocol implements [`Layer`] as a set of pure,
//! peek-only operations over the cursor, which always points at the
//! start of that layer's header. The free functions at the bottom
//! dispatch on [`ProtocolId`]: a closed match, equivalent to a jump
//! table, with no registration mechanism.

use pktstack_core::ProtocolId;

use crate::cursor::Cursor;
use crate::ethernet::Ethernet;
use crate::gre::Gre;
use crate::ipv4::Ipv4;
use crate::sctp::Sctp;
use crate::udp::Udp;
use crate::vlan::Vlan;

/// Decode operations every protocol layer provides.
///
/// All operations take the cursor by shared reference and must not
/// panic on any input. The length and next-protocol operations are only
/// meaningful after the corresponding validation has succeeded on the
/// same cursor position; on malformed input they degrade to zero /
/// [`ProtocolId::End`] rather than reading out of bounds.
pub trait Layer {
    /// Whether the full layer is present: minimum header, self-consistent
    /// variable-length fields, and declared total length within the
    /// remaining bytes.
    fn validate_packet(cur: &Cursor<'_>) -> bool;

    /// Whether the header alone is present and structurally sound,
    /// ignoring the declared payload. Used for header-only captures.
    fn validate_header(cur: &Cursor<'_>) -> bool;

    /// On-wire size of this layer's header, including variable parts.
    fn header_len(cur: &Cursor<'_>) -> usize;

    /// Bytes belonging to this layer's payload. Protocols without a
    /// total-length field clip to the remaining buffer.
    fn payload_len(cur: &Cursor<'_>) -> usize;

    /// Identify the encapsulated protocol from the already-validated
    /// header. Returns [`ProtocolId::End`] for unrecognized or terminal
    /// values.
    fn next_protocol(cur: &Cursor<'_>) -> ProtocolId;
}

pub(crate) fn validate_packet(id: ProtocolId, cur: &Cursor<'_>) -> bool {
    match id {
        ProtocolId::Ethernet => Ethernet::validate_packet(cur),
        ProtocolId::Vlan => Vlan::validate_packet(cur),
        ProtocolId::Ipv4 => Ipv4::validate_packet(cur),
        ProtocolId::Gre => Gre::validate_packet(cur),
        ProtocolId::Udp => Udp::validate_packet(cur),
        ProtocolId::Sctp => Sctp::validate_packet(cur),
        ProtocolId::End => false,
    }
}

pub(crate) fn validate_header(id: ProtocolId, cur: &Cursor<'_>) -> bool {
    match id {
        ProtocolId::Ethernet => Ethernet::validate_header(cur),
        ProtocolId::Vlan => Vlan::validate_header(cur),
        ProtocolId::Ipv4 => Ipv4::validate_header(cur),
        ProtocolId::Gre => Gre::validate_header(cur),
        ProtocolId::Udp => Udp::validate_header(cur),
        ProtocolId::Sctp => Sctp::validate_header(cur),
        ProtocolId::End => false,
    }
}

pub(crate) fn header_len(id: ProtocolId, cur: &Cursor<'_>) -> usize {
    match id {
        ProtocolId::Ethernet => Ethernet::header_len(cur),
        ProtocolId::Vlan => Vlan::header_len(cur),
        ProtocolId::Ipv4 => Ipv4::header_len(cur),
        ProtocolId::Gre => Gre::header_len(cur),
        ProtocolId::Udp => Udp::header_len(cur),
        ProtocolId::Sctp => Sctp::header_len(cur),
        ProtocolId::End => 0,
    }
}

pub(crate) fn payload_len(id: ProtocolId, cur: &Cursor<'_>) -> usize {
    match id {
        ProtocolId::Ethernet => Ethernet::payload_len(cur),
        ProtocolId::Vlan => Vlan::payload_len(cur),
        ProtocolId::Ipv4 => Ipv4::payload_len(cur),
        ProtocolId::Gre => Gre::payload_len(cur),
        ProtocolId::Udp => Udp::payload_len(cur),
        ProtocolId::Sctp => Sctp::payload_len(cur),
        ProtocolId::End => 0,
    }
}

pub(crate) fn next_protocol(id: ProtocolId, cur: &Cursor<'_>) -> ProtocolId {
    match id {
        ProtocolId::Ethernet => Ethernet::next_protocol(cur),
        ProtocolId::Vlan => Vlan::next_protocol(cur),
        ProtocolId::Ipv4 => Ipv4::next_protocol(cur),
        ProtocolId::Gre => Gre::next_protocol(cur),
        ProtocolId::Udp => Udp::next_protocol(cur),
        ProtocolId::Sctp => Sctp::next_protocol(cur),
        ProtocolId::End => ProtocolId::End,
    }
}
