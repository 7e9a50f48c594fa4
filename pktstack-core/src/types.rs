//! Common types used throughout pktstack

use std::fmt;
use std::str::FromStr;

/// Identifier of a protocol layer the decoder understands.
///
/// The set is closed: exactly six decodable layers plus the [`End`]
/// sentinel. `End` terminates traversal both when the stack is fully
/// decoded and when a layer fails validation; callers that need to tell
/// the two apart consult [`Outcome`].
///
/// [`End`]: ProtocolId::End
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolId {
    /// Ethernet II frame (layer 2)
    Ethernet,
    /// 802.1Q VLAN tag (layer 2)
    Vlan,
    /// IPv4 (layer 3)
    Ipv4,
    /// GRE tunnel (layer 3 encapsulation)
    Gre,
    /// UDP (layer 4)
    Udp,
    /// SCTP (layer 4)
    Sctp,
    /// Terminal sentinel: no further decodable layer
    End,
}

impl ProtocolId {
    /// Whether this is the terminal sentinel.
    pub fn is_end(&self) -> bool {
        matches!(self, ProtocolId::End)
    }
}

impl fmt::Display for ProtocolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProtocolId::Ethernet => "ethernet",
            ProtocolId::Vlan => "vlan",
            ProtocolId::Ipv4 => "ipv4",
            ProtocolId::Gre => "gre",
            ProtocolId::Udp => "udp",
            ProtocolId::Sctp => "sctp",
            ProtocolId::End => "end",
        };
        f.write_str(name)
    }
}

impl FromStr for ProtocolId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ethernet" | "eth" => Ok(ProtocolId::Ethernet),
            "vlan" | "dot1q" => Ok(ProtocolId::Vlan),
            "ipv4" | "ip" => Ok(ProtocolId::Ipv4),
            "gre" => Ok(ProtocolId::Gre),
            "udp" => Ok(ProtocolId::Udp),
            "sctp" => Ok(ProtocolId::Sctp),
            other => Err(crate::Error::invalid_input(format!(
                "unknown protocol '{}'",
                other
            ))),
        }
    }
}

/// Classification of the most recent parser step.
///
/// `protocol() == ProtocolId::End` stays the single observable sentinel
/// for "traversal is over"; this enum records *why* without changing any
/// decode behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The named layer validated successfully and is the current layer.
    Decoded(ProtocolId),
    /// Traversal ended cleanly: the last layer carries no recognized
    /// next protocol.
    EndOfStack,
    /// The named candidate layer failed validation; traversal aborted.
    Rejected(ProtocolId),
}

impl Outcome {
    /// Whether the last step produced a decodable layer.
    pub fn is_decoded(&self) -> bool {
        matches!(self, Outcome::Decoded(_))
    }
}

/// Ethertype constants
pub mod ethertypes {
    pub const IPV4: u16 = 0x0800;
    pub const DOT1Q: u16 = 0x8100;
    /// Transparent Ethernet bridging (Ethernet carried inside GRE)
    pub const TEB: u16 = 0x6558;
}

/// IPv4 protocol number constants
pub mod ip_protocols {
    pub const UDP: u8 = 17;
    pub const GRE: u8 = 47;
    pub const SCTP: u8 = 132;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_id_from_str() {
        assert_eq!("ethernet".parse::<ProtocolId>().unwrap(), ProtocolId::Ethernet);
        assert_eq!("dot1q".parse::<ProtocolId>().unwrap(), ProtocolId::Vlan);
        assert_eq!("IPv4".parse::<ProtocolId>().unwrap(), ProtocolId::Ipv4);
        assert!("end".parse::<ProtocolId>().is_err());
        assert!("mpls".parse::<ProtocolId>().is_err());
    }

    #[test]
    fn test_protocol_id_display() {
        assert_eq!(ProtocolId::Sctp.to_string(), "sctp");
        assert_eq!(ProtocolId::End.to_string(), "end");
    }

    #[test]
    fn test_outcome_classification() {
        assert!(Outcome::Decoded(ProtocolId::Udp).is_decoded());
        assert!(!Outcome::EndOfStack.is_decoded());
        assert!(!Outcome::Rejected(ProtocolId::Ipv4).is_decoded());
    }
}
