//! Protocol-stack traversal
//!
//! [`StackParser`] walks the encapsulation layers of one complete packet
//! held in a caller-owned buffer. At every step it sits at the start of
//! the current layer's header and exposes three borrowed views:
//!
//! ```text
//! |--Ethernet--|----VLAN----|--IPv4----|----UDP----|--padding--|
//! |-header()---|
//!              |-payload()-------------------------------------|
//! |-packet()---------------------------------------------------|
//! ```
//!
//! After `next()` the same views describe the VLAN layer, and so on,
//! until the stack is exhausted or a layer fails validation. Both are
//! reported as [`ProtocolId::End`], with [`StackParser::outcome`]
//! recording which of the two happened.
//!
//! [`HeaderParser`] is the sibling for captures truncated to headers
//! (short snaplen): it validates header structure only and clips payload
//! views to the bytes actually present.

use pktstack_core::{Outcome, ProtocolId};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::layer;

/// Stack parser over a complete packet.
///
/// The buffer must hold the whole packet (trailing link-layer padding is
/// fine); every declared length is cross-checked against it. The parser
/// never allocates and never copies packet bytes.
#[derive(Debug, Clone)]
pub struct StackParser<'a> {
    cursor: Cursor<'a>,
    proto: ProtocolId,
    outcome: Outcome,
    padding: usize,
}

impl<'a> StackParser<'a> {
    /// Create a parser over `buf` in the terminal state; call
    /// [`parse`](StackParser::parse) to anchor the first layer.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buf),
            proto: ProtocolId::End,
            outcome: Outcome::EndOfStack,
            padding: 0,
        }
    }

    /// Validate and anchor the first layer of the stack.
    ///
    /// On failure the parser stays terminal. Returns whether parsing
    /// succeeded, i.e. `protocol() != ProtocolId::End`.
    pub fn parse(&mut self, first: ProtocolId) -> bool {
        if layer::validate_packet(first, &self.cursor) {
            self.enter(first);
        } else {
            self.reject(first);
        }
        self.proto != ProtocolId::End
    }

    /// Step to the next layer in the stack.
    ///
    /// Consumes the current header (the only point where the cursor
    /// moves), then validates the candidate layer at the new position.
    /// Once the parser is terminal this is a no-op returning
    /// [`ProtocolId::End`].
    pub fn next(&mut self) -> ProtocolId {
        if self.proto == ProtocolId::End {
            return ProtocolId::End;
        }

        let candidate = layer::next_protocol(self.proto, &self.cursor);
        let header_len = layer::header_len(self.proto, &self.cursor);
        if self.cursor.advance(header_len).is_err() {
            // unreachable after a successful validation; fail closed
            self.reject(candidate);
            return self.proto;
        }

        if candidate == ProtocolId::End {
            trace!("end of stack at offset {}", self.cursor.position());
            self.proto = ProtocolId::End;
            self.outcome = Outcome::EndOfStack;
        } else if layer::validate_packet(candidate, &self.cursor) {
            self.enter(candidate);
        } else {
            self.reject(candidate);
        }
        self.proto
    }

    /// The current protocol in the stack.
    pub fn protocol(&self) -> ProtocolId {
        self.proto
    }

    /// Why the parser is where it is: the decoded layer, a clean end of
    /// stack, or a rejected candidate. Purely informational.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The current layer's packet: everything from the layer start to
    /// the end of the buffer, trailing padding included.
    pub fn packet(&self) -> &'a [u8] {
        self.cursor.rest()
    }

    /// The current layer's header bytes. Empty once terminal.
    pub fn header(&self) -> &'a [u8] {
        let len = layer::header_len(self.proto, &self.cursor);
        self.cursor.peek(0, len).unwrap_or(&[])
    }

    /// The current layer's payload bytes (may be empty). Empty once
    /// terminal.
    pub fn payload(&self) -> &'a [u8] {
        let header_len = layer::header_len(self.proto, &self.cursor);
        let len = layer::payload_len(self.proto, &self.cursor);
        self.cursor.peek(header_len, len).unwrap_or(&[])
    }

    /// Bytes consumed so far (debug aid).
    pub fn offset(&self) -> usize {
        self.cursor.position()
    }

    /// Bytes from the current position to the buffer end (debug aid).
    pub fn available(&self) -> usize {
        self.cursor.remaining()
    }

    /// Bytes in the buffer beyond the last decoded layer's declared
    /// `header + payload` end, i.e. link-layer trailer padding (debug aid).
    pub fn padding(&self) -> usize {
        self.padding
    }

    fn enter(&mut self, proto: ProtocolId) {
        trace!("decoded {} at offset {}", proto, self.cursor.position());
        self.proto = proto;
        self.outcome = Outcome::Decoded(proto);
        let declared = layer::header_len(proto, &self.cursor)
            + layer::payload_len(proto, &self.cursor);
        self.padding = self.cursor.remaining().saturating_sub(declared);
    }

    fn reject(&mut self, candidate: ProtocolId) {
        debug!(
            "{} failed validation at offset {} ({} bytes available)",
            candidate,
            self.cursor.position(),
            self.cursor.remaining()
        );
        self.proto = ProtocolId::End;
        self.outcome = Outcome::Rejected(candidate);
    }
}

/// Stack parser for header-only captures.
///
/// Works like [`StackParser`] but only requires each layer's *header* to
/// be present and structurally sound: declared payload bytes may be
/// missing (short snaplen), and [`payload`](HeaderParser::payload) is
/// clipped to what the buffer holds.
#[derive(Debug, Clone)]
pub struct HeaderParser<'a> {
    cursor: Cursor<'a>,
    proto: ProtocolId,
    outcome: Outcome,
}

impl<'a> HeaderParser<'a> {
    /// Create a parser over `buf` in the terminal state.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buf),
            proto: ProtocolId::End,
            outcome: Outcome::EndOfStack,
        }
    }

    /// Validate and anchor the first layer; header-only rules.
    pub fn parse(&mut self, first: ProtocolId) -> bool {
        if layer::validate_header(first, &self.cursor) {
            self.proto = first;
            self.outcome = Outcome::Decoded(first);
        } else {
            self.proto = ProtocolId::End;
            self.outcome = Outcome::Rejected(first);
        }
        self.proto != ProtocolId::End
    }

    /// Step to the next layer; header-only rules.
    pub fn next(&mut self) -> ProtocolId {
        if self.proto == ProtocolId::End {
            return ProtocolId::End;
        }

        let candidate = layer::next_protocol(self.proto, &self.cursor);
        let header_len = layer::header_len(self.proto, &self.cursor);
        if self.cursor.advance(header_len).is_err() {
            self.proto = ProtocolId::End;
            self.outcome = Outcome::Rejected(candidate);
            return self.proto;
        }

        if candidate == ProtocolId::End {
            self.proto = ProtocolId::End;
            self.outcome = Outcome::EndOfStack;
        } else if layer::validate_header(candidate, &self.cursor) {
            trace!(
                "decoded {} header at offset {}",
                candidate,
                self.cursor.position()
            );
            self.proto = candidate;
            self.outcome = Outcome::Decoded(candidate);
        } else {
            debug!(
                "{} header failed validation at offset {}",
                candidate,
                self.cursor.position()
            );
            self.proto = ProtocolId::End;
            self.outcome = Outcome::Rejected(candidate);
        }
        self.proto
    }

    /// The current protocol in the stack.
    pub fn protocol(&self) -> ProtocolId {
        self.proto
    }

    /// Classification of the most recent step.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Everything from the current layer start to the buffer end.
    pub fn packet(&self) -> &'a [u8] {
        self.cursor.rest()
    }

    /// The current layer's header bytes. Empty once terminal.
    pub fn header(&self) -> &'a [u8] {
        let len = layer::header_len(self.proto, &self.cursor);
        self.cursor.peek(0, len).unwrap_or(&[])
    }

    /// The current layer's payload, clipped to the bytes actually
    /// captured. Empty once terminal.
    pub fn payload(&self) -> &'a [u8] {
        let header_len = layer::header_len(self.proto, &self.cursor);
        let declared = layer::payload_len(self.proto, &self.cursor);
        let captured = self.cursor.remaining().saturating_sub(header_len);
        self.cursor
            .peek(header_len, declared.min(captured))
            .unwrap_or(&[])
    }
}
