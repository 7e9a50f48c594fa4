//! Example: Walking a UDP-over-IPv4-over-Ethernet frame
//!
//! This example demonstrates how to use the pktstack-decode crate to
//! traverse the protocol stack of a captured frame layer by layer.

use bytes::{BufMut, BytesMut};
use pktstack_decode::{ProtocolId, StackParser};

fn main() {
    // Assemble a small frame: Ethernet / IPv4 / UDP with a 4-byte payload
    let mut frame = BytesMut::new();
    frame.put_slice(&[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]); // dst MAC
    frame.put_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]); // src MAC
    frame.put_u16(0x0800); // ethertype: IPv4

    frame.put_u8(0x45); // version 4, IHL 5
    frame.put_u8(0x00);
    frame.put_u16(20 + 8 + 4); // total length
    frame.put_u16(0x0000);
    frame.put_u16(0x0000);
    frame.put_u8(64); // ttl
    frame.put_u8(17); // protocol: UDP
    frame.put_u16(0x0000);
    frame.put_slice(&[192, 168, 1, 100]);
    frame.put_slice(&[192, 168, 1, 1]);

    frame.put_u16(54321); // source port
    frame.put_u16(53); // destination port
    frame.put_u16(8 + 4); // length
    frame.put_u16(0x0000);
    frame.put_slice(&[0xde, 0xad, 0xbe, 0xef]);

    let mut parser = StackParser::new(&frame);
    if !parser.parse(ProtocolId::Ethernet) {
        println!("frame rejected: {:?}", parser.outcome());
        return;
    }

    loop {
        println!(
            "{:<8} offset={:<3} header={:<3} payload={}",
            parser.protocol().to_string(),
            parser.offset(),
            parser.header().len(),
            parser.payload().len()
        );
        if parser.next() == ProtocolId::End {
            break;
        }
    }

    println!("outcome: {:?}", parser.outcome());
}
