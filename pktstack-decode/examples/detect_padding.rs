//! Example: Detecting link-layer padding
//!
//! Ethernet pads short frames up to the 60-byte minimum. The padding
//! bytes sit inside the buffer but beyond what the decoded stack
//! declares as consumed; the parser surfaces them via `padding()`.

use bytes::{BufMut, BytesMut};
use pktstack_decode::{ProtocolId, StackParser};

fn main() {
    // A UDP datagram with a 2-byte payload: 44 bytes of real frame,
    // padded to the 60-byte Ethernet minimum.
    let mut frame = BytesMut::new();
    frame.put_slice(&[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
    frame.put_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
    frame.put_u16(0x0800);

    frame.put_u8(0x45);
    frame.put_u8(0x00);
    frame.put_u16(20 + 8 + 2);
    frame.put_u16(0x0000);
    frame.put_u16(0x0000);
    frame.put_u8(64);
    frame.put_u8(17);
    frame.put_u16(0x0000);
    frame.put_slice(&[10, 0, 0, 1]);
    frame.put_slice(&[10, 0, 0, 2]);

    frame.put_u16(2000);
    frame.put_u16(2001);
    frame.put_u16(8 + 2);
    frame.put_u16(0x0000);
    frame.put_slice(&[0x13, 0x37]);

    frame.resize(60, 0); // link-layer minimum-frame padding

    let mut parser = StackParser::new(&frame);
    parser.parse(ProtocolId::Ethernet);

    loop {
        println!(
            "{:<8} payload={:<3} padding={}",
            parser.protocol().to_string(),
            parser.payload().len(),
            parser.padding()
        );
        if parser.next() == ProtocolId::End {
            break;
        }
    }
}
