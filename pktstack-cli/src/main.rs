//! pktstack command-line demonstrator
//!
//! Feeds a frame (hex string, file, or the built-in sample) to the stack
//! parser and reports every decoded layer.

mod args;

use std::fs;
use std::process::ExitCode;

use bytes::{BufMut, BytesMut};
use clap::Parser;
use tracing::debug;

use args::Cli;
use pktstack_core::{Error, ProtocolId, Result};
use pktstack_decode::{HeaderParser, StackParser};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let frame = load_frame(cli)?;
    debug!("loaded frame of {} bytes", frame.len());

    if cli.headers_only {
        walk_headers(&frame, cli.first);
    } else {
        walk(&frame, cli.first);
    }
    Ok(())
}

fn load_frame(cli: &Cli) -> Result<Vec<u8>> {
    if cli.demo {
        return Ok(demo_frame());
    }
    if let Some(path) = &cli.file {
        let text = fs::read_to_string(path)?;
        return parse_hex(&text);
    }
    if let Some(hex) = &cli.hex {
        return parse_hex(hex);
    }
    Err(Error::invalid_input(
        "no frame given; pass a hex string, --file, or --demo",
    ))
}

fn walk(frame: &[u8], first: ProtocolId) {
    let mut parser = StackParser::new(frame);
    if !parser.parse(first) {
        println!("outcome: {:?}", parser.outcome());
        return;
    }

    let mut depth = 1;
    loop {
        println!(
            "layer {}: {:<9} offset={:<4} header={:<4} payload={}",
            depth,
            parser.protocol().to_string(),
            parser.offset(),
            parser.header().len(),
            parser.payload().len()
        );
        if parser.next() == ProtocolId::End {
            break;
        }
        depth += 1;
    }

    println!("outcome: {:?}", parser.outcome());
    if parser.padding() > 0 {
        println!("padding: {} trailing bytes beyond the decoded stack", parser.padding());
    }
}

fn walk_headers(frame: &[u8], first: ProtocolId) {
    let mut parser = HeaderParser::new(frame);
    if !parser.parse(first) {
        println!("outcome: {:?}", parser.outcome());
        return;
    }

    let mut depth = 1;
    loop {
        println!(
            "layer {}: {:<9} header={:<4} captured payload={}",
            depth,
            parser.protocol().to_string(),
            parser.header().len(),
            parser.payload().len()
        );
        if parser.next() == ProtocolId::End {
            break;
        }
        depth += 1;
    }

    println!("outcome: {:?}", parser.outcome());
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::invalid_input("frame must be hex digits"));
    }
    if digits.len() % 2 != 0 {
        return Err(Error::invalid_input("odd number of hex digits"));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::invalid_input(format!("invalid hex byte at position {}", i / 2)))
        })
        .collect()
}

/// A UDP datagram over IPv4 over Ethernet, padded to the Ethernet
/// minimum frame size.
fn demo_frame() -> Vec<u8> {
    let payload = b"pktstack";

    let mut frame = BytesMut::new();
    frame.put_slice(&[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]); // dst MAC
    frame.put_slice(&[0x00, 0x11, 0x22, 0x33, 0x44, 0x55]); // src MAC
    frame.put_u16(0x0800); // ethertype: IPv4

    frame.put_u8(0x45); // version 4, IHL 5
    frame.put_u8(0x00);
    frame.put_u16((20 + 8 + payload.len()) as u16);
    frame.put_u16(0x0000);
    frame.put_u16(0x0000);
    frame.put_u8(64); // ttl
    frame.put_u8(17); // protocol: UDP
    frame.put_u16(0x0000);
    frame.put_slice(&[192, 168, 1, 100]);
    frame.put_slice(&[192, 168, 1, 1]);

    frame.put_u16(54321);
    frame.put_u16(53);
    frame.put_u16((8 + payload.len()) as u16);
    frame.put_u16(0x0000);
    frame.put_slice(payload);

    if frame.len() < 60 {
        frame.resize(60, 0); // link-layer minimum-frame padding
    }
    frame.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("dead beef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(parse_hex("0800\n45").unwrap(), vec![0x08, 0x00, 0x45]);
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
        assert!(parse_hex("").unwrap().is_empty());
    }

    #[test]
    fn test_demo_frame_decodes() {
        let frame = demo_frame();
        let mut parser = StackParser::new(&frame);
        assert!(parser.parse(ProtocolId::Ethernet));
        assert_eq!(parser.next(), ProtocolId::Ipv4);
        assert_eq!(parser.next(), ProtocolId::Udp);
        assert_eq!(parser.payload(), b"pktstack");
        assert_eq!(parser.next(), ProtocolId::End);
        assert!(parser.padding() > 0);
    }
}
