//! CLI argument parsing

use clap::Parser;
use pktstack_core::ProtocolId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pktstack")]
#[command(version, about = "Layered packet-stack decoder", long_about = None)]
pub struct Cli {
    /// Frame bytes as a hex string (whitespace ignored)
    #[arg(value_name = "HEX")]
    pub hex: Option<String>,

    /// Read the hex frame from a file instead
    #[arg(short, long, value_name = "PATH", conflicts_with = "hex")]
    pub file: Option<PathBuf>,

    /// First protocol of the stack
    #[arg(long, value_name = "PROTOCOL", default_value = "ethernet")]
    pub first: ProtocolId,

    /// Decode a built-in UDP-over-IPv4-over-Ethernet sample frame
    #[arg(long, conflicts_with_all = ["hex", "file"])]
    pub demo: bool,

    /// Validate headers only (for captures with a short snap length)
    #[arg(long)]
    pub headers_only: bool,

    /// Verbose output (-v, -vv for increasing verbosity)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
