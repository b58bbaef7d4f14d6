use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use radiolink_frame::{decode_frame, MAX_PAYLOAD};

use crate::exit::{frame_error, io_error, CliResult};
use crate::output::{print_built_frame, OutputFormat};

pub mod decode;
pub mod envinfo;
pub mod legacy;
pub mod page;
pub mod repeater;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a page message frame.
    Page(PageArgs),
    /// Build a repeater info frame from a directory file.
    RepeaterInfo(RepeaterInfoArgs),
    /// Decode and dispatch one received frame.
    Decode(DecodeArgs),
    /// Decode a tag-prefixed channel/user record (no CRC, not dispatched).
    LegacyDecode(LegacyDecodeArgs),
    /// Show version information.
    Version(VersionArgs),
    /// Print build and environment diagnostics.
    Envinfo(EnvinfoArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Page(args) => page::run(args, format),
        Command::RepeaterInfo(args) => repeater::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::LegacyDecode(args) => legacy::run(args, format),
        Command::Version(args) => version::run(args),
        Command::Envinfo(args) => envinfo::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct PageArgs {
    /// Calling station callsign.
    #[arg(long = "from", value_name = "CALLSIGN")]
    pub calling: String,
    /// Called station callsign.
    #[arg(long = "to", value_name = "CALLSIGN")]
    pub called: String,
    /// Ask the receiving node to retransmit the page.
    #[arg(long)]
    pub retransmit: bool,
    /// Relaying node callsign.
    #[arg(long, value_name = "CALLSIGN", default_value = "")]
    pub via: String,
    /// Write the raw frame to a file instead of printing it.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct RepeaterInfoArgs {
    /// Directory snapshot (JSON with `channels` and `users`).
    #[arg(long, value_name = "FILE", env = "RADIOLINK_DIRECTORY")]
    pub directory: PathBuf,
    /// Write the raw frame to a file instead of printing it.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// File holding one frame. Reads stdin when omitted or `-`.
    #[arg(conflicts_with = "hex")]
    pub input: Option<PathBuf>,
    /// Frame bytes as hex.
    #[arg(long)]
    pub hex: Option<String>,
    /// Lower the accepted payload bound (bytes, at most 1 MiB).
    #[arg(long, value_name = "BYTES", default_value_t = MAX_PAYLOAD)]
    pub max_payload: usize,
}

#[derive(Args, Debug)]
pub struct LegacyDecodeArgs {
    /// File holding one tagged record. Reads stdin when omitted or `-`.
    #[arg(conflicts_with = "hex")]
    pub input: Option<PathBuf>,
    /// Tagged record bytes as hex.
    #[arg(long)]
    pub hex: Option<String>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug, Default)]
pub struct EnvinfoArgs {}

/// Emit a freshly built frame to `out` or stdout.
pub(crate) fn emit_frame(wire: &Bytes, out: Option<&Path>, format: OutputFormat) -> CliResult<()> {
    if let Some(path) = out {
        std::fs::write(path, wire)
            .map_err(|err| io_error(&format!("failed writing {}", path.display()), err))?;
        tracing::info!(path = %path.display(), bytes = wire.len(), "frame written");
        return Ok(());
    }

    let frame =
        decode_frame(wire, MAX_PAYLOAD).map_err(|err| frame_error("built frame invalid", err))?;
    print_built_frame(&frame, wire, format);
    Ok(())
}
