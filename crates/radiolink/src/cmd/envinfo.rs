use std::collections::BTreeMap;

use radiolink_frame::crc::CHECK_VALUE;
use radiolink_frame::{message_type_name, HEADER_SIZE, MAX_PAYLOAD, PAGE_MESSAGE, REPEATER_INFO};
use serde::Serialize;

use crate::cmd::EnvinfoArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

const ENV_KEYS: [&str; 3] = ["RADIOLINK_DIRECTORY", "RADIOLINK_LOG_LEVEL", "RUST_LOG"];

/// Wire constants a peer has to agree on.
#[derive(Serialize)]
struct ProtocolInfo {
    header_size: usize,
    max_payload: usize,
    crc32_variant: &'static str,
    crc32_check: String,
    record_encoding: &'static str,
    message_types: BTreeMap<i32, &'static str>,
}

#[derive(Serialize)]
struct EnvInfoOutput {
    version: &'static str,
    target: String,
    features: Vec<&'static str>,
    protocol: ProtocolInfo,
    environment: BTreeMap<&'static str, Option<String>>,
}

pub fn run(_args: EnvinfoArgs, format: OutputFormat) -> CliResult<i32> {
    let output = EnvInfoOutput {
        version: env!("CARGO_PKG_VERSION"),
        target: option_env!("RADIOLINK_BUILD_TARGET")
            .map(str::to_string)
            .unwrap_or_else(|| {
                format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS)
            }),
        features: enabled_features(),
        protocol: protocol_info(),
        environment: ENV_KEYS
            .iter()
            .map(|&key| (key, std::env::var(key).ok()))
            .collect(),
    };

    print_envinfo(&output, format);
    Ok(SUCCESS)
}

fn enabled_features() -> Vec<&'static str> {
    let mut features = Vec::new();
    if cfg!(feature = "cli") {
        features.push("cli");
    }
    features
}

fn protocol_info() -> ProtocolInfo {
    ProtocolInfo {
        header_size: HEADER_SIZE,
        max_payload: MAX_PAYLOAD,
        crc32_variant: "CRC-32/ISO-HDLC",
        crc32_check: format!("{CHECK_VALUE:#010x}"),
        record_encoding: "protobuf (proto3)",
        message_types: [PAGE_MESSAGE, REPEATER_INFO]
            .into_iter()
            .map(|code| (code, message_type_name(code)))
            .collect(),
    }
}

fn print_envinfo(output: &EnvInfoOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(output).unwrap_or_else(|_| "{}".to_string())
        ),
        OutputFormat::Table | OutputFormat::Pretty => {
            let protocol = &output.protocol;
            println!("radiolink {} ({})", output.version, output.target);
            println!("  features: {}", output.features.join(", "));
            println!(
                "  frame:    {}-byte header, payload up to {} bytes",
                protocol.header_size, protocol.max_payload
            );
            println!(
                "  checksum: {} (check {})",
                protocol.crc32_variant, protocol.crc32_check
            );
            println!("  records:  {}", protocol.record_encoding);
            for (code, name) in &protocol.message_types {
                println!("    {code:>4}  {name}");
            }
            for (key, value) in &output.environment {
                println!("  {key}={}", value.as_deref().unwrap_or(""));
            }
        }
        OutputFormat::Raw | OutputFormat::Hex => println!("{}", output.version),
    }
}
