use radiolink_frame::{crc::CHECK_VALUE, MAX_PAYLOAD, PAGE_MESSAGE, REPEATER_INFO};

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("radiolink {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: radiolink");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!(
        "rustc: {}",
        option_env!("RUSTC_VERSION").unwrap_or("unknown")
    );
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    println!("max_payload: {MAX_PAYLOAD}");
    println!("crc32: ISO-HDLC (check {CHECK_VALUE:#010x})");
    println!("message_types: page={PAGE_MESSAGE}, repeater_info={REPEATER_INFO}");

    Ok(SUCCESS)
}
