use radiolink_dispatch::legacy::process_tagged_payload;

use crate::cmd::LegacyDecodeArgs;
use crate::exit::{legacy_error, CliResult, SUCCESS};
use crate::input::read_input;
use crate::output::{print_legacy, OutputFormat};

pub fn run(args: LegacyDecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let data = read_input(args.input.as_deref(), args.hex.as_deref())?;
    let record = process_tagged_payload(&data).map_err(|err| legacy_error("decode failed", err))?;
    print_legacy(&record, format);
    Ok(SUCCESS)
}
