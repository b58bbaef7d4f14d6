use radiolink_dispatch::{build_repeater_info, DirectorySnapshot};

use crate::cmd::{emit_frame, RepeaterInfoArgs};
use crate::exit::{dispatch_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

pub fn run(args: RepeaterInfoArgs, format: OutputFormat) -> CliResult<i32> {
    let snapshot = DirectorySnapshot::from_json_file(&args.directory)
        .map_err(|err| dispatch_error("directory load failed", err))?;
    let wire = build_repeater_info(&snapshot).map_err(|err| dispatch_error("build failed", err))?;
    emit_frame(&wire, args.out.as_deref(), format)?;
    Ok(SUCCESS)
}
