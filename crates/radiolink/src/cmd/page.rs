use radiolink_dispatch::build_page_message;

use crate::cmd::{emit_frame, PageArgs};
use crate::exit::{dispatch_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

pub fn run(args: PageArgs, format: OutputFormat) -> CliResult<i32> {
    let wire = build_page_message(&args.calling, &args.called, args.retransmit, &args.via)
        .map_err(|err| dispatch_error("build failed", err))?;
    tracing::debug!(
        calling = %args.calling,
        called = %args.called,
        via = %args.via,
        bytes = wire.len(),
        "built page message"
    );
    emit_frame(&wire, args.out.as_deref(), format)?;
    Ok(SUCCESS)
}
