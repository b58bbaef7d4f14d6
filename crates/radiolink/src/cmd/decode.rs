use radiolink_dispatch::{DispatchConfig, Dispatcher, NoopHandler, Outcome};

use crate::cmd::DecodeArgs;
use crate::exit::{CliResult, DATA_INVALID, SUCCESS};
use crate::input::read_input;
use crate::output::{print_outcome, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let data = read_input(args.input.as_deref(), args.hex.as_deref())?;

    let config = DispatchConfig {
        max_payload_size: args.max_payload,
        ..DispatchConfig::default()
    };
    let mut dispatcher = Dispatcher::with_config(NoopHandler, config);
    let outcome = dispatcher.process(&data);
    print_outcome(&outcome, format);

    Ok(exit_code(&outcome))
}

/// Dropped frames exit non-zero; unknown types are accepted.
fn exit_code(outcome: &Outcome) -> i32 {
    if outcome.is_dropped() {
        DATA_INVALID
    } else {
        SUCCESS
    }
}
