use std::io::Read;
use std::path::Path;

use radiolink_frame::{HEADER_SIZE, MAX_PAYLOAD};

use crate::exit::{io_error, CliError, CliResult, DATA_INVALID, USAGE};

/// Largest input accepted from a file or stdin: one maximal frame.
const MAX_INPUT: usize = HEADER_SIZE + MAX_PAYLOAD;

/// Load a received buffer from `--hex`, a file, or stdin (`-` or no path).
pub fn read_input(path: Option<&Path>, hex_input: Option<&str>) -> CliResult<Vec<u8>> {
    if let Some(text) = hex_input {
        return decode_hex(text);
    }

    let limit = (MAX_INPUT as u64).saturating_add(1);
    let mut data = Vec::new();
    match path {
        Some(path) if path != Path::new("-") => {
            let file = std::fs::File::open(path)
                .map_err(|err| io_error(&format!("failed opening {}", path.display()), err))?;
            file.take(limit)
                .read_to_end(&mut data)
                .map_err(|err| io_error(&format!("failed reading {}", path.display()), err))?;
        }
        _ => {
            std::io::stdin()
                .lock()
                .take(limit)
                .read_to_end(&mut data)
                .map_err(|err| io_error("failed reading stdin", err))?;
        }
    }

    if data.len() > MAX_INPUT {
        return Err(CliError::new(
            DATA_INVALID,
            format!("input exceeds {MAX_INPUT} bytes"),
        ));
    }
    Ok(data)
}

fn decode_hex(text: &str) -> CliResult<Vec<u8>> {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != ':')
        .collect();
    let cleaned = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);
    hex::decode(cleaned)
        .map_err(|err| CliError::new(USAGE, format!("--hex is not valid hex: {err}")))
}
