use std::io::{self, BufRead, Write};

/// The exact answer that lets a destructive run proceed.
pub const CONFIRMATION_TOKEN: &str = "yes";

pub const PROMPT: &str = "Running this script will DESTROY existing data. Type \"yes\" to continue.";

/// Asks the operator to confirm that existing data may be destroyed.
///
/// Reads a single line and returns `true` only for an exact, case-sensitive
/// match of [`CONFIRMATION_TOKEN`]. Only the line terminator is stripped.
/// End of input is a refusal.
pub fn confirm<R: BufRead, W: Write>(mut input: R, output: &mut W) -> io::Result<bool> {
    writeln!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }

    Ok(answer.trim_end_matches(['\n', '\r']) == CONFIRMATION_TOKEN)
}
