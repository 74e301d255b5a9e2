use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::commands::{dispatch, parse_input, Context, Reply};

pub struct Session<'a> {
    pub greeting: &'a str,
    pub prompt: &'a str,
}

/// Reads commands line by line until `exit`/`close` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &Session<'_>,
    ctx: &mut Context<'_>,
    mut input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}", session.greeting)?;
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", session.prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            debug!("end of input");
            writeln!(output)?;
            writeln!(output, "Good bye!")?;
            return Ok(());
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            debug!(bytes = buf.len(), "line is not valid UTF-8");
            writeln!(output, "Invalid command.")?;
            continue;
        };
        let Some((command, args)) = parse_input(line) else {
            continue;
        };

        match dispatch(ctx, command, &args) {
            Reply::Continue(message) => writeln!(output, "{message}")?,
            Reply::Exit(message) => {
                writeln!(output, "{message}")?;
                return Ok(());
            }
        }
    }
}
