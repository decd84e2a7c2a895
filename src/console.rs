//! Prompts, banner, and screen clearing
//!
//! Everything takes generic `BufRead`/`Write` handles so the loop can be
//! scripted in tests with in-memory buffers.

use std::io::{self, BufRead, Write};

/// ASCII-art banner shown at startup and at the top of each round
const BANNER: &str = r#"  __ _ _   _  ___  ___ ___
 / _` | | | |/ _ \/ __/ __|
| (_| | |_| |  __/\__ \__ \
 \__, |\__,_|\___||___/___/
  __/ |
 |___/"#;

/// Print the banner and welcome line
pub fn banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "WELCOME TO THE NUMBER GUESSING GAME")
}

/// Clear the terminal and home the cursor.
///
/// Plain ANSI escape; on a non-terminal writer it is a harmless no-op
/// cosmetically.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[1;1H")
}

/// Print `prompt`, flush, and read one line.
///
/// Returns `Ok(None)` on end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
