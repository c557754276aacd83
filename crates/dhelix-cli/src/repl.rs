//! Read-eval-print loop over stdin/stdout.

use std::io::{self, BufRead, Write};

use dhelix_core::config::{BANNER, TAGLINE};
use dhelix_core::{CommandOutput, Reply, Session, SideEffect};

/// ANSI sequence that clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Words that end the loop without going through the interpreter.
const EXIT_WORDS: &[&str] = &["exit", "quit"];

/// Render a reply as the text to print.
pub fn render(reply: &Reply) -> String {
    match reply {
        Ok(CommandOutput::Effect { effect, message }) => {
            let mut out = match effect {
                SideEffect::Clear => CLEAR_SCREEN.to_string(),
                SideEffect::Open { target } => format!("open: {}\n", target),
            };
            if let Some(message) = message {
                out.push_str(message);
                out.push('\n');
            }
            out
        }
        Ok(output) => output
            .lines()
            .into_iter()
            .map(|line| line + "\n")
            .collect(),
        Err(e) => format!("{}\n", e),
    }
}

/// Drive `session` from `input` until EOF or an exit word.
///
/// Lines that are not valid UTF-8 are decoded lossily and submitted like any
/// other line.
pub fn run<R: BufRead, W: Write>(
    mut session: Session,
    banner: bool,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    if banner {
        writeln!(output, "{}{}", BANNER, TAGLINE)?;
    }

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", session.prompt())?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&buf);

        if EXIT_WORDS.contains(&line.trim()) {
            return Ok(());
        }

        let reply = session.submit(&line);
        write!(output, "{}", render(&reply))?;
    }
}
