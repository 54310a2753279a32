//! Interactive revision prompts

use std::io::{self, Write};

/// Outcome of one interactive prompt
///
/// An abort is a normal way out of the pipeline, not an error: the run ends
/// quietly with nothing printed.
#[derive(Debug)]
pub enum Prompt {
    /// The user entered a line (trailing newline stripped)
    Line(String),
    /// Input ended (EOF) before a line was entered
    Aborted,
}

/// Write a prompt to stderr and read one line from stdin
///
/// Prompts go to stderr so stdout carries nothing but the final output.
pub fn read_line(prompt: &str) -> io::Result<Prompt> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(Prompt::Aborted);
    }

    Ok(Prompt::Line(
        input.trim_end_matches(['\r', '\n']).to_string(),
    ))
}
