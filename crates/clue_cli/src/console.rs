//! Stdin/stdout prompt helpers. Invalid input never fails a turn; every
//! validated prompt re-asks with an explanatory message.

use std::io::{self, Write};

use anyhow::{Context, Result};

pub fn read_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("reading from stdin")?;
    Ok(line.trim().to_string())
}

/// Prints `message` on its own line and waits for ENTER.
pub fn pause(message: &str) -> Result<()> {
    println!("{message}");
    read_line().map(|_| ())
}

/// Prints `message` without a newline and reads the answer.
pub fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("flushing stdout")?;
    read_line()
}

/// Asks until `parse` accepts the input, printing `retry` after each miss.
pub fn prompt_until<T>(
    message: &str,
    mut parse: impl FnMut(&str) -> Option<T>,
    retry: &str,
) -> Result<T> {
    loop {
        let answer = prompt(message)?;
        if let Some(value) = parse(&answer) {
            return Ok(value);
        }
        println!("{retry}");
    }
}
