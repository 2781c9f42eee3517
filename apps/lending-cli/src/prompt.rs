//! # Prompt
//!
//! The two input capabilities the session needs ("ask for an integer", "ask
//! for a line") plus an output sink for status lines.
//!
//! `ConsolePrompt` is generic over its reader and writer so the session can
//! be driven from stdin/stdout in production and from in-memory buffers in
//! tests.
//!
//! Integers are read as whitespace-separated tokens, so `7 1` on one line
//! answers a command and the follow-up id. Whatever a line holds past the
//! last consumed token is kept for the next ask.

use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::{CliError, CliResult};

/// Line-oriented prompt/response capability.
pub trait Prompt {
    /// Shows `prompt` and reads the next whitespace-separated integer.
    ///
    /// Blank lines are skipped. A token that does not parse is
    /// [`CliError::MalformedInteger`].
    fn ask_int(&mut self, prompt: &str) -> CliResult<i64>;

    /// Shows `prompt` and reads one line, without its line terminator.
    ///
    /// Text left over on the line of a previous [`Prompt::ask_int`] is
    /// answered first.
    fn ask_line(&mut self, prompt: &str) -> CliResult<String>;

    /// Emits one status line.
    fn say(&mut self, line: &str) -> CliResult<()>;
}

/// [`Prompt`] over any buffered reader and writer.
#[derive(Debug)]
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
    /// Unconsumed remainder of the last line read by `ask_int`.
    pending: String,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    /// Creates a prompt reading from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        ConsolePrompt {
            reader,
            writer,
            pending: String::new(),
        }
    }

    /// Consumes the prompt and hands back the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> CliResult<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }
        let trimmed_len = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed_len);
        trace!(line = %line, "input line");
        Ok(line)
    }

    fn next_token(&mut self) -> CliResult<String> {
        loop {
            let rest = self.pending.trim_start();
            if !rest.is_empty() {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                let token = rest[..end].to_string();
                self.pending = rest[end..].to_string();
                return Ok(token);
            }
            self.pending = self.read_line()?;
        }
    }
}

impl<R: BufRead, W: Write> Prompt for ConsolePrompt<R, W> {
    fn ask_int(&mut self, prompt: &str) -> CliResult<i64> {
        self.say(prompt)?;
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| CliError::MalformedInteger { input: token })
    }

    fn ask_line(&mut self, prompt: &str) -> CliResult<String> {
        self.say(prompt)?;
        let rest = std::mem::take(&mut self.pending);
        let rest = rest.trim_start();
        if !rest.is_empty() {
            return Ok(rest.to_string());
        }
        self.read_line()
    }

    fn say(&mut self, line: &str) -> CliResult<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>> {
        ConsolePrompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_int_skips_blank_lines() {
        let mut p = prompt("\n  \n 42 \n");
        assert_eq!(p.ask_int("Number?").unwrap(), 42);

        let out = String::from_utf8(p.into_writer()).unwrap();
        assert_eq!(out, "Number?\n");
    }

    #[test]
    fn test_ask_int_negative_and_malformed() {
        let mut p = prompt("-7\nseven\n");
        assert_eq!(p.ask_int("?").unwrap(), -7);
        assert!(matches!(
            p.ask_int("?"),
            Err(CliError::MalformedInteger { ref input }) if input == "seven"
        ));
    }

    #[test]
    fn test_ask_int_reads_tokens_across_one_line() {
        let mut p = prompt("7 1\n\t8   -2 \n");
        assert_eq!(p.ask_int("Choice?").unwrap(), 7);
        assert_eq!(p.ask_int("Id?").unwrap(), 1);
        assert_eq!(p.ask_int("Choice?").unwrap(), 8);
        assert_eq!(p.ask_int("Id?").unwrap(), -2);
        assert!(matches!(p.ask_int("?"), Err(CliError::EndOfInput)));
    }

    #[test]
    fn test_malformed_token_after_valid_one() {
        let mut p = prompt("2 x\n");
        assert_eq!(p.ask_int("?").unwrap(), 2);
        assert!(matches!(
            p.ask_int("?"),
            Err(CliError::MalformedInteger { ref input }) if input == "x"
        ));
    }

    #[test]
    fn test_ask_line_takes_rest_of_int_line() {
        let mut p = prompt("3 The Hobbit\n5\nAlice\n");
        assert_eq!(p.ask_int("Choice?").unwrap(), 3);
        assert_eq!(p.ask_line("Title?").unwrap(), "The Hobbit");
        assert_eq!(p.ask_int("Choice?").unwrap(), 5);
        assert_eq!(p.ask_line("Name?").unwrap(), "Alice");
    }

    #[test]
    fn test_ask_line_keeps_inner_whitespace() {
        let mut p = prompt("  The Hobbit \r\n\n");
        assert_eq!(p.ask_line("Title?").unwrap(), "  The Hobbit ");
        assert_eq!(p.ask_line("Title?").unwrap(), "");
    }

    #[test]
    fn test_end_of_input() {
        let mut p = prompt("");
        assert!(matches!(p.ask_line("?"), Err(CliError::EndOfInput)));
        assert!(matches!(p.ask_int("?"), Err(CliError::EndOfInput)));
    }
}
