//! Console interface - blocking line reader and output streams
//!
//! Generic over the input/output handles so sessions can be driven from
//! in-memory buffers in tests. I/O failure and termination messages go to
//! the error stream; everything else goes to the standard stream.

pub mod menu;
pub mod messages;
pub mod progress;
pub mod upcoming;

use std::io::{self, BufRead, BufReader, ErrorKind, Stderr, Stdin, Stdout, Write};

pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

impl Console<BufReader<Stdin>, Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self {
            input: BufReader::new(io::stdin()),
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Read one command line, trimmed of leading and trailing whitespace.
    /// A closed input stream yields `ErrorKind::UnexpectedEof`, which
    /// signals session termination.
    pub fn read_command(&mut self) -> io::Result<String> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Write one line to the standard stream
    pub fn show(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", text.as_ref())
    }

    /// Write one line to the error stream
    pub fn show_err(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.err, "{}", text.as_ref())
    }

    /// Consume the console and hand back the output streams, for tests
    /// that capture into in-memory buffers
    pub fn into_streams(self) -> (W, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console_from(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
    }

    #[test]
    fn test_read_command_trims_whitespace() {
        let mut console = console_from("  find jason  \n");
        assert_eq!(console.read_command().unwrap(), "find jason");
    }

    #[test]
    fn test_read_command_reads_one_line_per_call() {
        let mut console = console_from("first\nsecond\n");
        assert_eq!(console.read_command().unwrap(), "first");
        assert_eq!(console.read_command().unwrap(), "second");
    }

    #[test]
    fn test_read_command_eof_is_unexpected_eof() {
        let mut console = console_from("");
        let err = console.read_command().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_show_and_show_err_target_their_streams() {
        let mut console = console_from("");
        console.show("to stdout").unwrap();
        console.show_err("to stderr").unwrap();

        let (out, err) = console.into_streams();
        assert_eq!(String::from_utf8(out).unwrap(), "to stdout\n");
        assert_eq!(String::from_utf8(err).unwrap(), "to stderr\n");
    }
}
