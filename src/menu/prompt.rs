//! Validated user input.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Source of validated answers for the menu.
///
/// Implementations keep asking until they get an acceptable answer; an
/// error means input is exhausted or unreadable.
pub trait Prompter {
    /// Any whole number.
    fn prompt_int(&mut self, message: &str) -> io::Result<i64>;

    /// A whole number in `min..=max`.
    fn prompt_bounded_int(&mut self, message: &str, min: i64, max: i64) -> io::Result<i64>;

    /// A yes/no answer.
    fn prompt_yes_no(&mut self, message: &str) -> io::Result<bool>;

    /// A non-empty file path.
    fn prompt_path(&mut self, message: &str) -> io::Result<PathBuf>;
}

/// Line-based prompter over a reader/writer pair (normally stdin/stdout).
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Print `message` and read one trimmed line.
    fn ask(&mut self, message: &str) -> io::Result<&str> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(self.line.trim())
    }

    fn complain(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn prompt_int(&mut self, message: &str) -> io::Result<i64> {
        loop {
            if let Ok(value) = self.ask(message)?.parse::<i64>() {
                return Ok(value);
            }
            self.complain("Please enter a whole number.")?;
        }
    }

    fn prompt_bounded_int(&mut self, message: &str, min: i64, max: i64) -> io::Result<i64> {
        loop {
            let value = self.prompt_int(message)?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            self.complain(&format!("Please enter a number between {} and {}.", min, max))?;
        }
    }

    fn prompt_yes_no(&mut self, message: &str) -> io::Result<bool> {
        loop {
            match self.ask(message)?.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.complain("Please answer y or n.")?,
            }
        }
    }

    fn prompt_path(&mut self, message: &str) -> io::Result<PathBuf> {
        loop {
            let answer = self.ask(message)?;
            if !answer.is_empty() {
                return Ok(PathBuf::from(answer));
            }
            self.complain("Please enter a file name.")?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn test_int_reprompts_until_number() {
        let mut p = prompter("abc\n\n -12 \n");
        assert_eq!(p.prompt_int("n? ").unwrap(), -12);
        let out = transcript(p);
        assert_eq!(out.matches("n? ").count(), 3);
        assert_eq!(out.matches("Please enter a whole number.").count(), 2);
    }

    #[test]
    fn test_bounded_int_reprompts_out_of_range() {
        let mut p = prompter("300\n-1\n255\n");
        assert_eq!(p.prompt_bounded_int("v? ", 0, 255).unwrap(), 255);
        let out = transcript(p);
        assert_eq!(out.matches("between 0 and 255").count(), 2);
    }

    #[test]
    fn test_yes_no() {
        let mut p = prompter("maybe\nY\nno\n");
        assert!(p.prompt_yes_no("ok? ").unwrap());
        assert!(!p.prompt_yes_no("ok? ").unwrap());
        assert!(transcript(p).contains("Please answer y or n."));
    }

    #[test]
    fn test_path_skips_blank_lines() {
        let mut p = prompter("\n   \n  cat.png \n");
        assert_eq!(p.prompt_path("file? ").unwrap(), PathBuf::from("cat.png"));
    }

    #[test]
    fn test_eof_is_unexpected_eof() {
        let mut p = prompter("");
        let err = p.prompt_yes_no("ok? ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
