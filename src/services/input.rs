use crate::domain::errors::InputError;
use std::io::{BufRead, Write};

pub const INVALID_NUMBER: &str = "Invalid input. Please enter a valid number.\n";

/// Values the console can read from the front of a token.
pub trait ConsoleNumber: Sized {
    /// Parses the longest numeric prefix of `token`.
    /// Returns the value and the number of bytes it used.
    fn scan(token: &str) -> Option<(Self, usize)>;
}

impl ConsoleNumber for i32 {
    fn scan(token: &str) -> Option<(Self, usize)> {
        let len = integer_prefix(token);
        if len == 0 {
            return None;
        }
        token[..len].parse().ok().map(|value| (value, len))
    }
}

impl ConsoleNumber for f64 {
    fn scan(token: &str) -> Option<(Self, usize)> {
        let len = decimal_prefix(token);
        if len == 0 {
            return None;
        }
        token[..len]
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| (value, len))
    }
}

fn digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .iter()
        .skip(from)
        .take_while(|b| b.is_ascii_digit())
        .count()
}

fn sign(bytes: &[u8], at: usize) -> usize {
    usize::from(matches!(bytes.get(at), Some(b'+' | b'-')))
}

/// `[+-]digits`
fn integer_prefix(token: &str) -> usize {
    let bytes = token.as_bytes();
    let start = sign(bytes, 0);
    match digits(bytes, start) {
        0 => 0,
        n => start + n,
    }
}

/// `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit.
fn decimal_prefix(token: &str) -> usize {
    let bytes = token.as_bytes();
    let mut end = sign(bytes, 0);
    let whole = digits(bytes, end);
    end += whole;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(bytes, end + 1);
        end += 1 + fraction;
    }
    if whole + fraction == 0 {
        return 0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent = end + 1 + sign(bytes, end + 1);
        let n = digits(bytes, exponent);
        if n > 0 {
            end = exponent + n;
        }
    }
    end
}

/// Line-oriented console over any reader/writer pair.
///
/// Keeps the unread tail of the current line, so several values typed on
/// one line feed consecutive reads.
pub struct Console<R, W> {
    input: R,
    output: W,
    pending: Option<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: None,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> Result<(), InputError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_raw_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Eof);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Rest of the current line, or the next full line when nothing is
    /// pending. May be empty.
    pub fn read_line(&mut self) -> Result<String, InputError> {
        match self.pending.take() {
            Some(rest) => Ok(rest),
            None => self.read_raw_line(),
        }
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending = None;
    }

    /// Next whitespace-separated word, skipping blank lines.
    fn next_word(&mut self) -> Result<String, InputError> {
        loop {
            let line = self.read_line()?;
            let trimmed = line.trim_start();
            if trimmed.is_empty() {
                continue;
            }
            let end = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            let (word, rest) = trimmed.split_at(end);
            self.pending = Some(rest.to_string());
            return Ok(word.to_string());
        }
    }

    /// Reads one number off the front of the next word.
    ///
    /// Characters after the number stay pending. A word with no numeric
    /// prefix yields `None` and the rest of its line is discarded.
    pub fn read_number<T: ConsoleNumber>(&mut self) -> Result<Option<T>, InputError> {
        let word = self.next_word()?;
        match T::scan(&word) {
            Some((value, used)) => {
                let rest = self.pending.take().unwrap_or_default();
                self.pending = Some(format!("{}{}", &word[used..], rest));
                Ok(Some(value))
            }
            None => {
                tracing::warn!(token = %word, "rejected numeric input");
                self.discard_line();
                Ok(None)
            }
        }
    }

    /// Prompts until a number is read, then drops the rest of that line.
    pub fn prompt_number<T: ConsoleNumber>(&mut self, prompt: &str) -> Result<T, InputError> {
        loop {
            self.say(prompt)?;
            if let Some(value) = self.read_number()? {
                self.discard_line();
                return Ok(value);
            }
            self.say(INVALID_NUMBER)?;
        }
    }

    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, InputError> {
        self.say(prompt)?;
        self.read_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(c: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.into_output()).expect("utf8 output")
    }

    #[test]
    fn retries_until_integer_parses() {
        let mut c = console("abc\n12\n");
        let v: i32 = c.prompt_number("Enter ID: ").expect("value");
        assert_eq!(v, 12);
        assert_eq!(
            printed(c),
            format!("Enter ID: {INVALID_NUMBER}Enter ID: ")
        );
    }

    #[test]
    fn discards_rest_of_line_after_token() {
        let mut c = console("7 trailing words\nnext\n");
        let v: i32 = c.prompt_number("n: ").expect("value");
        assert_eq!(v, 7);
        assert_eq!(c.read_line().expect("line"), "next");
    }

    #[test]
    fn blank_lines_are_skipped_without_reprompt() {
        let mut c = console("\n   \n3.5\n");
        let v: f64 = c.prompt_number("x: ").expect("value");
        assert_eq!(v, 3.5);
        assert_eq!(printed(c), "x: ");
    }

    #[test]
    fn integer_prompt_takes_leading_digits() {
        let mut c = console("3.5\n");
        let v: i32 = c.prompt_number("n: ").expect("value");
        assert_eq!(v, 3);
        assert_eq!(printed(c), "n: ");
    }

    #[test]
    fn trailing_letters_after_digits_are_dropped() {
        let mut c = console("12abc\nBob\n");
        let v: i32 = c.prompt_number("Enter ID: ").expect("value");
        assert_eq!(v, 12);
        assert_eq!(c.read_line().expect("line"), "Bob");
    }

    #[test]
    fn unread_tail_feeds_the_next_read() {
        let mut c = console("1 42\n4x\n");
        assert_eq!(c.read_number::<i32>().expect("read"), Some(1));
        assert_eq!(c.read_number::<i32>().expect("read"), Some(42));
        assert_eq!(c.read_number::<i32>().expect("read"), Some(4));
        assert_eq!(c.read_number::<i32>().expect("read"), None);
    }

    #[test]
    fn decimal_prefix_forms() {
        assert_eq!(f64::scan("2.5kg"), Some((2.5, 3)));
        assert_eq!(f64::scan("-1e3x"), Some((-1000.0, 4)));
        assert_eq!(f64::scan("7e"), Some((7.0, 1)));
        assert_eq!(f64::scan(".5"), Some((0.5, 2)));
        assert_eq!(f64::scan("."), None);
        assert_eq!(i32::scan("+8"), Some((8, 2)));
        assert_eq!(i32::scan("-"), None);
        assert_eq!(i32::scan("99999999999"), None);
    }

    #[test]
    fn non_finite_amounts_are_rejected() {
        let mut c = console("inf\nNaN\n1e999\n10\n");
        let v: f64 = c.prompt_number("x: ").expect("value");
        assert_eq!(v, 10.0);
        assert_eq!(printed(c).matches(INVALID_NUMBER).count(), 3);
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut c = console("abc\n");
        let err = c.prompt_number::<i32>("n: ").expect_err("eof");
        assert!(matches!(err, InputError::Eof));
    }

    #[test]
    fn read_line_keeps_empty_and_strips_crlf() {
        let mut c = console("\r\nAda Lovelace\r\n");
        assert_eq!(c.read_line().expect("line"), "");
        assert_eq!(c.read_line().expect("line"), "Ada Lovelace");
    }
}
