use super::{
    headers::{
        Headers,
        RawHeader,
    },
    lines::Lines,
};
use crate::Error;
use std::io::Read;
use tracing::{
    trace,
    warn,
};

/// Upper bound for ascii control characters
const ASCII_CONTROL_UPPER_BOUND: u8 = 31;
/// Ascii del character
const ASCII_DEL_CHAR: u8 = 127;
const ASCII_TAB: u8 = b'\t';
const ASCII_SPACE: u8 = b' ';
const ASCII_COLON: u8 = b':';

/// Checks if a given byte is a "token" character as defined in [`RFC2616 Section 2.2`]:
///
/// Any ascii character
///
/// - excluding control characters (0 - 31 and 127)
/// - excluding "separators"
///
/// [`RFC2616 Section 2.2`]: https://tools.ietf.org/html/rfc2616#section-2.2
#[must_use]
pub fn is_token(byte: u8) -> bool {
    if is_control(byte) || !byte.is_ascii() {
        return false;
    }
    !matches!(
        byte,
        b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"'
        | b'/' | b'[' | b']' | b'?' | b'=' | b'{' | b'}' | b' ' | b'\t'
    )
}

#[must_use]
pub fn is_whitespace(byte: u8) -> bool {
    byte == ASCII_SPACE || byte == ASCII_TAB
}

#[must_use]
pub fn is_control(byte: u8) -> bool {
    matches!(byte, 0..=ASCII_CONTROL_UPPER_BOUND | ASCII_DEL_CHAR)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParseState {
    BeforeName,
    Name,
    BeforeLine,
    BeforeValue,
    Value,
}

type ParseResult = Result<ParseState, Error>;

/// Parses message headers according to [`RFC2616 Section 4.2`], one line at
/// a time.
///
/// [`RFC2616 Section 4.2`]: https://tools.ietf.org/html/rfc2616#section-4.2
#[derive(Debug)]
pub struct Parser {
    headers: Headers,
    name: Vec<u8>,
    state: ParseState,
    value: Vec<u8>,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: Headers::new(),
            name: Vec::new(),
            state: ParseState::BeforeName,
            value: Vec::new(),
        }
    }

    /// Feeds lines into the parser until the empty line which ends a header
    /// block, or the end of input, and returns the headers collected.
    pub fn parse<R: Read>(
        mut self,
        lines: &mut Lines<R>,
    ) -> Result<Headers, Error> {
        for line in lines {
            let line = line?;
            if line.is_empty() {
                break;
            }
            self.parse_line(&line)?;
        }
        self.finish()
    }

    /// Feeds one header line, without its line terminator, into the parser.
    pub fn parse_line(
        &mut self,
        line: &[u8],
    ) -> Result<(), Error> {
        for &byte in line {
            self.state = self.process(byte)?;
        }
        if self.state == ParseState::Name {
            return Err(Error::HeaderLineMissingColon(
                String::from_utf8_lossy(line).into(),
            ));
        }
        if self.state != ParseState::BeforeName {
            self.state = ParseState::BeforeLine;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<Headers, Error> {
        self.commit()?;
        Ok(self.headers)
    }

    fn process(
        &mut self,
        byte: u8,
    ) -> ParseResult {
        match self.state {
            ParseState::BeforeName => self.handle_before_name(byte),
            ParseState::Name => self.handle_name(byte),
            ParseState::BeforeValue => self.handle_before_value(byte),
            ParseState::Value => self.consume_value(byte),
            ParseState::BeforeLine => self.handle_before_line(byte),
        }
    }

    fn commit(&mut self) -> Result<(), Error> {
        if self.name.is_empty() {
            return Ok(());
        }
        while self.value.last().copied().map_or(false, is_whitespace) {
            self.value.pop();
        }
        let name = String::from_utf8(std::mem::take(&mut self.name))?;
        let value = String::from_utf8(std::mem::take(&mut self.value))?;
        trace!(%name, %value, "parsed header");
        self.headers.append_raw(RawHeader::new(name, value));
        Ok(())
    }

    fn handle_before_name(
        &mut self,
        byte: u8,
    ) -> ParseResult {
        self.commit()?;
        self.consume_name(byte)
    }

    fn handle_name(
        &mut self,
        byte: u8,
    ) -> ParseResult {
        if byte == ASCII_COLON {
            return Ok(ParseState::BeforeValue);
        }
        self.consume_name(byte)
    }

    fn consume_name(
        &mut self,
        byte: u8,
    ) -> ParseResult {
        if !is_token(byte) {
            return Err(Error::UnexpectedCharacter(byte));
        }
        self.name.push(byte);
        Ok(ParseState::Name)
    }

    fn handle_before_value(
        &mut self,
        byte: u8,
    ) -> ParseResult {
        if is_whitespace(byte) {
            Ok(ParseState::BeforeValue)
        } else {
            self.consume_value(byte)
        }
    }

    fn consume_value(
        &mut self,
        byte: u8,
    ) -> ParseResult {
        if is_control(byte) && byte != ASCII_TAB {
            return Err(Error::UnexpectedCharacter(byte));
        }
        self.value.push(byte);
        Ok(ParseState::Value)
    }

    fn handle_before_line(
        &mut self,
        byte: u8,
    ) -> ParseResult {
        if !is_whitespace(byte) {
            return self.handle_before_name(byte);
        }
        if self.name.is_empty() {
            return Err(Error::UnexpectedCharacter(byte));
        }
        warn!(
            header = %String::from_utf8_lossy(&self.name),
            "obsolete line folding in header value"
        );
        while self.value.last().copied().map_or(false, is_whitespace) {
            self.value.pop();
        }
        if !self.value.is_empty() {
            self.value.push(ASCII_SPACE);
        }
        Ok(ParseState::BeforeValue)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::http::lines::ReadLines;

    fn parse(input: &str) -> Result<Headers, Error> {
        Parser::new().parse(&mut input.as_bytes().lines())
    }

    #[test]
    fn token_characters() {
        assert!(is_token(b'a'));
        assert!(is_token(b'-'));
        assert!(is_token(b'!'));
        assert!(!is_token(b':'));
        assert!(!is_token(b' '));
        assert!(!is_token(b'\t'));
        assert!(!is_token(0));
        assert!(!is_token(127));
        assert!(!is_token(0xC3));
    }

    #[test]
    fn whitespace_and_control_characters() {
        assert!(is_whitespace(b' '));
        assert!(is_whitespace(b'\t'));
        assert!(!is_whitespace(b'\r'));
        assert!(is_control(b'\r'));
        assert!(is_control(31));
        assert!(is_control(127));
        assert!(!is_control(b' '));
    }

    #[test]
    fn parse_headers() {
        let headers = parse(
            "Host: example.com\r\nUser-Agent: curl/7.51.0\r\nAccept: */*",
        )
        .unwrap();
        assert_eq!(3, headers.len_raw());
        assert_eq!("example.com", headers.get_raw("host")[0].value());
        assert_eq!("curl/7.51.0", headers.get_raw("user-agent")[0].value());
        assert_eq!("*/*", headers.get_raw("accept")[0].value());
    }

    #[test]
    fn parse_stops_at_empty_line() {
        let mut input = "X-Foo: Bar\r\n\r\nX-Baz: Qux\r\n".as_bytes();
        let mut lines = (&mut input).lines();
        let headers = Parser::new().parse(&mut lines).unwrap();
        assert_eq!(1, headers.len_raw());
        drop(lines);
        assert_eq!(b"X-Baz: Qux\r\n", input);
    }

    #[test]
    fn value_whitespace_is_trimmed() {
        let headers = parse("X-Foo: \t Bar  Baz \t\r\n").unwrap();
        assert_eq!("Bar  Baz", headers.get_raw("x-foo")[0].value());
    }

    #[test]
    fn empty_value() {
        let headers = parse("X-Empty:\r\n").unwrap();
        assert_eq!("", headers.get_raw("x-empty")[0].value());
    }

    #[test]
    fn folded_value_is_joined_with_single_space() {
        let headers = parse("X-Foo: Bar \r\n   Baz\r\n\tQux\r\nX-Next: 1\r\n").unwrap();
        assert_eq!(2, headers.len_raw());
        assert_eq!("Bar Baz Qux", headers.get_raw("x-foo")[0].value());
        assert_eq!("1", headers.get_raw("x-next")[0].value());
    }

    #[test]
    fn continuation_without_header_is_rejected() {
        assert!(matches!(
            parse(" Foo: Bar\r\n"),
            Err(Error::UnexpectedCharacter(b' '))
        ));
    }

    #[test]
    fn missing_colon() {
        assert!(matches!(
            parse("User-Agent curl/7.16.3\r\n"),
            Err(Error::UnexpectedCharacter(b' '))
        ));
        assert!(matches!(
            parse("X-NoColon\r\n"),
            Err(Error::HeaderLineMissingColon(line)) if line == "X-NoColon"
        ));
    }

    #[test]
    fn control_character_in_value() {
        assert!(matches!(
            parse("X-Foo: Bar\x07\r\n"),
            Err(Error::UnexpectedCharacter(7))
        ));
    }

    #[test]
    fn value_not_utf8() {
        let mut input: &[u8] = b"X-Foo: \xff\r\n";
        assert!(matches!(
            Parser::new().parse(&mut (&mut input).lines()),
            Err(Error::FromUtf8(_))
        ));
    }

}
