use super::{
    headers::Headers,
    message::{
        BodyFraming,
        Message,
    },
    status::StatusCode,
};
use crate::{
    Error,
    Limits,
};
use std::io::{
    Read,
    Write,
};
use tracing::debug;

const PROTOCOL: &str = "HTTP/1.1";

/// The parts of a status line: `HTTP/1.1 SP code SP reason`.
#[derive(Debug, Eq, PartialEq)]
pub struct StatusLine {
    pub reason_phrase: String,
    pub status: StatusCode,
}

impl StatusLine {
    pub fn parse(status_line: &str) -> Result<Self, Error> {
        // Parse the protocol.
        let protocol_delimiter = status_line
            .find(' ')
            .ok_or_else(|| Error::StatusLineNoProtocolDelimiter(status_line.into()))?;
        if &status_line[..protocol_delimiter] != PROTOCOL {
            return Err(Error::StatusLineProtocol(status_line.into()));
        }

        // Parse the status code.  The reason phrase may be missing.
        let status_line_at_code = &status_line[protocol_delimiter + 1..];
        let (status_code, reason_phrase) = match status_line_at_code.find(' ') {
            Some(code_delimiter) => (
                &status_line_at_code[..code_delimiter],
                &status_line_at_code[code_delimiter + 1..],
            ),
            None => (status_line_at_code, ""),
        };
        if status_code.is_empty() {
            return Err(Error::StatusLineNoStatusCodeDelimiter(status_line.into()));
        }
        if status_code.len() != 3
            || !status_code.bytes().all(|byte| byte.is_ascii_digit())
        {
            return Err(Error::InvalidStatusCode(status_code.into()));
        }
        match status_code.parse::<u16>() {
            Ok(code @ 100..=999) => Ok(Self {
                reason_phrase: reason_phrase.into(),
                status: StatusCode::from_u16(code),
            }),
            Ok(code) => Err(Error::StatusCodeOutOfRange(usize::from(code))),
            Err(_) => Err(Error::InvalidStatusCode(status_code.into())),
        }
    }
}

pub struct Response {
    pub body: Vec<u8>,
    pub headers: Headers,
    pub reason_phrase: std::borrow::Cow<'static, str>,
    pub status: StatusCode,
    pub trailer: Headers,
}

impl Response {
    /// Reads a whole response from `reader`.  Without `Content-Length` or
    /// chunked `Transfer-Encoding` the body runs to the end of input, except
    /// for statuses which never carry a body.
    pub fn parse<R: Read>(reader: R) -> Result<Self, Error> {
        Self::parse_with_limits(reader, &Limits::default())
    }

    pub fn parse_with_limits<R: Read>(
        reader: R,
        limits: &Limits,
    ) -> Result<Self, Error> {
        let message = Message::parse_with_limits(reader, limits)?;
        let status_line = StatusLine::parse(message.start_line())?;
        let framing = if has_no_body(status_line.status) {
            BodyFraming::Empty
        } else {
            BodyFraming::from_headers(message.headers(), BodyFraming::UntilEof)?
        };
        let (_, headers, body) = message.read_body(framing, limits)?;
        debug!(status = %status_line.status, "parsed response");
        Ok(Self {
            body: body.data,
            headers,
            reason_phrase: status_line.reason_phrase.into(),
            status: status_line.status,
            trailer: body.trailer,
        })
    }

    pub fn generate(&self) -> Result<Vec<u8>, Error> {
        let mut output = Vec::new();
        write!(
            &mut output,
            "{} {} {}\r\n",
            PROTOCOL,
            self.status.to_u16(),
            self.reason_phrase
        )
        .map_err(|_| Error::StringFormat)?;
        output.append(&mut self.headers.generate());
        output.extend(&self.body);
        Ok(output)
    }

    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            body: Vec::new(),
            headers: Headers::new(),
            reason_phrase: status.reason_phrase().unwrap_or_default().into(),
            status,
            trailer: Headers::new(),
        }
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(StatusCode::Ok)
    }
}

fn has_no_body(status: StatusCode) -> bool {
    status.is_informational()
        || status == StatusCode::NoContent
        || status == StatusCode::NotModified
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::{
        http::headers::{
            ContentLengthHeader,
            ContentTypeHeader,
            RawHeader,
        },
        media_type::MediaType,
    };

    #[test]
    fn generate_get_response() {
        let mut response = Response::new(StatusCode::Ok);
        response.headers.append_raw(RawHeader::new("Date", "Mon, 27 Jul 2009 12:28:53 GMT"));
        response.headers.append_raw(RawHeader::new("Accept-Ranges", "bytes"));
        response.headers.append(&ContentTypeHeader::new(MediaType::PlainText));
        response.body = "Hello World! My payload includes a trailing CRLF.\r\n".into();
        response.headers.append(&ContentLengthHeader::new(response.body.len() as u64));
        assert_eq!(
            format!(
                concat!(
                    "HTTP/1.1 200 OK\r\n",
                    "Date: Mon, 27 Jul 2009 12:28:53 GMT\r\n",
                    "Accept-Ranges: bytes\r\n",
                    "Content-Type: text/plain\r\n",
                    "Content-Length: {}\r\n",
                    "\r\n",
                    "Hello World! My payload includes a trailing CRLF.\r\n",
                ),
                response.body.len()
            )
            .as_bytes(),
            &response.generate().unwrap()[..]
        );
    }

    #[test]
    fn new_uses_reason_phrase_of_status() {
        assert_eq!("I'm a Teapot", Response::new(StatusCode::ImATeapot).reason_phrase);
        assert_eq!("", Response::new(StatusCode::Unregistered(299)).reason_phrase);
        assert_eq!(StatusCode::Ok, Response::default().status);
    }

    #[test]
    fn parse_status_line() {
        assert_eq!(
            StatusLine {
                reason_phrase: "Not Found".into(),
                status: StatusCode::NotFound,
            },
            StatusLine::parse("HTTP/1.1 404 Not Found").unwrap()
        );
        assert_eq!(
            StatusLine {
                reason_phrase: "".into(),
                status: StatusCode::Unregistered(299),
            },
            StatusLine::parse("HTTP/1.1 299").unwrap()
        );
    }

    #[test]
    fn parse_invalid_status_lines() {
        assert!(matches!(
            StatusLine::parse("HTTP/1.1"),
            Err(Error::StatusLineNoProtocolDelimiter(_))
        ));
        assert!(matches!(
            StatusLine::parse("HTTP/1.0 200 OK"),
            Err(Error::StatusLineProtocol(_))
        ));
        assert!(matches!(
            StatusLine::parse("HTTP/1.1  OK"),
            Err(Error::StatusLineNoStatusCodeDelimiter(_))
        ));
        assert!(matches!(
            StatusLine::parse("HTTP/1.1 abc OK"),
            Err(Error::InvalidStatusCode(_))
        ));
        assert!(matches!(
            StatusLine::parse("HTTP/1.1 099 Too Low"),
            Err(Error::StatusCodeOutOfRange(99))
        ));
        for (status_line, status_code) in &[
            ("HTTP/1.1 99 Too Short", "99"),
            ("HTTP/1.1 1000 Too Long", "1000"),
            ("HTTP/1.1 +200 OK", "+200"),
            ("HTTP/1.1 0200 OK", "0200"),
            ("HTTP/1.1 00404 Not Found", "00404"),
            ("HTTP/1.1 -20 OK", "-20"),
        ] {
            assert!(matches!(
                StatusLine::parse(status_line),
                Err(Error::InvalidStatusCode(code)) if code == *status_code
            ));
        }
    }

    #[test]
    fn parse_response_with_content_length() {
        let raw_response = concat!(
            "HTTP/1.1 200 OK\r\n",
            "Content-Type: text/plain\r\n",
            "Content-Length: 13\r\n",
            "\r\n",
            "Hello, World!",
            "HTTP/1.1 204 No Content\r\n",
        );
        let mut input = raw_response.as_bytes();
        let response = Response::parse(&mut input).unwrap();
        assert_eq!(StatusCode::Ok, response.status);
        assert_eq!("OK", response.reason_phrase);
        assert_eq!(b"Hello, World!".to_vec(), response.body);
        assert_eq!(
            Some(ContentTypeHeader::new(MediaType::PlainText)),
            response.headers.get::<ContentTypeHeader>()
        );
        assert_eq!(b"HTTP/1.1 204 No Content\r\n", input);
    }

    #[test]
    fn parse_response_until_end_of_input() {
        let raw_response = "HTTP/1.1 200 OK\r\n\r\nHello, World!";
        let response = Response::parse(raw_response.as_bytes()).unwrap();
        assert_eq!(b"Hello, World!".to_vec(), response.body);
    }

    #[test]
    fn parse_response_without_body() {
        let raw_response = "HTTP/1.1 304 Not Modified\r\nETag: \"abc\"\r\n\r\nleftover";
        let mut input = raw_response.as_bytes();
        let response = Response::parse(&mut input).unwrap();
        assert_eq!(StatusCode::NotModified, response.status);
        assert!(response.body.is_empty());
        assert_eq!(b"leftover", input);
    }

    #[test]
    fn parse_chunked_response() {
        let raw_response = concat!(
            "HTTP/1.1 418 I'm a Teapot\r\n",
            "Transfer-Encoding: chunked\r\n",
            "\r\n",
            "5\r\n",
            "short\r\n",
            "6\r\n",
            " stout\r\n",
            "0\r\n",
            "\r\n",
        );
        let response = Response::parse(raw_response.as_bytes()).unwrap();
        assert_eq!(StatusCode::ImATeapot, response.status);
        assert!(response.status.is_client_error());
        assert_eq!(b"short stout".to_vec(), response.body);
        assert!(response.trailer.is_empty());
    }

}
