use super::{
    chunked_body::ChunkedBody,
    headers::{
        ContentLengthHeader,
        Headers,
        RawHeader,
    },
    lines::Lines,
    parse::Parser,
};
use crate::{
    Error,
    Limits,
};
use std::{
    convert::TryFrom,
    io::{
        self,
        Read,
    },
};
use tracing::{
    debug,
    warn,
};

pub use crate::Error as ParseError;

/// A message as it appears on the wire: a start line, a block of header
/// fields, and a body which has not been read yet.
pub struct Message<R> {
    body: R,
    headers: Headers,
    start_line: String,
}

impl<R> Message<R> {
    pub fn new<S: Into<String>>(
        start_line: S,
        headers: Headers,
        body: R,
    ) -> Self {
        Self {
            body,
            headers,
            start_line: start_line.into(),
        }
    }

    pub fn start_line(&self) -> &str {
        &self.start_line
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn body_mut(&mut self) -> &mut R {
        &mut self.body
    }

    pub fn into_body(self) -> R {
        self.body
    }

    pub fn into_parts(self) -> (String, Headers, R) {
        (self.start_line, self.headers, self.body)
    }
}

impl<R: Read> Message<R> {
    /// Reads the start line and header block from `reader`, leaving the body
    /// unread.
    pub fn parse(reader: R) -> Result<Self, Error> {
        Self::parse_with_limits(reader, &Limits::default())
    }

    pub fn parse_with_limits(
        reader: R,
        limits: &Limits,
    ) -> Result<Self, Error> {
        let mut lines = Lines::new(reader).with_line_limit(limits.line_limit);
        let start_line = lines.next().ok_or(Error::MissingStartLine)??;
        let start_line = String::from_utf8(start_line)
            .map_err(|err| Error::StartLineNotValidText(err.into_bytes()))?;
        let mut parser = Parser::new();
        while let Some(line) = lines.next() {
            let line = line?;
            match limits.max_header_bytes {
                Some(max_header_bytes) if lines.consumed() > max_header_bytes => {
                    return Err(Error::MessageTooLong);
                },
                _ => (),
            }
            if line.is_empty() {
                break;
            }
            parser.parse_line(&line)?;
        }
        let headers = parser.finish()?;
        let consumed = lines.consumed();
        debug!(
            start_line = %start_line,
            headers = headers.len_raw(),
            consumed,
            "parsed message head"
        );
        Ok(Self::new(start_line, headers, lines.into_inner()))
    }
}

/// How the end of a message body is found.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum BodyFraming {
    Chunked,
    ContentLength(usize),
    Empty,
    UntilEof,
}

impl BodyFraming {
    /// Chooses the framing announced by the headers.  `Transfer-Encoding`
    /// takes precedence over `Content-Length`; `fallback` applies when
    /// neither is present.
    pub(crate) fn from_headers(
        headers: &Headers,
        fallback: BodyFraming,
    ) -> Result<Self, Error> {
        if headers.has_token("Transfer-Encoding", "chunked") {
            return Ok(BodyFraming::Chunked);
        }
        let raw = headers
            .get_raw("Content-Length")
            .into_iter()
            .cloned()
            .collect::<Vec<RawHeader>>();
        match ContentLengthHeader::try_parse(&raw)? {
            Some(content_length) => usize::try_from(content_length.value())
                .map(BodyFraming::ContentLength)
                .map_err(|_| Error::MessageTooLong),
            None => Ok(fallback),
        }
    }
}

/// A fully read body, along with any trailer fields sent after it.
#[derive(Debug, Default)]
pub(crate) struct Body {
    pub(crate) data: Vec<u8>,
    pub(crate) trailer: Headers,
}

impl<R: Read> Message<R> {
    pub(crate) fn read_body(
        self,
        framing: BodyFraming,
        limits: &Limits,
    ) -> Result<(String, Headers, Body), Error> {
        let (start_line, headers, mut reader) = self.into_parts();
        let body = match framing {
            BodyFraming::Chunked => {
                let chunked_body = ChunkedBody::decode(reader, limits)?;
                Body {
                    data: chunked_body.buffer,
                    trailer: chunked_body.trailer,
                }
            },
            BodyFraming::ContentLength(content_length) => {
                limits.check_body(content_length)?;
                let mut data = Vec::with_capacity(content_length);
                let read = reader
                    .take(content_length as u64)
                    .read_to_end(&mut data)
                    .map_err(Error::Read)?;
                if read < content_length {
                    return Err(Error::BodyTruncated(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "body shorter than Content-Length",
                    )));
                }
                Body {
                    data,
                    trailer: Headers::new(),
                }
            },
            BodyFraming::Empty => Body::default(),
            BodyFraming::UntilEof => {
                warn!("no body length given; reading body until end of input");
                let mut data = Vec::new();
                match limits.max_body_bytes {
                    Some(max_body_bytes) => {
                        reader
                            .take((max_body_bytes as u64).saturating_add(1))
                            .read_to_end(&mut data)
                            .map_err(Error::Read)?;
                        limits.check_body(data.len())?;
                    },
                    None => {
                        reader.read_to_end(&mut data).map_err(Error::Read)?;
                    },
                }
                Body {
                    data,
                    trailer: Headers::new(),
                }
            },
        };
        debug!(?framing, size = body.data.len(), "read message body");
        Ok((start_line, headers, body))
    }
}
