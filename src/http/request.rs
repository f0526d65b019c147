use super::{
    headers::Headers,
    message::{
        BodyFraming,
        Message,
    },
};
use crate::{
    Error,
    Limits,
};
use rhymuri::Uri;
use std::io::{
    Read,
    Write,
};
use tracing::debug;

const PROTOCOL: &str = "HTTP/1.1";

/// The parts of a request line: `METHOD SP target SP HTTP/1.1`.
#[derive(Debug, PartialEq)]
pub struct RequestLine {
    pub method: String,
    pub target: Uri,
}

impl RequestLine {
    pub fn parse(request_line: &str) -> Result<Self, Error> {
        // Parse the method.
        let method_delimiter = request_line
            .find(' ')
            .ok_or_else(|| Error::RequestLineNoMethodDelimiter(request_line.into()))?;
        let method = &request_line[0..method_delimiter];
        if method.is_empty() {
            return Err(Error::RequestLineNoMethodOrExtraWhitespace(request_line.into()));
        }

        // Parse the target URI.
        let request_line_at_target = &request_line[method_delimiter + 1..];
        let target_delimiter = request_line_at_target
            .find(' ')
            .ok_or_else(|| Error::RequestLineNoTargetDelimiter(request_line.into()))?;
        if target_delimiter == 0 {
            return Err(Error::RequestLineNoTargetOrExtraWhitespace(request_line.into()));
        }
        let target = Uri::parse(&request_line_at_target[..target_delimiter])?;

        // Parse the protocol.
        let request_line_at_protocol = &request_line_at_target[target_delimiter + 1..];
        if request_line_at_protocol == PROTOCOL {
            Ok(Self {
                method: method.into(),
                target,
            })
        } else {
            Err(Error::RequestLineProtocol(request_line.into()))
        }
    }
}

pub struct Request {
    pub body: Vec<u8>,
    pub headers: Headers,
    pub method: std::borrow::Cow<'static, str>,
    pub target: Uri,
    pub trailer: Headers,
}

impl Request {
    /// Reads a whole request from `reader`.  Without `Content-Length` or
    /// chunked `Transfer-Encoding` the request has no body.
    pub fn parse<R: Read>(reader: R) -> Result<Self, Error> {
        Self::parse_with_limits(reader, &Limits::default())
    }

    pub fn parse_with_limits<R: Read>(
        reader: R,
        limits: &Limits,
    ) -> Result<Self, Error> {
        let message = Message::parse_with_limits(reader, limits)?;
        let request_line = RequestLine::parse(message.start_line())?;
        let framing = BodyFraming::from_headers(message.headers(), BodyFraming::Empty)?;
        let (_, headers, body) = message.read_body(framing, limits)?;
        debug!(
            method = %request_line.method,
            target = %request_line.target,
            "parsed request"
        );
        Ok(Self {
            body: body.data,
            headers,
            method: request_line.method.into(),
            target: request_line.target,
            trailer: body.trailer,
        })
    }

    pub fn generate(&self) -> Result<Vec<u8>, Error> {
        let mut output = Vec::new();
        write!(&mut output, "{} {} {}\r\n", self.method, self.target, PROTOCOL)
            .map_err(|_| Error::StringFormat)?;
        output.append(&mut self.headers.generate());
        output.extend(&self.body);
        Ok(output)
    }

    #[must_use]
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            headers: Headers::new(),
            method: "GET".into(),
            target: Uri::default(),
            trailer: Headers::new(),
        }
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::http::headers::{
        ContentLengthHeader,
        HostHeader,
        RawHeader,
        UserAgentHeader,
    };

    fn value<'a>(
        headers: &'a Headers,
        name: &str,
    ) -> Option<&'a str> {
        headers
            .iter()
            .find(|header| header.name().eq_ignore_ascii_case(name))
            .map(RawHeader::value)
    }

    #[test]
    fn generate_get_request() {
        let mut request = Request::new();
        request.method = "GET".into();
        request.target = Uri::parse("/foo").unwrap();
        request.headers.set(&HostHeader::new("www.example.com"));
        request.headers.append_raw(RawHeader::new("Content-Type", "text/plain"));
        assert_eq!(
            concat!(
                "GET /foo HTTP/1.1\r\n",
                "Host: www.example.com\r\n",
                "Content-Type: text/plain\r\n",
                "\r\n",
            )
            .as_bytes(),
            &request.generate().unwrap()[..]
        );
    }

    #[test]
    fn generate_put_request() {
        let mut request = Request::new();
        request.method = "PUT".into();
        request.target = Uri::parse("/foo").unwrap();
        request.headers.set(&HostHeader::new("www.example.com"));
        request.headers.append_raw(RawHeader::new("Content-Type", "text/plain"));
        request.body = "FeelsGoodMan".into();
        request.headers.set(&ContentLengthHeader::new(request.body.len() as u64));
        assert_eq!(
            concat!(
                "PUT /foo HTTP/1.1\r\n",
                "Host: www.example.com\r\n",
                "Content-Type: text/plain\r\n",
                "Content-Length: 12\r\n",
                "\r\n",
                "FeelsGoodMan",
            )
            .as_bytes(),
            &request.generate().unwrap()[..]
        );
    }

    #[test]
    fn generated_request_parses_back() {
        let mut request = Request::new();
        request.method = "POST".into();
        request.target = Uri::parse("/submit?x=1").unwrap();
        request.headers.set(&HostHeader::new("foo.com"));
        request.body = "say=Hi&to=Mom".into();
        request.headers.set(&ContentLengthHeader::new(request.body.len() as u64));
        let raw = request.generate().unwrap();
        let parsed = Request::parse(&raw[..]).unwrap();
        assert_eq!(request.method, parsed.method);
        assert_eq!(request.target, parsed.target);
        assert_eq!(request.headers, parsed.headers);
        assert_eq!(request.body, parsed.body);
    }

    #[test]
    fn parse_get_request_ascii_target_uri() {
        let raw_request = concat!(
            "GET /hello.txt HTTP/1.1\r\n",
            "User-Agent: curl/7.16.3 libcurl/7.16.3 OpenSSL/0.9.7l zlib/1.2.3\r\n",
            "Host: www.example.com\r\n",
            "Accept-Language: en, mi\r\n",
            "\r\n",
        );
        let request = Request::parse(raw_request.as_bytes()).unwrap();
        assert_eq!("GET", request.method);
        assert_eq!("/hello.txt", request.target.to_string());
        assert_eq!(
            Some(UserAgentHeader::new(
                "curl/7.16.3 libcurl/7.16.3 OpenSSL/0.9.7l zlib/1.2.3"
            )),
            request.headers.get::<UserAgentHeader>()
        );
        assert_eq!(
            Some(HostHeader::new("www.example.com")),
            request.headers.get::<HostHeader>()
        );
        assert_eq!(Some("en, mi"), value(&request.headers, "Accept-Language"));
        assert!(request.body.is_empty());
    }

    #[test]
    fn parse_get_request_non_ascii_target_uri() {
        let raw_request = concat!(
            "GET /%F0%9F%92%A9.txt HTTP/1.1\r\n",
            "Host: www.example.com\r\n",
            "\r\n",
        );
        let request = Request::parse(raw_request.as_bytes()).unwrap();
        assert_eq!("GET", request.method);
        assert_eq!(Uri::parse("/%F0%9F%92%A9.txt").unwrap(), request.target);
    }

    #[test]
    fn parse_post_request() {
        let raw_request_body = "say=Hi&to=Mom";
        let raw_request_extra = "\r\n";
        let raw_request_headers = format!(
            concat!(
                "POST / HTTP/1.1\r\n",
                "Host: foo.com\r\n",
                "Content-Type: application/x-www-form-urlencoded\r\n",
                "Content-Length: {}\r\n",
                "\r\n",
            ),
            raw_request_body.len()
        );
        let raw_request = raw_request_headers + raw_request_body + raw_request_extra;
        let mut input = raw_request.as_bytes();
        let request = Request::parse(&mut input).unwrap();
        assert_eq!("POST", request.method);
        assert_eq!("/", request.target.to_string());
        assert_eq!(
            Some("application/x-www-form-urlencoded"),
            value(&request.headers, "Content-Type")
        );
        assert_eq!(Some("13"), value(&request.headers, "Content-Length"));
        assert_eq!(raw_request_body.as_bytes(), &request.body[..]);
        assert_eq!(raw_request_extra.as_bytes(), input);
    }

    #[test]
    fn parse_chunked_request() {
        let raw_request = concat!(
            "POST /upload HTTP/1.1\r\n",
            "Host: foo.com\r\n",
            "Transfer-Encoding: chunked\r\n",
            "\r\n",
            "6\r\n",
            "say=Hi\r\n",
            "7\r\n",
            "&to=Mom\r\n",
            "0\r\n",
            "X-Checksum: 1234\r\n",
            "\r\n",
        );
        let request = Request::parse(raw_request.as_bytes()).unwrap();
        assert_eq!(b"say=Hi&to=Mom".to_vec(), request.body);
        assert_eq!(Some("1234"), value(&request.trailer, "X-Checksum"));
    }

    #[test]
    fn parse_invalid_request_no_method() {
        let raw_request = " /hello.txt HTTP/1.1\r\nHost: www.example.com\r\n\r\n";
        assert!(matches!(
            Request::parse(raw_request.as_bytes()),
            Err(Error::RequestLineNoMethodOrExtraWhitespace(line))
                if line == " /hello.txt HTTP/1.1"
        ));
    }

    #[test]
    fn parse_invalid_request_no_method_delimiter() {
        assert!(matches!(
            Request::parse("GET\r\n\r\n".as_bytes()),
            Err(Error::RequestLineNoMethodDelimiter(line)) if line == "GET"
        ));
    }

    #[test]
    fn parse_invalid_request_no_target() {
        let raw_request = "GET  HTTP/1.1\r\nHost: www.example.com\r\n\r\n";
        assert!(matches!(
            Request::parse(raw_request.as_bytes()),
            Err(Error::RequestLineNoTargetOrExtraWhitespace(line))
                if line == "GET  HTTP/1.1"
        ));
    }

    #[test]
    fn parse_invalid_request_no_protocol() {
        let raw_request = "GET /hello.txt\r\nHost: www.example.com\r\n\r\n";
        assert!(matches!(
            Request::parse(raw_request.as_bytes()),
            Err(Error::RequestLineNoTargetDelimiter(line)) if line == "GET /hello.txt"
        ));
    }

    #[test]
    fn parse_invalid_request_empty_protocol() {
        let raw_request = "GET /hello.txt \r\nHost: www.example.com\r\n\r\n";
        assert!(matches!(
            Request::parse(raw_request.as_bytes()),
            Err(Error::RequestLineProtocol(line)) if line == "GET /hello.txt "
        ));
    }

    #[test]
    fn parse_invalid_request_bad_protocol() {
        let raw_request = "GET /hello.txt FOO\r\nHost: www.example.com\r\n\r\n";
        assert!(matches!(
            Request::parse(raw_request.as_bytes()),
            Err(Error::RequestLineProtocol(line)) if line == "GET /hello.txt FOO"
        ));
    }

    #[test]
    fn parse_invalid_damaged_header() {
        let raw_request = concat!(
            "GET /hello.txt HTTP/1.1\r\n",
            "User-Agent curl/7.16.3 libcurl/7.16.3 OpenSSL/0.9.7l zlib/1.2.3\r\n",
            "Host: www.example.com\r\n",
            "\r\n",
        );
        assert!(matches!(
            Request::parse(raw_request.as_bytes()),
            Err(Error::UnexpectedCharacter(b' '))
        ));
    }

    #[test]
    fn parse_invalid_header_line_too_long() {
        let test_header_name_with_delimiters = "X-Poggers: ";
        let value_is_too_long = "X".repeat(1001 - test_header_name_with_delimiters.len());
        let too_long_header =
            String::from(test_header_name_with_delimiters) + &value_is_too_long + "\r\n";
        let raw_request = String::from("GET /hello.txt HTTP/1.1\r\n")
            + &too_long_header
            + "Host: www.example.com\r\n"
            + "\r\n";
        assert!(matches!(
            Request::parse(raw_request.as_bytes()),
            Err(Error::LineTooLong(line)) if line == too_long_header[0..1000].as_bytes()
        ));
    }

    #[test]
    fn parse_valid_header_line_longer_than_default() {
        let test_header_name_with_delimiters = "X-Poggers: ";
        let value_is_long_but_within_custom_limit =
            "X".repeat(1001 - test_header_name_with_delimiters.len());
        let raw_request = String::from("GET /hello.txt HTTP/1.1\r\n")
            + test_header_name_with_delimiters
            + &value_is_long_but_within_custom_limit
            + "\r\n"
            + "Host: www.example.com\r\n"
            + "\r\n";
        let mut limits = Limits::default();
        limits.line_limit = Some(1001);
        assert!(Request::parse_with_limits(raw_request.as_bytes(), &limits).is_ok());
    }

    #[test]
    fn parse_invalid_body_insanely_too_large() {
        let raw_request = concat!(
            "POST /hello.txt HTTP/1.1\r\n",
            "Host: www.example.com\r\n",
            "Content-Length: 1000000000000000000000000000000000000000000000000000000000000000000\r\n",
            "\r\n",
        );
        assert!(matches!(
            Request::parse(raw_request.as_bytes()),
            Err(Error::InvalidContentLength(_))
        ));
    }

    #[test]
    fn parse_invalid_body_slightly_too_large() {
        let raw_request = concat!(
            "POST /hello.txt HTTP/1.1\r\n",
            "Host: www.example.com\r\n",
            "Content-Length: 10000001\r\n",
            "\r\n",
        );
        assert!(matches!(
            Request::parse(raw_request.as_bytes()),
            Err(Error::MessageTooLong)
        ));
    }

    #[test]
    fn parse_incomplete_body_request() {
        let raw_request = concat!(
            "POST / HTTP/1.1\r\n",
            "Host: foo.com\r\n",
            "Content-Length: 100\r\n",
            "\r\n",
            "say=Hi&to=Mom\r\n",
        );
        assert!(matches!(
            Request::parse(raw_request.as_bytes()),
            Err(Error::BodyTruncated(_))
        ));
    }

    #[test]
    fn request_with_no_content_length_or_chunked_transfer_encoding_has_no_body() {
        let raw_request = concat!(
            "GET /hello.txt HTTP/1.1\r\n",
            "Host: www.example.com\r\n",
            "\r\n",
        );
        let raw_request_with_extra = String::from(raw_request) + "Hello, World!\r\n";
        let mut input = raw_request_with_extra.as_bytes();
        let request = Request::parse(&mut input).unwrap();
        assert!(request.body.is_empty());
        assert_eq!(b"Hello, World!\r\n", input);
    }

    #[test]
    fn max_header_bytes_checked() {
        let mut limits = Limits::default();
        limits.max_header_bytes = Some(80);
        let small_request = concat!(
            "GET /hello.txt HTTP/1.1\r\n",
            "Host: www.example.com\r\n",
            "Accept-Language: en, mi\r\n",
            "\r\n",
        );
        assert!(Request::parse_with_limits(small_request.as_bytes(), &limits).is_ok());
        let large_request = concat!(
            "GET /hello.txt HTTP/1.1\r\n",
            "Host: www.example.com\r\n",
            "Accept-Language: en, mi\r\n",
            "X-PogChamp-Level: Over 9000\r\n",
            "\r\n",
        );
        assert!(matches!(
            Request::parse_with_limits(large_request.as_bytes(), &limits),
            Err(Error::MessageTooLong)
        ));
    }

}
