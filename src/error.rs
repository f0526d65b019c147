/// This is the enumeration of all the different kinds of errors which this
/// crate generates.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The body ended before the number of bytes announced by
    /// `Content-Length` or a chunk size line could be read.
    #[error("message body ended early")]
    BodyTruncated(#[source] std::io::Error),

    /// The attached chunk size contains something other than hexadecimal
    /// digits.
    #[error("chunk size is not hexadecimal")]
    ChunkSizeNotHex(String),

    /// The attached bytes did not parse as valid chunk size text.
    #[error("chunk size line is not valid text")]
    ChunkSizeLineNotValidText(Vec<u8>),

    /// Header bytes were not valid UTF-8.
    #[error("header is not valid UTF-8")]
    FromUtf8(#[from] std::string::FromUtf8Error),

    /// The attached header line ended before a colon delimited its name.
    #[error("header line missing colon")]
    HeaderLineMissingColon(String),

    /// A chunk size in the body was invalid.
    #[error("invalid chunk size value")]
    InvalidChunkSize(#[source] std::num::ParseIntError),

    /// The attached bytes appeared after the end of a chunk
    /// in the place where a carriage-return and line-feed were expected.
    #[error("unexpected extra junk at the end of a chunk")]
    InvalidChunkTerminator(Vec<u8>),

    /// The `Content-Length` header value is not valid.
    #[error("invalid Content-Length header value")]
    InvalidContentLength(String),

    /// The attached text is not a `type/subtype` media type.
    #[error("invalid media type")]
    InvalidMediaType(String),

    /// The attached status code text is not exactly three decimal digits.
    #[error("invalid status code")]
    InvalidStatusCode(String),

    /// The attached bytes are the beginning of a line whose length exceeds
    /// the configured line limit.
    #[error("line too long")]
    LineTooLong(Vec<u8>),

    /// The message is too large to fit within the configured size limit.
    #[error("message exceeds maximum size limit")]
    MessageTooLong,

    /// The input ended before a start line could be read.
    #[error("message has no start line")]
    MissingStartLine,

    /// An error occurred reading from the underlying source.
    #[error("unable to read message")]
    Read(#[source] std::io::Error),

    /// No delimiter was found to parse the method from the attached HTTP
    /// request line.
    #[error("unable to find method delimiter in request line")]
    RequestLineNoMethodDelimiter(String),

    /// The method could not be parsed from the HTTP request line attached.
    /// Either there is extra whitespace, or the method is an empty string.
    #[error("unable to parse method from request line")]
    RequestLineNoMethodOrExtraWhitespace(String),

    /// No delimiter was found to parse the target URI from the attached HTTP
    /// request line.
    #[error("unable to find target URI delimiter in request line")]
    RequestLineNoTargetDelimiter(String),

    /// The target URI could not be parsed from the HTTP request line attached.
    /// Either there is extra whitespace, or the target URI is an empty string.
    #[error("unable to parse target URI from request line")]
    RequestLineNoTargetOrExtraWhitespace(String),

    /// The protocol is unrecognized or could not be parsed from the HTTP
    /// request line attached.
    #[error("unrecognized protocol in request line")]
    RequestLineProtocol(String),

    /// The request line contained an invalid target URI.
    #[error("invalid request target URI")]
    RequestTargetUriInvalid(#[from] rhymuri::Error),

    /// The attached bytes did not parse as valid text for the start line.
    #[error("start line is not valid text")]
    StartLineNotValidText(Vec<u8>),

    /// The attached status code was out of range.
    #[error("status code is out of range")]
    StatusCodeOutOfRange(usize),

    /// No delimiter was found to parse the protocol from the attached HTTP
    /// status line.
    #[error("unable to find protocol delimiter in status line")]
    StatusLineNoProtocolDelimiter(String),

    /// No delimiter was found to parse the status code from the attached HTTP
    /// status line.
    #[error("unable to parse status code from status line")]
    StatusLineNoStatusCodeDelimiter(String),

    /// The protocol is unrecognized or could not be parsed from the HTTP
    /// status line attached.
    #[error("unrecognized protocol in status line")]
    StatusLineProtocol(String),

    /// An error occurred during string formatting.
    #[error("error during string format")]
    StringFormat,

    /// A header contained a byte which is not allowed at its position.
    #[error("unexpected character {0:#04x} in header")]
    UnexpectedCharacter(u8),
}
