use std::fmt;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum StatusCode {
    /// 100 Continue
    /// [RFC7231, Section 6.2.1](http://www.iana.org/go/rfc7231)
    Continue,
    /// 101 Switching Protocols
    /// [RFC7231, Section 6.2.2](http://www.iana.org/go/rfc7231)
    SwitchingProtocols,
    /// 102 Processing
    /// [RFC2518](http://www.iana.org/go/rfc2518)
    Processing,
    /// 200 OK
    /// [RFC7231, Section 6.3.1](http://www.iana.org/go/rfc7231)
    Ok,
    /// 201 Created
    /// [RFC7231, Section 6.3.2](http://www.iana.org/go/rfc7231)
    Created,
    /// 202 Accepted
    /// [RFC7231, Section 6.3.3](http://www.iana.org/go/rfc7231)
    Accepted,
    /// 203 Non-Authoritative Information
    /// [RFC7231, Section 6.3.4](http://www.iana.org/go/rfc7231)
    NonAuthoritativeInformation,
    /// 204 No Content
    /// [RFC7231, Section 6.3.5](http://www.iana.org/go/rfc7231)
    NoContent,
    /// 205 Reset Content
    /// [RFC7231, Section 6.3.6](http://www.iana.org/go/rfc7231)
    ResetContent,
    /// 206 Partial Content
    /// [RFC7233, Section 4.1](http://www.iana.org/go/rfc7233)
    PartialContent,
    /// 207 Multi-Status
    /// [RFC4918](http://www.iana.org/go/rfc4918)
    MultiStatus,
    /// 208 Already Reported
    /// [RFC5842](http://www.iana.org/go/rfc5842)
    AlreadyReported,
    /// 226 IM Used
    /// [RFC3229](http://www.iana.org/go/rfc3229)
    ImUsed,
    /// 300 Multiple Choices
    /// [RFC7231, Section 6.4.1](http://www.iana.org/go/rfc7231)
    MultipleChoices,
    /// 301 Moved Permanently
    /// [RFC7231, Section 6.4.2](http://www.iana.org/go/rfc7231)
    MovedPermanently,
    /// 302 Found
    /// [RFC7231, Section 6.4.3](http://www.iana.org/go/rfc7231)
    Found,
    /// 303 See Other
    /// [RFC7231, Section 6.4.4](http://www.iana.org/go/rfc7231)
    SeeOther,
    /// 304 Not Modified
    /// [RFC7232, Section 4.1](http://www.iana.org/go/rfc7232)
    NotModified,
    /// 305 Use Proxy
    /// [RFC7231, Section 6.4.5](http://www.iana.org/go/rfc7231)
    UseProxy,
    /// 307 Temporary Redirect
    /// [RFC7231, Section 6.4.7](http://www.iana.org/go/rfc7231)
    TemporaryRedirect,
    /// 308 Permanent Redirect
    /// [RFC7538](http://www.iana.org/go/rfc7538)
    PermanentRedirect,
    /// 400 Bad Request
    /// [RFC7231, Section 6.5.1](http://www.iana.org/go/rfc7231)
    BadRequest,
    /// 401 Unauthorized
    /// [RFC7235, Section 3.1](http://www.iana.org/go/rfc7235)
    Unauthorized,
    /// 402 Payment Required
    /// [RFC7231, Section 6.5.2](http://www.iana.org/go/rfc7231)
    PaymentRequired,
    /// 403 Forbidden
    /// [RFC7231, Section 6.5.3](http://www.iana.org/go/rfc7231)
    Forbidden,
    /// 404 Not Found
    /// [RFC7231, Section 6.5.4](http://www.iana.org/go/rfc7231)
    NotFound,
    /// 405 Method Not Allowed
    /// [RFC7231, Section 6.5.5](http://www.iana.org/go/rfc7231)
    MethodNotAllowed,
    /// 406 Not Acceptable
    /// [RFC7231, Section 6.5.6](http://www.iana.org/go/rfc7231)
    NotAcceptable,
    /// 407 Proxy Authentication Required
    /// [RFC7235, Section 3.2](http://www.iana.org/go/rfc7235)
    ProxyAuthenticationRequired,
    /// 408 Request Timeout
    /// [RFC7231, Section 6.5.7](http://www.iana.org/go/rfc7231)
    RequestTimeout,
    /// 409 Conflict
    /// [RFC7231, Section 6.5.8](http://www.iana.org/go/rfc7231)
    Conflict,
    /// 410 Gone
    /// [RFC7231, Section 6.5.9](http://www.iana.org/go/rfc7231)
    Gone,
    /// 411 Length Required
    /// [RFC7231, Section 6.5.10](http://www.iana.org/go/rfc7231)
    LengthRequired,
    /// 412 Precondition Failed
    /// [RFC7232, Section 4.2](http://www.iana.org/go/rfc7232)
    PreconditionFailed,
    /// 413 Payload Too Large
    /// [RFC7231, Section 6.5.11](http://www.iana.org/go/rfc7231)
    PayloadTooLarge,
    /// 414 URI Too Long
    /// [RFC7231, Section 6.5.12](http://www.iana.org/go/rfc7231)
    UriTooLong,
    /// 415 Unsupported Media Type
    /// [RFC7231, Section 6.5.13](http://www.iana.org/go/rfc7231),
    /// [RFC7694, Section 3](http://www.iana.org/go/rfc7694)
    UnsupportedMediaType,
    /// 416 Range Not Satisfiable
    /// [RFC7233, Section 4.4](http://www.iana.org/go/rfc7233)
    RangeNotSatisfiable,
    /// 417 Expectation Failed
    /// [RFC7231, Section 6.5.14](http://www.iana.org/go/rfc7231)
    ExpectationFailed,
    /// 418 I'm a Teapot
    /// [RFC7168, Section 2.3.3](http://www.iana.org/go/rfc7168)
    ImATeapot,
    /// 421 Misdirected Request
    /// [RFC7540, Section 9.1.2](http://www.iana.org/go/rfc7540)
    MisdirectedRequest,
    /// 422 Unprocessable Entity
    /// [RFC4918](http://www.iana.org/go/rfc4918)
    UnprocessableEntity,
    /// 423 Locked
    /// [RFC4918](http://www.iana.org/go/rfc4918)
    Locked,
    /// 424 Failed Dependency
    /// [RFC4918](http://www.iana.org/go/rfc4918)
    FailedDependency,
    /// 426 Upgrade Required
    /// [RFC7231, Section 6.5.15](http://www.iana.org/go/rfc7231)
    UpgradeRequired,
    /// 428 Precondition Required
    /// [RFC6585](http://www.iana.org/go/rfc6585)
    PreconditionRequired,
    /// 429 Too Many Requests
    /// [RFC6585](http://www.iana.org/go/rfc6585)
    TooManyRequests,
    /// 431 Request Header Fields Too Large
    /// [RFC6585](http://www.iana.org/go/rfc6585)
    RequestHeaderFieldsTooLarge,
    /// 451 Unavailable For Legal Reasons
    /// [RFC7725](http://www.iana.org/go/rfc7725)
    UnavailableForLegalReasons,
    /// 500 Internal Server Error
    /// [RFC7231, Section 6.6.1](http://www.iana.org/go/rfc7231)
    InternalServerError,
    /// 501 Not Implemented
    /// [RFC7231, Section 6.6.2](http://www.iana.org/go/rfc7231)
    NotImplemented,
    /// 502 Bad Gateway
    /// [RFC7231, Section 6.6.3](http://www.iana.org/go/rfc7231)
    BadGateway,
    /// 503 Service Unavailable
    /// [RFC7231, Section 6.6.4](http://www.iana.org/go/rfc7231)
    ServiceUnavailable,
    /// 504 Gateway Timeout
    /// [RFC7231, Section 6.6.5](http://www.iana.org/go/rfc7231)
    GatewayTimeout,
    /// 505 HTTP Version Not Supported
    /// [RFC7231, Section 6.6.6](http://www.iana.org/go/rfc7231)
    HttpVersionNotSupported,
    /// 506 Variant Also Negotiates
    /// [RFC2295](http://www.iana.org/go/rfc2295)
    VariantAlsoNegotiates,
    /// 507 Insufficient Storage
    /// [RFC4918](http://www.iana.org/go/rfc4918)
    InsufficientStorage,
    /// 508 Loop Detected
    /// [RFC5842](http://www.iana.org/go/rfc5842)
    LoopDetected,
    /// 510 Not Extended
    /// [RFC2774](http://www.iana.org/go/rfc2774)
    NotExtended,
    /// 511 Network Authentication Required
    /// [RFC6585](http://www.iana.org/go/rfc6585)
    NetworkAuthenticationRequired,
    /// Catch-all for unregistered status codes
    Unregistered(u16),
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum StatusClass {
    /// 1xx: Informational - Request received, continuing process
    Informational,
    /// 2xx: Success - The action was successfully received, understood, and accepted
    Success,
    /// 3xx: Redirection - Further action must be taken in order to complete the request
    Redirection,
    /// 4xx: Client Error - The request contains bad syntax or cannot be fulfilled
    ClientError,
    /// 5xx: Server Error - The server failed to fulfill an apparently valid request
    ServerError,
    /// Catch-All for everything outside the defined classes
    None,
}

impl StatusClass {
    #[must_use]
    pub fn from_u16(code: u16) -> Self {
        match code {
            100..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirection,
            400..=499 => StatusClass::ClientError,
            500..=599 => StatusClass::ServerError,
            _ => StatusClass::None,
        }
    }
}

// Registered codes and their reason phrases.
macro_rules! status_codes {
    ($($variant:ident => ($code:literal, $reason:literal),)+) => {
        impl StatusCode {
            #[must_use]
            pub fn from_u16(value: u16) -> Self {
                match value {
                    $($code => StatusCode::$variant,)+
                    _ => StatusCode::Unregistered(value),
                }
            }

            #[must_use]
            pub fn to_u16(self) -> u16 {
                match self {
                    $(StatusCode::$variant => $code,)+
                    StatusCode::Unregistered(value) => value,
                }
            }

            /// Returns the registered reason phrase, or `None` for an
            /// unregistered status code.
            #[must_use]
            pub fn reason_phrase(self) -> Option<&'static str> {
                match self {
                    $(StatusCode::$variant => Some($reason),)+
                    StatusCode::Unregistered(_) => None,
                }
            }
        }
    };
}

status_codes! {
    Continue => (100, "Continue"),
    SwitchingProtocols => (101, "Switching Protocols"),
    Processing => (102, "Processing"),
    Ok => (200, "OK"),
    Created => (201, "Created"),
    Accepted => (202, "Accepted"),
    NonAuthoritativeInformation => (203, "Non-Authoritative Information"),
    NoContent => (204, "No Content"),
    ResetContent => (205, "Reset Content"),
    PartialContent => (206, "Partial Content"),
    MultiStatus => (207, "Multi-Status"),
    AlreadyReported => (208, "Already Reported"),
    ImUsed => (226, "IM Used"),
    MultipleChoices => (300, "Multiple Choices"),
    MovedPermanently => (301, "Moved Permanently"),
    Found => (302, "Found"),
    SeeOther => (303, "See Other"),
    NotModified => (304, "Not Modified"),
    UseProxy => (305, "Use Proxy"),
    TemporaryRedirect => (307, "Temporary Redirect"),
    PermanentRedirect => (308, "Permanent Redirect"),
    BadRequest => (400, "Bad Request"),
    Unauthorized => (401, "Unauthorized"),
    PaymentRequired => (402, "Payment Required"),
    Forbidden => (403, "Forbidden"),
    NotFound => (404, "Not Found"),
    MethodNotAllowed => (405, "Method Not Allowed"),
    NotAcceptable => (406, "Not Acceptable"),
    ProxyAuthenticationRequired => (407, "Proxy Authentication Required"),
    RequestTimeout => (408, "Request Timeout"),
    Conflict => (409, "Conflict"),
    Gone => (410, "Gone"),
    LengthRequired => (411, "Length Required"),
    PreconditionFailed => (412, "Precondition Failed"),
    PayloadTooLarge => (413, "Payload Too Large"),
    UriTooLong => (414, "URI Too Long"),
    UnsupportedMediaType => (415, "Unsupported Media Type"),
    RangeNotSatisfiable => (416, "Range Not Satisfiable"),
    ExpectationFailed => (417, "Expectation Failed"),
    ImATeapot => (418, "I'm a Teapot"),
    MisdirectedRequest => (421, "Misdirected Request"),
    UnprocessableEntity => (422, "Unprocessable Entity"),
    Locked => (423, "Locked"),
    FailedDependency => (424, "Failed Dependency"),
    UpgradeRequired => (426, "Upgrade Required"),
    PreconditionRequired => (428, "Precondition Required"),
    TooManyRequests => (429, "Too Many Requests"),
    RequestHeaderFieldsTooLarge => (431, "Request Header Fields Too Large"),
    UnavailableForLegalReasons => (451, "Unavailable For Legal Reasons"),
    InternalServerError => (500, "Internal Server Error"),
    NotImplemented => (501, "Not Implemented"),
    BadGateway => (502, "Bad Gateway"),
    ServiceUnavailable => (503, "Service Unavailable"),
    GatewayTimeout => (504, "Gateway Timeout"),
    HttpVersionNotSupported => (505, "HTTP Version Not Supported"),
    VariantAlsoNegotiates => (506, "Variant Also Negotiates"),
    InsufficientStorage => (507, "Insufficient Storage"),
    LoopDetected => (508, "Loop Detected"),
    NotExtended => (510, "Not Extended"),
    NetworkAuthenticationRequired => (511, "Network Authentication Required"),
}

impl StatusCode {
    #[must_use]
    pub fn class(self) -> StatusClass {
        StatusClass::from_u16(self.to_u16())
    }

    #[must_use]
    pub fn is_informational(self) -> bool {
        self.class() == StatusClass::Informational
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self.class() == StatusClass::Success
    }

    #[must_use]
    pub fn is_redirection(self) -> bool {
        self.class() == StatusClass::Redirection
    }

    #[must_use]
    pub fn is_client_error(self) -> bool {
        self.class() == StatusClass::ClientError
    }

    #[must_use]
    pub fn is_server_error(self) -> bool {
        self.class() == StatusClass::ServerError
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        self.is_client_error() || self.is_server_error()
    }
}

impl From<u16> for StatusCode {
    fn from(value: u16) -> Self {
        Self::from_u16(value)
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.to_u16()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.reason_phrase() {
            Some(reason_phrase) => write!(f, "{} {}", self.to_u16(), reason_phrase),
            None => write!(f, "{}", self.to_u16()),
        }
    }
}
