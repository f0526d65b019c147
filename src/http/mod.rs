//! HTTP/1.1 messages: status codes, header fields, and the parsers which
//! read them off the wire.

pub mod chunked_body;
pub mod headers;
pub mod lines;
pub mod message;
pub mod parse;
pub mod request;
pub mod response;
pub mod status;

pub use chunked_body::ChunkedBody;
pub use headers::{
    Headers,
    RawHeader,
    TypedHeader,
};
pub use message::Message;
pub use request::{
    Request,
    RequestLine,
};
pub use response::{
    Response,
    StatusLine,
};
pub use status::{
    StatusClass,
    StatusCode,
};
