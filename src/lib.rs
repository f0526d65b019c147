#![warn(clippy::pedantic)]
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

mod error;
pub mod http;
mod limits;
pub mod media_type;
pub mod mime;

pub use crate::error::Error;
pub use crate::limits::Limits;
pub use crate::media_type::MediaType;
pub use crate::mime::Mime;

// This is the character sequence corresponding to a carriage return (CR)
// followed by a line feed (LF), which officially delimits each
// line of an HTTP message.
const CRLF: &str = "\r\n";
