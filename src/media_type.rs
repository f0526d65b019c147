use crate::{
    http::parse::is_token,
    mime::Mime,
    Error,
};
use std::{
    fmt,
    str::FromStr,
};

// TODO: generate the registered types from the IANA media type registry
// (https://www.iana.org/assignments/media-types/media-types.xhtml).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum MediaType {
    Css,
    FormUrlEncoded,
    Html,
    JavaScript,
    Jpeg,
    Json,
    OctetStream,
    PlainText,
    Png,
    Xml,

    /// Any other media type.  Both parts are stored in lower case.
    Other {
        top: String,
        sub: String,
    },
}

impl MediaType {
    fn from_parts(top: &str, sub: &str) -> Self {
        let top = top.to_ascii_lowercase();
        let sub = sub.to_ascii_lowercase();
        match (top.as_str(), sub.as_str()) {
            ("text", "css") => MediaType::Css,
            ("application", "x-www-form-urlencoded") => MediaType::FormUrlEncoded,
            ("text", "html") => MediaType::Html,
            ("text", "javascript") => MediaType::JavaScript,
            ("image", "jpeg") => MediaType::Jpeg,
            ("application", "json") => MediaType::Json,
            ("application", "octet-stream") => MediaType::OctetStream,
            ("text", "plain") => MediaType::PlainText,
            ("image", "png") => MediaType::Png,
            ("application", "xml") => MediaType::Xml,
            _ => MediaType::Other {
                top,
                sub,
            },
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        self.top() == "text"
    }
}

impl Mime for MediaType {
    fn top(&self) -> &str {
        match self {
            MediaType::Css
            | MediaType::Html
            | MediaType::JavaScript
            | MediaType::PlainText => "text",
            MediaType::FormUrlEncoded
            | MediaType::Json
            | MediaType::OctetStream
            | MediaType::Xml => "application",
            MediaType::Jpeg | MediaType::Png => "image",
            MediaType::Other {
                top,
                ..
            } => top,
        }
    }

    fn sub(&self) -> &str {
        match self {
            MediaType::Css => "css",
            MediaType::FormUrlEncoded => "x-www-form-urlencoded",
            MediaType::Html => "html",
            MediaType::JavaScript => "javascript",
            MediaType::Jpeg => "jpeg",
            MediaType::Json => "json",
            MediaType::OctetStream => "octet-stream",
            MediaType::PlainText => "plain",
            MediaType::Png => "png",
            MediaType::Xml => "xml",
            MediaType::Other {
                sub,
                ..
            } => sub,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.top(), self.sub())
    }
}

impl FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let essence = match s.find(';') {
            Some(delimiter) => &s[..delimiter],
            None => s,
        }
        .trim();
        let delimiter = essence
            .find('/')
            .ok_or_else(|| Error::InvalidMediaType(s.into()))?;
        let top = &essence[..delimiter];
        let sub = &essence[delimiter + 1..];
        let is_valid_part =
            |part: &str| !part.is_empty() && part.bytes().all(is_token);
        if is_valid_part(top) && is_valid_part(sub) {
            Ok(MediaType::from_parts(top, sub))
        } else {
            Err(Error::InvalidMediaType(s.into()))
        }
    }
}
