use super::parse::Parser;
use crate::{
    media_type::MediaType,
    Error,
};
use std::iter::FromIterator;
use tracing::warn;

/// # Examples
///
/// ```
/// use teapot::http::headers::{TypedHeader, RawHeader};
///
/// #[derive(PartialEq, Eq, Debug)]
/// pub struct ServerHeader {
///     value: String
/// }
///
/// impl TypedHeader for ServerHeader {
///     fn name() -> &'static str {
///         "server"
///     }
///
///     fn canonical_name() -> &'static str {
///         "Server"
///     }
///
///     fn parse(raw: &[RawHeader]) -> Option<Self> {
///         raw.first().map(|raw| ServerHeader { value: raw.value().to_string() })
///     }
///
///     fn raw_values(&self) -> Vec<String> {
///         vec![self.value.clone()]
///     }
/// }
///
/// let header = ServerHeader { value: "teapot/0.1".into() };
/// let raw = header.to_raw();
/// assert_eq!("Server", raw[0].name());
/// assert_eq!(Some(header), ServerHeader::parse(&raw));
/// ```
pub trait TypedHeader: Eq + Sized {
    /// This is the name of the header in lower case.
    /// It is used in [`Headers`] to look up the raw header(s).
    fn name() -> &'static str;

    /// This is the name of the header in its canonical form.
    /// Used by [`to_raw`](TypedHeader::to_raw) as the header name.
    fn canonical_name() -> &'static str;

    /// Converts a list of raw values to a `TypedHeader`
    /// The list is required for headers like `Set-Cookie` which might appear
    /// multiple times in a response.  Other headers might only use the first
    /// value of `raw` and ignore the rest.
    fn parse(raw: &[RawHeader]) -> Option<Self>;

    /// Returns the raw values of this header.
    /// Used by [`to_raw`](TypedHeader::to_raw) as the header value.  When
    /// multiple values are returned, `to_raw` will return multiple raw headers
    /// for each value.
    fn raw_values(&self) -> Vec<String>;

    /// Converts the header back to one or more [`RawHeader`]s
    fn to_raw(&self) -> Vec<RawHeader> {
        self.raw_values()
            .into_iter()
            .map(|value| RawHeader::new(Self::canonical_name(), value))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RawHeader {
    name: String,
    value: String,
}

impl RawHeader {
    pub fn new<S, T>(
        name: S,
        value: T,
    ) -> Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parses a single `Name: value` header line, without its line
    /// terminator.
    pub fn parse<S>(line: S) -> Result<Self, Error>
    where
        S: AsRef<str>,
    {
        let line = line.as_ref();
        let mut parser = Parser::new();
        parser.parse_line(line.as_bytes())?;
        parser
            .finish()?
            .into_iter()
            .next()
            .ok_or_else(|| Error::HeaderLineMissingColon(line.into()))
    }

    #[must_use]
    pub fn lower_name(&self) -> String {
        self.name.to_ascii_lowercase()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    fn has_name(
        &self,
        name: &str,
    ) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// An ordered collection of header fields.  Names are compared without
/// regard to case, and repeated fields are kept in the order received.
///
/// # Examples
///
/// ```
/// use teapot::http::headers::{Dnt, DntHeader, Headers, RawHeader};
///
/// let mut headers = Headers::new();
/// headers.append_raw(RawHeader::new("DNT", "1"));
///
/// let dnt: DntHeader = headers.get().unwrap();
/// assert_eq!(Dnt::Enabled, *dnt.value());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Headers {
    headers: Vec<RawHeader>,
}

impl Headers {
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: Vec::new(),
        }
    }

    pub fn append<H: TypedHeader>(
        &mut self,
        header: &H,
    ) {
        self.headers.extend(header.to_raw());
    }

    pub fn append_raw(
        &mut self,
        header: RawHeader,
    ) {
        self.headers.push(header);
    }

    /// Replaces every field sharing the typed header's name.
    pub fn set<H: TypedHeader>(
        &mut self,
        header: &H,
    ) {
        self.remove(H::name());
        self.append(header);
    }

    #[must_use]
    pub fn get<H: TypedHeader>(&self) -> Option<H> {
        let raw = self
            .headers
            .iter()
            .filter(|header| header.has_name(H::name()))
            .cloned()
            .collect::<Vec<_>>();
        H::parse(&raw)
    }

    #[must_use]
    pub fn get_raw(
        &self,
        name: &str,
    ) -> Vec<&RawHeader> {
        self.headers.iter().filter(|header| header.has_name(name)).collect()
    }

    #[must_use]
    pub fn has(
        &self,
        name: &str,
    ) -> bool {
        self.headers.iter().any(|header| header.has_name(name))
    }

    /// Returns whether the comma-separated values of the named field contain
    /// the given token, ignoring case.
    #[must_use]
    pub fn has_token(
        &self,
        name: &str,
        token: &str,
    ) -> bool {
        self.get_raw(name).iter().any(|header| {
            header
                .value()
                .split(',')
                .any(|value| value.trim().eq_ignore_ascii_case(token))
        })
    }

    pub fn remove(
        &mut self,
        name: &str,
    ) {
        self.headers.retain(|header| !header.has_name(name));
    }

    #[must_use]
    pub fn len_raw(&self) -> usize {
        self.headers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawHeader> {
        self.headers.iter()
    }

    /// Renders the fields as `Name: value` lines followed by the empty line
    /// which ends a header block.
    #[must_use]
    pub fn generate(&self) -> Vec<u8> {
        let mut output = Vec::new();
        for header in &self.headers {
            output.extend(header.name.as_bytes());
            output.extend(b": ");
            output.extend(header.value.as_bytes());
            output.extend(crate::CRLF.as_bytes());
        }
        output.extend(crate::CRLF.as_bytes());
        output
    }
}

impl FromIterator<RawHeader> for Headers {
    fn from_iter<I: IntoIterator<Item = RawHeader>>(iter: I) -> Self {
        Self {
            headers: iter.into_iter().collect(),
        }
    }
}

impl Extend<RawHeader> for Headers {
    fn extend<I: IntoIterator<Item = RawHeader>>(
        &mut self,
        iter: I,
    ) {
        self.headers.extend(iter);
    }
}

impl IntoIterator for Headers {
    type Item = RawHeader;
    type IntoIter = std::vec::IntoIter<RawHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a RawHeader;
    type IntoIter = std::slice::Iter<'a, RawHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.iter()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Dnt {
    Disabled,
    Enabled,
    Unspecified,
}

#[derive(PartialEq, Eq, Debug)]
pub struct DntHeader {
    value: Dnt,
}

impl DntHeader {
    #[must_use]
    pub fn new(value: Dnt) -> Self {
        Self {
            value,
        }
    }

    #[must_use]
    pub fn value(&self) -> &Dnt {
        &self.value
    }
}

impl TypedHeader for DntHeader {
    fn name() -> &'static str {
        "dnt"
    }

    fn canonical_name() -> &'static str {
        "DNT"
    }

    fn parse(raw: &[RawHeader]) -> Option<Self> {
        let value = match raw.first().map(RawHeader::value) {
            Some("1") => Dnt::Enabled,
            Some("0") => Dnt::Disabled,
            _ => Dnt::Unspecified,
        };
        Some(Self::new(value))
    }

    fn raw_values(&self) -> Vec<String> {
        match self.value {
            Dnt::Enabled => vec!["1".into()],
            Dnt::Disabled => vec!["0".into()],
            Dnt::Unspecified => vec![],
        }
    }
}

#[derive(PartialEq, Eq, Debug)]
pub struct UserAgentHeader {
    value: String,
}

impl UserAgentHeader {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TypedHeader for UserAgentHeader {
    fn name() -> &'static str {
        "user-agent"
    }

    fn canonical_name() -> &'static str {
        "User-Agent"
    }

    fn parse(raw: &[RawHeader]) -> Option<Self> {
        raw.first().map(|raw| Self::new(raw.value()))
    }

    fn raw_values(&self) -> Vec<String> {
        vec![self.value.clone()]
    }
}

#[derive(PartialEq, Eq, Debug)]
pub struct HostHeader {
    value: String,
}

impl HostHeader {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TypedHeader for HostHeader {
    fn name() -> &'static str {
        "host"
    }

    fn canonical_name() -> &'static str {
        "Host"
    }

    fn parse(raw: &[RawHeader]) -> Option<Self> {
        raw.first().map(|raw| Self::new(raw.value()))
    }

    fn raw_values(&self) -> Vec<String> {
        vec![self.value.clone()]
    }
}

#[derive(PartialEq, Eq, Debug)]
pub struct ContentLengthHeader {
    value: u64,
}

impl ContentLengthHeader {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self {
            value,
        }
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Like [`TypedHeader::parse`], but says why the raw values were
    /// rejected.  Repeated fields are accepted only when they all agree.
    pub fn try_parse(raw: &[RawHeader]) -> Result<Option<Self>, Error> {
        let mut value = None;
        for header in raw {
            let invalid = || Error::InvalidContentLength(header.value().into());
            if !header.value().bytes().all(|byte| byte.is_ascii_digit()) {
                return Err(invalid());
            }
            let next = header.value().parse::<u64>().map_err(|_| invalid())?;
            match value {
                Some(previous) if previous != next => {
                    warn!(previous, next, "conflicting Content-Length values");
                    return Err(Error::InvalidContentLength(header.value().into()));
                },
                _ => value = Some(next),
            }
        }
        Ok(value.map(Self::new))
    }
}

impl TypedHeader for ContentLengthHeader {
    fn name() -> &'static str {
        "content-length"
    }

    fn canonical_name() -> &'static str {
        "Content-Length"
    }

    fn parse(raw: &[RawHeader]) -> Option<Self> {
        Self::try_parse(raw).ok().flatten()
    }

    fn raw_values(&self) -> Vec<String> {
        vec![self.value.to_string()]
    }
}

#[derive(PartialEq, Eq, Debug)]
pub struct ContentTypeHeader {
    media_type: MediaType,
    parameters: String,
}

impl ContentTypeHeader {
    #[must_use]
    pub fn new(media_type: MediaType) -> Self {
        Self {
            media_type,
            parameters: String::new(),
        }
    }

    #[must_use]
    pub fn with_parameters<S: Into<String>>(
        mut self,
        parameters: S,
    ) -> Self {
        self.parameters = parameters.into();
        self
    }

    #[must_use]
    pub fn media_type(&self) -> &MediaType {
        &self.media_type
    }

    /// The text after the first `;`, with surrounding whitespace removed.
    #[must_use]
    pub fn parameters(&self) -> &str {
        &self.parameters
    }

    /// Looks up a parameter such as `charset` by name, ignoring case.
    #[must_use]
    pub fn parameter(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.parameters
            .split(';')
            .map(str::trim)
            .filter_map(|parameter| {
                let delimiter = parameter.find('=')?;
                Some((&parameter[..delimiter], &parameter[delimiter + 1..]))
            })
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(name))
            .map(|(_, value)| value.trim().trim_matches('"'))
    }
}

impl TypedHeader for ContentTypeHeader {
    fn name() -> &'static str {
        "content-type"
    }

    fn canonical_name() -> &'static str {
        "Content-Type"
    }

    fn parse(raw: &[RawHeader]) -> Option<Self> {
        let value = raw.first()?.value();
        let media_type = value.parse().ok()?;
        let parameters = match value.find(';') {
            Some(delimiter) => value[delimiter + 1..].trim(),
            None => "",
        };
        Some(Self::new(media_type).with_parameters(parameters))
    }

    fn raw_values(&self) -> Vec<String> {
        if self.parameters.is_empty() {
            vec![self.media_type.to_string()]
        } else {
            vec![format!("{}; {}", self.media_type, self.parameters)]
        }
    }
}
