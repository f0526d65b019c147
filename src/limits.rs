/// Size limits applied while parsing messages.  Each limit may be set to
/// `None` to disable it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Limits {
    /// Maximum number of bytes in a single line (start line, header line or
    /// chunk size line), not counting the terminating CRLF.
    pub line_limit: Option<usize>,

    /// Maximum number of bytes in the start line and header block together,
    /// including line terminators.
    pub max_header_bytes: Option<usize>,

    /// Maximum number of bytes in a decoded body.
    pub max_body_bytes: Option<usize>,
}

impl Limits {
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            line_limit: None,
            max_header_bytes: None,
            max_body_bytes: None,
        }
    }

    pub(crate) fn check_body(&self, size: usize) -> Result<(), crate::Error> {
        match self.max_body_bytes {
            Some(max_body_bytes) if size > max_body_bytes => {
                Err(crate::Error::MessageTooLong)
            },
            _ => Ok(()),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            line_limit: Some(1000),
            max_header_bytes: Some(64 * 1024),
            max_body_bytes: Some(10_000_000),
        }
    }
}
