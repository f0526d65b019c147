use std::fmt;

/// Something which names a media type, split into its top-level type and its
/// subtype, as in `text/html`.
pub trait Mime: fmt::Display {
    fn top(&self) -> &str;
    fn sub(&self) -> &str;

    /// The `type/subtype` pair without any parameters.
    fn essence(&self) -> String {
        format!("{}/{}", self.top(), self.sub())
    }
}
