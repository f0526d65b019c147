use crate::Error;
use std::io::{
    ErrorKind,
    Read,
};
use tracing::trace;

const CARRIAGE_RETURN: u8 = b'\r';
const LINEFEED: u8 = b'\n';

/// Iterator over the CRLF-delimited lines of a reader.  The reader is
/// consumed one byte at a time so that nothing past the last line requested
/// is taken from it; wrap unbuffered sources such as sockets in a
/// `BufReader` first.
pub struct Lines<R> {
    consumed: usize,
    done: bool,
    inner: R,
    line_limit: Option<usize>,
}

impl<R> Lines<R> {
    pub fn new(inner: R) -> Self {
        Self {
            consumed: 0,
            done: false,
            inner,
            line_limit: None,
        }
    }

    #[must_use]
    pub fn with_line_limit(
        mut self,
        line_limit: Option<usize>,
    ) -> Self {
        self.line_limit = line_limit;
        self
    }

    /// Number of bytes taken from the reader so far, including line
    /// terminators.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Lines<R> {
    fn read_byte(&mut self) -> Result<Option<u8>, Error> {
        let mut byte = [0; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.consumed += 1;
                    return Ok(Some(byte[0]));
                },
                Err(err) if err.kind() == ErrorKind::Interrupted => (),
                Err(err) => return Err(Error::Read(err)),
            }
        }
    }

    fn next_line(&mut self) -> Result<Option<Vec<u8>>, Error> {
        let mut line = Vec::new();
        loop {
            let byte = match self.read_byte()? {
                Some(byte) => byte,
                None if line.is_empty() => return Ok(None),
                None => return Ok(Some(line)),
            };
            if byte == LINEFEED && line.last() == Some(&CARRIAGE_RETURN) {
                line.pop();
                trace!(length = line.len(), "read line");
                return Ok(Some(line));
            }
            line.push(byte);
            if let Some(limit) = self.line_limit {
                let pending_cr = usize::from(byte == CARRIAGE_RETURN);
                if line.len() - pending_cr > limit {
                    line.truncate(limit);
                    return Err(Error::LineTooLong(line));
                }
            }
        }
    }
}

impl<R: Read> Iterator for Lines<R> {
    type Item = Result<Vec<u8>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let line = self.next_line().transpose();
        if !matches!(line, Some(Ok(_))) {
            self.done = true;
        }
        line
    }
}

/// Adds `lines` to every reader.
pub trait ReadLines: Read + Sized {
    fn lines(self) -> Lines<Self> {
        Lines::new(self)
    }
}

impl<T> ReadLines for T where T: Read {}
