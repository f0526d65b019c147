use super::{
    headers::Headers,
    lines::Lines,
    parse::Parser,
};
use crate::{
    Error,
    Limits,
};
use std::io::{
    self,
    Read,
};
use tracing::{
    debug,
    trace,
};

fn parse_chunk_size(chunk_size_line: &str) -> Result<usize, Error> {
    let delimiter = chunk_size_line
        .find(|c| c == ';' || c == ' ' || c == '\t')
        .unwrap_or_else(|| chunk_size_line.len());
    let chunk_size = &chunk_size_line[..delimiter];
    if !chunk_size.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(Error::ChunkSizeNotHex(chunk_size.into()));
    }
    usize::from_str_radix(chunk_size, 16).map_err(Error::InvalidChunkSize)
}

fn unexpected_end() -> Error {
    Error::BodyTruncated(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "chunked body ended early",
    ))
}

/// A body sent with the `chunked` transfer coding, once decoded.
#[derive(Debug, Default)]
pub struct ChunkedBody {
    pub buffer: Vec<u8>,
    pub trailer: Headers,
}

impl ChunkedBody {
    /// Decodes chunks from `reader` up to and including the trailer.
    pub fn decode<R: Read>(
        reader: R,
        limits: &Limits,
    ) -> Result<Self, Error> {
        let mut lines = Lines::new(reader).with_line_limit(limits.line_limit);
        Self::decode_lines(&mut lines, limits)
    }

    fn decode_lines<R: Read>(
        lines: &mut Lines<R>,
        limits: &Limits,
    ) -> Result<Self, Error> {
        let mut body = Self::default();
        loop {
            let chunk_size_line = lines.next().ok_or_else(unexpected_end)??;
            let chunk_size_line = std::str::from_utf8(&chunk_size_line)
                .map_err(|_| Error::ChunkSizeLineNotValidText(chunk_size_line.clone()))?;
            let chunk_size = parse_chunk_size(chunk_size_line)?;
            trace!(chunk_size, "chunk");
            if chunk_size == 0 {
                break;
            }
            let total = body
                .buffer
                .len()
                .checked_add(chunk_size)
                .ok_or(Error::MessageTooLong)?;
            limits.check_body(total)?;
            body.decode_data(lines.get_mut(), chunk_size)?;
            decode_terminator(lines.get_mut())?;
        }
        let mut parser = Parser::new();
        let trailer_start = lines.consumed();
        loop {
            let line = lines.next().ok_or_else(unexpected_end)??;
            match limits.max_header_bytes {
                Some(max_header_bytes)
                    if lines.consumed() - trailer_start > max_header_bytes =>
                {
                    return Err(Error::MessageTooLong);
                },
                _ => (),
            }
            if line.is_empty() {
                break;
            }
            parser.parse_line(&line)?;
        }
        body.trailer = parser.finish()?;
        debug!(
            size = body.buffer.len(),
            trailer = body.trailer.len_raw(),
            "decoded chunked body"
        );
        Ok(body)
    }

    fn decode_data<R: Read>(
        &mut self,
        reader: &mut R,
        chunk_size: usize,
    ) -> Result<(), Error> {
        let read = reader
            .take(chunk_size as u64)
            .read_to_end(&mut self.buffer)
            .map_err(Error::Read)?;
        if read < chunk_size {
            return Err(unexpected_end());
        }
        Ok(())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }
}

fn decode_terminator<R: Read>(reader: &mut R) -> Result<(), Error> {
    let mut terminator = [0; 2];
    reader.read_exact(&mut terminator).map_err(Error::BodyTruncated)?;
    if &terminator == b"\r\n" {
        Ok(())
    } else {
        Err(Error::InvalidChunkTerminator(terminator.to_vec()))
    }
}
