use crate::byte_source::{ByteSource, ReadOutcome};
use crate::error::Error;

pub const DEFAULT_CAPACITY: usize = 4096;

/// A reusable scratch buffer plus a thin read-into-buffer operation over any
/// |ByteSource|. The buffer is allocated once at construction and never resized;
/// each read overwrites the addressed region in place, so after a read that
/// returned |Bytes(n)| only the first n bytes of that region are meaningful and
/// the rest is stale data from earlier calls.
///
/// One instance serves one caller at a time. The reader takes |&mut self| on
/// every read, so interleaving reads from two callers through a shared instance
/// would clobber each other's buffer contents; that usage is unsupported rather
/// than guarded against.
///
/// ```
/// use std::io::Cursor;
/// use bytereader::ByteBufferReader;
///
/// let mut source = Cursor::new((0u8..40).collect::<Vec<u8>>());
/// let mut reader = ByteBufferReader::new();
/// let mut collected = Vec::new();
/// // Drain the source 16 bytes at a time.
/// loop {
///     let len = reader.read_len(&mut source, 16).unwrap().count();
///     if len < 0 {
///         break;
///     }
///     collected.extend_from_slice(&reader.bytes()[..len as usize]);
/// }
/// assert_eq!(collected, (0u8..40).collect::<Vec<u8>>());
/// ```
#[derive(Debug)]
pub struct ByteBufferReader {
    buf: Vec<u8>,
}

impl ByteBufferReader {
    /// Create a reader with the default 4096-byte buffer.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a reader with a zero-initialized buffer of exactly |capacity| bytes.
    /// |capacity| is expected to be at least 1.
    pub fn with_capacity(capacity: usize) -> Self {
        ByteBufferReader {
            buf: vec![0; capacity],
        }
    }

    /// The fixed length of the buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// View of the whole buffer, including stale bytes beyond the last read's count.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Fill the entire buffer from |source|. Equivalent to
    /// |read_at(source, 0, capacity())|.
    pub fn read<S: ByteSource>(&mut self, source: &mut S) -> Result<ReadOutcome, Error> {
        let capacity = self.buf.len();
        self.read_at(source, 0, capacity)
    }

    /// Fill the first |length| bytes of the buffer from |source|. Equivalent to
    /// |read_at(source, 0, length)|.
    pub fn read_len<S: ByteSource>(
        &mut self,
        source: &mut S,
        length: usize,
    ) -> Result<ReadOutcome, Error> {
        self.read_at(source, 0, length)
    }

    /// Ask |source| to fill |buffer[offset .. offset + length)| with as many bytes as
    /// it has available, up to |length|. Returns the count actually written, or
    /// |EndOfSource| if the source was already exhausted. A source failure propagates
    /// unchanged; nothing is retried.
    ///
    /// The caller must keep |offset + length| within |capacity()|; this is not
    /// pre-validated and an out-of-range region panics at the slice index.
    pub fn read_at<S: ByteSource>(
        &mut self,
        source: &mut S,
        offset: usize,
        length: usize,
    ) -> Result<ReadOutcome, Error> {
        source.fill(&mut self.buf[offset..offset + length])
    }
}

impl Default for ByteBufferReader {
    fn default() -> Self {
        Self::new()
    }
}
