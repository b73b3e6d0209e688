use std::io::Read;

use crate::error::Error;

/// Outcome of a single fill attempt against a |ByteSource|.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The source wrote this many bytes into the region.
    Bytes(usize),
    /// The source had no bytes left and wrote nothing.
    EndOfSource,
}

impl ReadOutcome {
    /// Collapse the outcome into the conventional stream-read encoding: the number of
    /// bytes read, or -1 at end-of-source.
    pub fn count(&self) -> i64 {
        match self {
            ReadOutcome::Bytes(n) => *n as i64,
            ReadOutcome::EndOfSource => -1,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, ReadOutcome::EndOfSource)
    }
}

/// ByteSource is similar to |std::io::Read|, but it reports end-of-source as a distinct
/// outcome instead of overloading a zero byte count.
pub trait ByteSource {
    /// Fill |region| with up to |region.len()| bytes. Blocks until at least one byte is
    /// available, the region is full, or the source is exhausted.
    fn fill(&mut self, region: &mut [u8]) -> Result<ReadOutcome, Error>;
}

/// Any |std::io::Read| is usable as a source: files, sockets, cursors, slices. A
/// successful zero-byte read of a non-empty region is the |Read| contract's EOF signal.
impl<R: Read> ByteSource for R {
    fn fill(&mut self, region: &mut [u8]) -> Result<ReadOutcome, Error> {
        match self.read(region)? {
            0 if !region.is_empty() => Ok(ReadOutcome::EndOfSource),
            n => Ok(ReadOutcome::Bytes(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_fill_reports_count() {
        let mut source = Cursor::new(vec![1, 2, 3]);
        let mut region = [0u8; 8];
        assert_eq!(source.fill(&mut region).unwrap(), ReadOutcome::Bytes(3));
        assert_eq!(&region[..3], &[1, 2, 3]);
    }

    #[test]
    fn test_fill_reports_end_of_source() {
        let mut source = Cursor::new(Vec::<u8>::new());
        let mut region = [0u8; 8];
        let outcome = source.fill(&mut region).unwrap();
        assert!(outcome.is_end());
        assert_eq!(outcome.count(), -1);
    }

    #[test]
    fn test_count_encoding() {
        assert_eq!(ReadOutcome::Bytes(0).count(), 0);
        assert_eq!(ReadOutcome::Bytes(4096).count(), 4096);
        assert_eq!(ReadOutcome::EndOfSource.count(), -1);
    }
}
