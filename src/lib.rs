pub mod byte_buffer_reader;
pub mod byte_source;
pub mod error;

pub use byte_buffer_reader::{ByteBufferReader, DEFAULT_CAPACITY};
pub use byte_source::{ByteSource, ReadOutcome};
pub use error::Error;
