use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source read failed: {0}")]
    SourceRead(#[from] std::io::Error),
}
