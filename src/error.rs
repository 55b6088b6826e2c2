use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("component index out of range: {index} (len={len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("point outside grid: {point}")]
    OutOfGrid { point: String },

    #[error("cannot parse {input:?}: {msg}")]
    Parse { input: String, msg: String },
}

pub type Result<T> = std::result::Result<T, Error>;
