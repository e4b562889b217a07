use algograph::graph::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("corpus has no pages")]
    EmptyCorpus,

    #[error("damping factor {0} is outside [0, 1]")]
    DampingOutOfRange(f64),

    #[error("sample count must be at least 1")]
    NoSamples,

    #[error("page {0:?} is not in the corpus")]
    UnknownPage(VertexId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
