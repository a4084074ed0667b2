use thiserror::Error;

#[derive(Error, Debug)]
pub enum CdfError {
    /// `sigma` or `skip` outside the valid domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Propagated I/O error while writing the generated table.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
