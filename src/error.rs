use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl Error {
    /// Process exit status for this error, following sysexits.h
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Io(_) => 74,
            Error::Logging(_) => 70,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
