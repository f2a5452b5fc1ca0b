use std::error::Error as StdError;
use std::fmt;

pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised while bringing the HTTP server up or while it runs. Request
/// handling itself never fails: an event stream that cannot continue simply ends.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// The configured interface/port pair is not a socket address.
    InvalidBindAddress(String),
    /// The listener could not be bound.
    Bind(String),
    /// The server stopped with an I/O error.
    Serve,
}

impl Error {
    pub(crate) fn new(error_kind: ErrorKind, source: impl StdError + Send + Sync + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            error_kind,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::InvalidBindAddress(address) => {
                write!(f, "invalid bind address {address}")?
            }
            ErrorKind::Bind(address) => write!(f, "failed to bind {address}")?,
            ErrorKind::Serve => write!(f, "server error")?,
        }
        match &self.source {
            Some(source) => write!(f, ": {source}"),
            None => Ok(()),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
