//! Error type of the Ontodocker client.

use ontodocker_address::{InvalidAddress, ValidationError};
use ontodocker_endpoints::FormatError;
use ontodocker_sparql_client::TableError;
use std::fmt;

/// Type alias for `Result` with default error [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type produced by [`OntodockerClient`](crate::OntodockerClient) and its facades.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server address could not be normalized
    #[error(transparent)]
    InvalidAddress(#[from] InvalidAddress),
    /// A caller-supplied argument is blank or invalid
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The server answered with a non-success status
    #[error("{0}")]
    Http(Box<HttpError>),
    /// The request could not be sent, or its response could not be received
    #[error("transport error: {0}")]
    Transport(#[source] Box<reqwest::Error>),
    /// A response body does not have the expected format
    #[error(transparent)]
    Format(#[from] FormatError),
    /// SPARQL results do not fit the declared columns
    #[error(transparent)]
    Table(#[from] TableError),
    /// Any other failure of the SPARQL protocol client
    #[error("SPARQL error: {0}")]
    Sparql(#[source] ontodocker_sparql_client::Error),
    /// A local file could not be read or written
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<HttpError> for Error {
    fn from(other: HttpError) -> Error {
        Error::Http(Box::new(other))
    }
}

impl From<reqwest::Error> for Error {
    fn from(other: reqwest::Error) -> Error {
        Error::Transport(Box::new(other))
    }
}

impl From<ontodocker_sparql_client::Error> for Error {
    fn from(other: ontodocker_sparql_client::Error) -> Error {
        use ontodocker_sparql_client::Error as SparqlError;
        match other {
            SparqlError::Http(err) => Error::Transport(err),
            SparqlError::Status { url, status, body } => HttpError {
                method: "POST".into(),
                url,
                status: Some(status),
                message: Some("SPARQL query failed".into()),
                body,
            }
            .into(),
            SparqlError::Table(err) => Error::Table(err),
            other => Error::Sparql(other),
        }
    }
}

/// A request that the server answered with a non-success status.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpError {
    /// The HTTP method of the request
    pub method: String,
    /// The URL of the request
    pub url: String,
    /// The status code, if any
    pub status: Option<u16>,
    /// A human readable description
    pub message: Option<String>,
    /// The raw response body, when available
    pub body: Option<String>,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)?;
        if let Some(status) = self.status {
            write!(f, " | status={status}")?;
        }
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            write!(f, " | {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}
