//! A client implementation of the [SPARQL1.1 protocol]
//! for the SPARQL endpoints of an Ontodocker/Fuseki server,
//! with conversion of SPARQL JSON results into a [`Table`].
//!
//! Example:
//! ```no_run
//! use ontodocker_sparql_client::SparqlClient;
//!
//! # fn bla() -> Result<(), Box<dyn std::error::Error>> {
//! let cli = SparqlClient::new("https://ontodocker.example.org/api/v1/jena/ds/sparql")
//!     .with_bearer_token("my-token");
//! let table = cli.select("SELECT ?s ?p ?o { ?s ?p ?o } LIMIT 10", &["s", "p", "o"])?;
//! for row in table.iter() {
//!     println!("{}\t{}\t{}", row[0], row[1], row[2]);
//! }
//! # Ok(()) }
//! ```
//!
//! [SPARQL1.1 protocol]: https://www.w3.org/TR/sparql11-protocol/
#![deny(missing_docs)]

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Error as ReqwestError;
use serde_json::Value;

mod table;
pub use table::{tabularize, Table, TableError};

/// A [SPARQL 1.1] client for one endpoint, requesting SPARQL JSON results.
///
/// [SPARQL 1.1]: https://www.w3.org/TR/sparql11-protocol/
pub struct SparqlClient {
    endpoint: Box<str>,
    client: Client,
    accept: Option<String>,
    bearer_token: Option<String>,
}

impl SparqlClient {
    /// The default [Accept HTTP header](https://tools.ietf.org/html/rfc7231.html#section-5.3.2) used by clients.
    pub const DEFAULT_ACCEPT: &'static str = "application/sparql-results+json";

    /// Create a [`SparqlClient`] on the given SPARQL-endpoint URL.
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self::new_with_client(endpoint, Client::new())
    }

    /// Create a [`SparqlClient`] on the given SPARQL-endpoint URL,
    /// sending its requests through `client`.
    #[must_use]
    pub fn new_with_client(endpoint: &str, client: Client) -> Self {
        Self {
            endpoint: Box::from(endpoint),
            client,
            accept: None,
            bearer_token: None,
        }
    }

    /// Replace the underlying [`reqwest::blocking::Client`] of this client.
    ///
    /// Timeouts, TLS settings and default headers of `client` apply to every query.
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Replace the [Accept HTTP header](https://tools.ietf.org/html/rfc7231.html#section-5.3.2) used by this client.
    ///
    /// See also [`DEFAULT_ACCEPT`](Self::DEFAULT_ACCEPT)
    #[must_use]
    pub fn with_accept<T: Into<String>>(mut self, accept: T) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Send `Authorization: Bearer <token>` with every query.
    ///
    /// A blank token is ignored.
    #[must_use]
    pub fn with_bearer_token<T: Into<String>>(mut self, token: T) -> Self {
        let token = token.into();
        let token = token.trim();
        self.bearer_token = (!token.is_empty()).then(|| token.to_string());
        self
    }

    /// The endpoint URL queried by this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The [Accept HTTP header](https://tools.ietf.org/html/rfc7231.html#section-5.3.2) used by this client.
    #[must_use]
    pub fn accept(&self) -> &str {
        self.accept.as_deref().unwrap_or(Self::DEFAULT_ACCEPT)
    }

    /// Run `query` and return the SPARQL JSON results as an (order-preserving) JSON value.
    pub fn query_json(&self, query: &str) -> Result<Value, Error> {
        log::debug!("POST {} (SPARQL query)", self.endpoint);
        log::trace!("{query}");
        let mut req = self
            .client
            .post(&self.endpoint[..])
            .header(ACCEPT, self.accept())
            .header(CONTENT_TYPE, "application/sparql-query")
            .body(query.to_string());
        if let Some(token) = &self.bearer_token {
            req = req.bearer_auth(token);
        }
        let resp = req.send()?;

        let status = resp.status();
        if !status.is_success() {
            let url = resp.url().to_string();
            return Err(Error::Status {
                url,
                status: status.as_u16(),
                body: resp.text().ok(),
            });
        }
        let ctype = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("application/octet-stream")
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match &ctype[..] {
            "application/sparql-results+json" | "application/json" => {
                let body = resp.text()?;
                log::trace!("{body}");
                Ok(serde_json::from_str(&body)?)
            }
            _ => Err(Error::Unsupported(format!(
                "unsupported content-type: {ctype}"
            ))),
        }
    }

    /// Run a `SELECT` query and convert its results into a [`Table`] labelled with `columns`.
    ///
    /// See [`tabularize`].
    pub fn select<S: AsRef<str>>(&self, query: &str, columns: &[S]) -> Result<Table, Error> {
        let results = self.query_json(query)?;
        Ok(tabularize(&results, columns)?)
    }
}

#[derive(Debug, thiserror::Error)]
/// Error type produced by [`SparqlClient`].
pub enum Error {
    #[error("http error: {0}")]
    /// A [`ReqwestError`] occurred while communicating with the SPARQL endpoint.
    Http(#[source] Box<ReqwestError>),

    #[error("POST {url} | status={status}")]
    /// The SPARQL endpoint answered with a non-success status.
    Status {
        /// The URL of the endpoint
        url: String,
        /// The HTTP status code
        status: u16,
        /// The response body, if it could be read
        body: Option<String>,
    },

    #[error("{0}")]
    /// An unsupported media-type was returned by the SPARQL endpoint.
    Unsupported(String),

    #[error("invalid SPARQL JSON results: {0}")]
    /// Invalid JSON was returned by the SPARQL endpoint.
    Json(
        #[source]
        #[from]
        serde_json::Error,
    ),

    #[error("{0}")]
    /// The results could not be converted into a [`Table`].
    Table(
        #[source]
        #[from]
        TableError,
    ),
}

impl From<ReqwestError> for Error {
    fn from(other: ReqwestError) -> Error {
        Error::Http(Box::new(other))
    }
}
