//! A client for the [Ontodocker] triple-store management service.
//!
//! An Ontodocker server manages named RDF datasets, stored in Apache Jena Fuseki,
//! and exposes one SPARQL endpoint per dataset.
//! This crate gives access to
//! - the [endpoint listing](Endpoints) of the server,
//! - its [datasets](Datasets) (list, create, delete, download and upload Turtle),
//! - [SPARQL queries](Sparql) whose results are returned as a [`Table`].
//!
//! # Getting Started
//!
//! ```no_run
//! use ontodocker::{ClientConfig, OntodockerClient};
//!
//! # fn main() -> Result<(), ontodocker::Error> {
//! let config = ClientConfig::new("ontodocker.example.org").with_token("my-token");
//! let client = OntodockerClient::new(&config)?;
//!
//! for dataset in client.datasets().list()? {
//!     println!("{dataset}: {}", client.sparql().endpoint(&dataset)?);
//! }
//! let table = client.sparql().query(
//!     "my-dataset",
//!     "SELECT ?s ?o { ?s a ?o } LIMIT 10",
//!     &["s", "o"],
//! )?;
//! print!("{table}");
//! # Ok(()) }
//! ```
//!
//! The building blocks of this crate are also available on their own:
//! [`address`] (address normalization), [`endpoint_listing`] (parsing of the endpoint listing)
//! and [`sparql_client`] (SPARQL protocol and results).
//!
//! [Ontodocker]: https://github.com/materialdigital/ontodocker
#![deny(missing_docs)]

pub use ontodocker_address as address;
pub use ontodocker_endpoints as endpoint_listing;
pub use ontodocker_sparql_client as sparql_client;

pub use ontodocker_address::{BaseUrl, InvalidAddress, ValidationError};
pub use ontodocker_endpoints::{EndpointInfo, FormatError};
pub use ontodocker_sparql_client::{Table, TableError};

mod client;
pub use client::OntodockerClient;
pub mod config;
pub use config::{ClientConfig, Tls};
mod datasets;
pub use datasets::Datasets;
mod endpoints;
pub use endpoints::Endpoints;
pub mod error;
pub use error::{Error, HttpError, Result};
mod http;
pub use http::HttpTransport;
mod sparql;
pub use sparql::Sparql;
pub mod transport;
pub use transport::Transport;

#[cfg(test)]
mod test;
