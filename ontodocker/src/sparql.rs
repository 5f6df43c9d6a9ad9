use crate::client::dataset_name;
use crate::transport::Transport;
use crate::{OntodockerClient, Result};
use ontodocker_address::ValidationError;
use ontodocker_sparql_client::{tabularize, Table};
use serde_json::Value;

/// SPARQL queries against the datasets of an Ontodocker server
/// (`/api/v1/jena/{dataset}/sparql`).
#[derive(Debug)]
pub struct Sparql<'a, T> {
    client: &'a OntodockerClient<T>,
}

impl<'a, T: Transport> Sparql<'a, T> {
    pub(crate) fn new(client: &'a OntodockerClient<T>) -> Self {
        Sparql { client }
    }

    /// The SPARQL endpoint URL of `dataset`.
    ///
    /// No request is sent.
    pub fn endpoint(&self, dataset: &str) -> Result<String> {
        let dataset = dataset_name(dataset)?;
        Ok(self.client.url(&["api", "v1", "jena", dataset, "sparql"]))
    }

    /// Run `query` on `dataset`, and return its results as a [`Table`] labelled with `columns`.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`](crate::Error::Validation) if `query` is blank,
    ///   `columns` is empty, or `dataset` is invalid (checked in that order,
    ///   before any request is sent),
    /// - [`Error::Table`](crate::Error::Table) if the results do not fit `columns`,
    /// - see [`query_raw`](Self::query_raw) for the other cases.
    pub fn query<S: AsRef<str>>(&self, dataset: &str, query: &str, columns: &[S]) -> Result<Table> {
        ValidationError::non_blank(query, "query")?;
        if columns.is_empty() {
            return Err(ValidationError("columns must be non-empty".into()).into());
        }
        let results = self.query_raw(dataset, query)?;
        Ok(tabularize(&results, columns)?)
    }

    /// Run `query` on `dataset`, and return the undecoded SPARQL JSON results.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`](crate::Error::Validation) if `query` is blank or `dataset` is invalid,
    /// - [`Error::Http`](crate::Error::Http) if the endpoint answers with a non-success status,
    /// - [`Error::Transport`](crate::Error::Transport) if no answer is received,
    /// - [`Error::Sparql`](crate::Error::Sparql) if the answer is not SPARQL JSON results.
    pub fn query_raw(&self, dataset: &str, query: &str) -> Result<Value> {
        let query = ValidationError::non_blank(query, "query")?;
        let endpoint = self.endpoint(dataset)?;
        self.client.transport().sparql(&endpoint, query)
    }
}
