use super::{dataset_name, extract_dataset_names, FormatError};
use serde::Serialize;
use std::fmt;

/// A dataset name paired with its SPARQL endpoint URL.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct EndpointInfo {
    dataset: String,
    sparql_endpoint: String,
}

impl EndpointInfo {
    /// Build an `EndpointInfo` from an endpoint URL, extracting its dataset name.
    pub fn from_endpoint<T: Into<String>>(sparql_endpoint: T) -> Result<Self, FormatError> {
        let sparql_endpoint = sparql_endpoint.into();
        Ok(EndpointInfo {
            dataset: dataset_name(&sparql_endpoint)?,
            sparql_endpoint,
        })
    }

    /// The dataset name.
    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    /// The full SPARQL endpoint URL of the dataset.
    pub fn sparql_endpoint(&self) -> &str {
        &self.sparql_endpoint
    }

    /// Split into dataset name and endpoint URL.
    pub fn into_parts(self) -> (String, String) {
        (self.dataset, self.sparql_endpoint)
    }
}

impl fmt::Display for EndpointInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.dataset, self.sparql_endpoint)
    }
}

/// Pair each endpoint URL with its dataset name, preserving order.
///
/// # Errors
///
/// Fails if any endpoint is malformed, see [`dataset_name`].
pub fn endpoint_infos(endpoints: Vec<String>) -> Result<Vec<EndpointInfo>, FormatError> {
    let names = extract_dataset_names(&endpoints)?;
    Ok(names
        .into_iter()
        .zip(endpoints)
        .map(|(dataset, sparql_endpoint)| EndpointInfo {
            dataset,
            sparql_endpoint,
        })
        .collect())
}
