use crate::transport::Transport;
use crate::{OntodockerClient, Result};
use ontodocker_endpoints::{endpoint_infos, parse_endpoints_response, EndpointInfo};

/// The SPARQL endpoint listing of an Ontodocker server (`/api/v1/endpoints`).
#[derive(Debug)]
pub struct Endpoints<'a, T> {
    client: &'a OntodockerClient<T>,
}

impl<'a, T: Transport> Endpoints<'a, T> {
    pub(crate) fn new(client: &'a OntodockerClient<T>) -> Self {
        Endpoints { client }
    }

    /// The URLs of all SPARQL endpoints, in server order.
    ///
    /// Legacy URLs are rectified unless disabled in the client.
    ///
    /// # Errors
    ///
    /// [`Error::Http`](crate::Error::Http) if the request fails,
    /// [`Error::Format`](crate::Error::Format) if the response is not a list of strings.
    pub fn list_raw(&self) -> Result<Vec<String>> {
        let text = self.client.get_text(self.client.url(&["api", "v1", "endpoints"]))?;
        Ok(parse_endpoints_response(&text, self.client.rectify_legacy())?)
    }

    /// Every SPARQL endpoint paired with its dataset name, in server order.
    ///
    /// # Errors
    ///
    /// As [`list_raw`](Self::list_raw), and
    /// [`Error::Format`](crate::Error::Format) if any endpoint URL does not name a dataset.
    pub fn list(&self) -> Result<Vec<EndpointInfo>> {
        Ok(endpoint_infos(self.list_raw()?)?)
    }
}
