use crate::config::ClientConfig;
use crate::http::{read_text, HttpTransport};
use crate::transport::{Request, Transport};
use crate::{Datasets, Endpoints, Result, Sparql};
use ontodocker_address::{normalize_base_url_with, BaseUrl, ValidationError};
use reqwest::Method;

/// A client for one Ontodocker server.
///
/// The resources of the server are reached through
/// [`endpoints`](Self::endpoints), [`datasets`](Self::datasets) and [`sparql`](Self::sparql).
/// Requests are sequential and blocking;
/// use one client per thread if requests must run concurrently.
///
/// ```no_run
/// use ontodocker::{ClientConfig, OntodockerClient};
///
/// # fn main() -> Result<(), ontodocker::Error> {
/// let client = OntodockerClient::new(&ClientConfig::new("ontodocker.example.org"))?;
/// for info in client.endpoints().list()? {
///     println!("{info}");
/// }
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct OntodockerClient<T = HttpTransport> {
    base_url: BaseUrl,
    transport: T,
    rectify_legacy: bool,
}

impl OntodockerClient<HttpTransport> {
    /// Build a client over HTTP, as described by `config`.
    ///
    /// # Errors
    ///
    /// See [`normalize_base_url_with`] and [`HttpTransport::new`].
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = normalize_base_url_with(&config.address, &config.normalize)?;
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(base_url, transport).with_legacy_rectification(config.rectify_legacy))
    }

    /// Build a client over HTTP for `address`, with the default configuration.
    pub fn from_address(address: &str) -> Result<Self> {
        Self::new(&ClientConfig::new(address))
    }
}

impl<T: Transport> OntodockerClient<T> {
    /// Build a client sending its requests through `transport`.
    pub fn with_transport(base_url: BaseUrl, transport: T) -> Self {
        OntodockerClient {
            base_url,
            transport,
            rectify_legacy: true,
        }
    }

    /// Enable or disable the rectification of legacy endpoint URLs.
    pub fn with_legacy_rectification(mut self, rectify: bool) -> Self {
        self.rectify_legacy = rectify;
        self
    }

    /// The normalized base URL of the server.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// The transport of this client.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The SPARQL endpoint listing of the server.
    pub fn endpoints(&self) -> Endpoints<'_, T> {
        Endpoints::new(self)
    }

    /// The datasets of the server.
    pub fn datasets(&self) -> Datasets<'_, T> {
        Datasets::new(self)
    }

    /// SPARQL queries against the datasets of the server.
    pub fn sparql(&self) -> Sparql<'_, T> {
        Sparql::new(self)
    }

    pub(crate) fn rectify_legacy(&self) -> bool {
        self.rectify_legacy
    }

    pub(crate) fn url<S: AsRef<str>>(&self, segments: &[S]) -> String {
        self.base_url.join(segments)
    }

    /// The URL of the REST resource of `dataset`.
    pub(crate) fn dataset_url(&self, dataset: &str) -> String {
        self.url(&["api", "v1", "jena", dataset])
    }

    pub(crate) fn request_text(&self, request: Request) -> Result<String> {
        let method = request.method.clone();
        let response = self.transport.send(request)?;
        read_text(&method, response)
    }

    pub(crate) fn get_text(&self, url: String) -> Result<String> {
        self.request_text(Request::new(Method::GET, url))
    }
}

/// Check that `name` can be used as a dataset name, and return it trimmed.
pub(crate) fn dataset_name(name: &str) -> Result<&str, ValidationError> {
    let name = ValidationError::non_blank(name, "dataset name")?;
    if name.contains('/') {
        return Err(ValidationError(format!(
            "dataset name must not contain '/': {name:?}"
        )));
    }
    Ok(name)
}
