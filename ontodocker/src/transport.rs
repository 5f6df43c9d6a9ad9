//! The seam between the resource facades and the network.
use crate::Result;
use reqwest::Method;
use serde_json::Value;

/// The body of a [`Request`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Body {
    /// No body.
    #[default]
    Empty,
    /// A `multipart/form-data` body made of a single file part.
    File {
        /// Name of the form field
        field: String,
        /// File name announced in the part
        file_name: String,
        /// Content of the file
        content: Vec<u8>,
    },
}

/// A REST request to the Ontodocker server.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The absolute URL
    pub url: String,
    /// The body
    pub body: Body,
}

impl Request {
    /// A request without body.
    pub fn new<T: Into<String>>(method: Method, url: T) -> Self {
        Request {
            method,
            url: url.into(),
            body: Body::Empty,
        }
    }

    /// Replace the body of this request.
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }
}

/// The response to a [`Request`], whatever its status.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Response {
    /// The HTTP status code
    pub status: u16,
    /// The final URL, after redirections
    pub url: String,
    /// The body, decoded as text
    pub body: String,
}

impl Response {
    /// Whether the status is in the `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to an Ontodocker server.
///
/// [`HttpTransport`](crate::HttpTransport) is the implementation used in production;
/// implementing this trait allows to exercise the facades without any network.
pub trait Transport {
    /// Send `request`, and return the response whatever its status.
    ///
    /// Errors are reserved to failures where no response was received.
    fn send(&self, request: Request) -> Result<Response>;

    /// Run `query` against the SPARQL endpoint at `endpoint`,
    /// and return the SPARQL JSON results.
    fn sparql(&self, endpoint: &str, query: &str) -> Result<Value>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: Request) -> Result<Response> {
        T::send(self, request)
    }

    fn sparql(&self, endpoint: &str, query: &str) -> Result<Value> {
        T::sparql(self, endpoint, query)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: Request) -> Result<Response> {
        T::send(self, request)
    }

    fn sparql(&self, endpoint: &str, query: &str) -> Result<Value> {
        T::sparql(self, endpoint, query)
    }
}
