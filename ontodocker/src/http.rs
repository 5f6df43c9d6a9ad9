//! [`Transport`] implementation over a blocking [`reqwest`] client.
use crate::config::{ClientConfig, Tls};
use crate::transport::{Body, Request, Response, Transport};
use crate::{HttpError, Result};
use ontodocker_address::ValidationError;
use ontodocker_sparql_client::SparqlClient;
use reqwest::blocking::{multipart, Client};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Certificate, Method, StatusCode};
use serde_json::Value;

/// A [`Transport`] sending real HTTP requests.
///
/// The bearer token, timeouts and TLS settings of the [`ClientConfig`]
/// are baked into the underlying client,
/// so they apply to REST calls and SPARQL queries alike.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build the HTTP client described by `config`.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`](crate::Error::Validation) if the token can not be sent in a header,
    /// - [`Error::Io`](crate::Error::Io) if the CA bundle can not be read,
    /// - [`Error::Transport`](crate::Error::Transport) if the CA bundle is not valid PEM
    ///   or the client can not be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ValidationError("token contains invalid characters".into()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.connect_timeout)
            .timeout(config.read_timeout);
        match &config.tls {
            Tls::Verify => {}
            Tls::Insecure => {
                log::warn!("TLS certificate verification is disabled");
                builder = builder.danger_accept_invalid_certs(true);
            }
            Tls::CaBundle(path) => {
                let pem = std::fs::read(path)?;
                builder = builder.add_root_certificate(Certificate::from_pem(&pem)?);
            }
        }
        Ok(HttpTransport {
            client: builder.build()?,
        })
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client) -> Self {
        HttpTransport { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: Request) -> Result<Response> {
        log::debug!("{} {}", request.method, request.url);
        let mut builder = self.client.request(request.method, request.url.as_str());
        if let Body::File {
            field,
            file_name,
            content,
        } = request.body
        {
            let part = multipart::Part::bytes(content).file_name(file_name);
            builder = builder.multipart(multipart::Form::new().part(field, part));
        }
        let resp = builder.send()?;
        let status = resp.status().as_u16();
        let url = resp.url().to_string();
        let body = resp.text()?;
        log::trace!("{status} {url}\n{body}");
        Ok(Response { status, url, body })
    }

    fn sparql(&self, endpoint: &str, query: &str) -> Result<Value> {
        let cli = SparqlClient::new_with_client(endpoint, self.client.clone());
        Ok(cli.query_json(query)?)
    }
}

/// Return the body of `response`, or an [`HttpError`] if its status is not `2xx`.
pub(crate) fn read_text(method: &Method, response: Response) -> Result<String> {
    if response.is_success() {
        return Ok(response.body);
    }
    let message = StatusCode::from_u16(response.status).ok().map(|code| {
        let kind = if code.is_client_error() {
            "Client Error"
        } else if code.is_server_error() {
            "Server Error"
        } else {
            "Unexpected Status"
        };
        format!(
            "{} {kind}: {}",
            code.as_u16(),
            code.canonical_reason().unwrap_or("Unknown")
        )
    });
    Err(HttpError {
        method: method.to_string(),
        url: response.url,
        status: Some(response.status),
        message,
        body: Some(response.body),
    }
    .into())
}
