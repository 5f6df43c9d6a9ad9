//! Explicit configuration of an [`OntodockerClient`](crate::OntodockerClient).
use crate::Result;
use ontodocker_address::{NormalizeOptions, ValidationError};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the server address, read by [`ClientConfig::from_env`].
pub const ENV_ADDRESS: &str = "ONTODOCKER_ADDRESS";
/// Environment variable holding the bearer token, read by [`ClientConfig::from_env`].
pub const ENV_TOKEN: &str = "ONTODOCKER_TOKEN";
/// Environment variable holding the path of a PEM CA bundle, read by [`ClientConfig::from_env`].
pub const ENV_CA_BUNDLE: &str = "ONTODOCKER_CA_BUNDLE";
/// Environment variable disabling certificate verification when set to a true value,
/// read by [`ClientConfig::from_env`].
pub const ENV_INSECURE: &str = "ONTODOCKER_INSECURE";

/// How server certificates are verified.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Tls {
    /// Verify certificates against the system roots.
    #[default]
    Verify,
    /// Accept any certificate.
    ///
    /// Only meant for local deployments with self-signed certificates.
    Insecure,
    /// Also trust the PEM certificate(s) stored in this file.
    CaBundle(PathBuf),
}

/// Everything needed to build an [`OntodockerClient`](crate::OntodockerClient).
///
/// ```
/// use ontodocker::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new("ontodocker.example.org")
///     .with_token("my-token")
///     .with_read_timeout(Duration::from_secs(120));
/// assert_eq!(config.connect_timeout, Duration::from_secs(30));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// The server address, `host[:port]` or a full base URL
    pub address: String,
    /// The bearer token, if any
    pub token: Option<String>,
    /// How `address` is normalized
    pub normalize: NormalizeOptions,
    /// Certificate verification
    pub tls: Tls,
    /// Maximum time to establish a connection
    pub connect_timeout: Duration,
    /// Maximum time for a whole request, response body included
    pub read_timeout: Duration,
    /// Whether legacy endpoint URLs are rectified before parsing
    pub rectify_legacy: bool,
    /// The `User-Agent` header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// The default connect and read timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// A configuration for `address`, with default values everywhere else.
    pub fn new<T: Into<String>>(address: T) -> Self {
        ClientConfig {
            address: address.into(),
            token: None,
            normalize: NormalizeOptions::default(),
            tls: Tls::default(),
            connect_timeout: Self::DEFAULT_TIMEOUT,
            read_timeout: Self::DEFAULT_TIMEOUT,
            rectify_legacy: true,
            user_agent: concat!("ontodocker-rs/", env!("CARGO_PKG_VERSION")).into(),
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// See [`ENV_ADDRESS`], [`ENV_TOKEN`], [`ENV_CA_BUNDLE`] and [`ENV_INSECURE`].
    ///
    /// # Errors
    ///
    /// [`Error::Validation`](crate::Error::Validation) if [`ENV_ADDRESS`] is unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = lookup(ENV_ADDRESS).unwrap_or_default();
        let address = ValidationError::non_blank(&address, ENV_ADDRESS)?;
        let mut config = ClientConfig::new(address);
        if let Some(token) = lookup(ENV_TOKEN) {
            config = config.with_token(token);
        }
        if let Some(path) = lookup(ENV_CA_BUNDLE).filter(|p| !p.trim().is_empty()) {
            config = config.with_tls(Tls::CaBundle(path.trim().into()));
        }
        if lookup(ENV_INSECURE).is_some_and(|v| is_truthy(&v)) {
            config = config.with_tls(Tls::Insecure);
        }
        Ok(config)
    }

    /// Send `Authorization: Bearer <token>` with every request.
    ///
    /// A blank token means no token.
    pub fn with_token<T: Into<String>>(mut self, token: T) -> Self {
        let token = token.into();
        let token = token.trim();
        self.token = (!token.is_empty()).then(|| token.to_string());
        self
    }

    /// Replace the scheme used for addresses without one.
    pub fn with_default_scheme<T: Into<String>>(mut self, scheme: T) -> Self {
        self.normalize = self.normalize.with_default_scheme(scheme);
        self
    }

    /// Replace the accepted schemes.
    pub fn with_allowed_schemes<I, T>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.normalize = self.normalize.with_allowed_schemes(schemes);
        self
    }

    /// Replace the certificate verification policy.
    pub fn with_tls(mut self, tls: Tls) -> Self {
        self.tls = tls;
        self
    }

    /// Replace the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Replace the read timeout.
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Enable or disable the rectification of legacy endpoint URLs.
    pub fn with_legacy_rectification(mut self, rectify: bool) -> Self {
        self.rectify_legacy = rectify;
        self
    }

    /// Replace the `User-Agent` header.
    pub fn with_user_agent<T: Into<String>>(mut self, user_agent: T) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("address", &self.address)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("normalize", &self.normalize)
            .field("tls", &self.tls)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("rectify_legacy", &self.rectify_legacy)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl From<&str> for ClientConfig {
    fn from(address: &str) -> Self {
        ClientConfig::new(address)
    }
}
