use super::{error::Result, BaseUrl, InvalidAddress};
use std::borrow::Cow;
use url::Url;

/// Options driving [`normalize_base_url_with`].
///
/// The [`Default`] value uses `https` as default scheme,
/// allows `http` and `https`, and requires the address to be `host[:port]` only.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizeOptions {
    /// Scheme prepended to addresses that do not contain `"://"`.
    pub default_scheme: String,
    /// Schemes accepted in the normalized base URL (compared case-insensitively).
    pub allowed_schemes: Vec<String>,
    /// If true, reject addresses carrying a (non-root) path, a query or a fragment.
    pub require_host_only: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            default_scheme: "https".into(),
            allowed_schemes: vec!["http".into(), "https".into()],
            require_host_only: true,
        }
    }
}

impl NormalizeOptions {
    /// Replace the default scheme.
    #[must_use]
    pub fn with_default_scheme<T: Into<String>>(mut self, scheme: T) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    /// Replace the set of allowed schemes.
    #[must_use]
    pub fn with_allowed_schemes<I, T>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.allowed_schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether paths, queries and fragments are rejected.
    #[must_use]
    pub fn with_require_host_only(mut self, require_host_only: bool) -> Self {
        self.require_host_only = require_host_only;
        self
    }

    fn allows(&self, scheme: &str) -> bool {
        self.allowed_schemes
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(scheme))
    }
}

/// Normalize a server address into a [`BaseUrl`], using the default [`NormalizeOptions`].
///
/// See [`normalize_base_url_with`].
pub fn normalize_base_url(address: &str) -> Result<BaseUrl> {
    normalize_base_url_with(address, &NormalizeOptions::default())
}

/// Normalize a server address into a [`BaseUrl`] of the form `scheme://host[:port]`.
///
/// `address` is either a plain `host[:port]`
/// (in which case [`default_scheme`](NormalizeOptions::default_scheme) is prepended)
/// or a URL including its scheme.
/// The result has no path and no trailing slash,
/// and normalizing it again yields the same value.
///
/// # Errors
///
/// [`InvalidAddress`] is returned if `address` is blank, can not be parsed,
/// uses a scheme that is not allowed, has no host, carries user credentials,
/// or (when [`require_host_only`](NormalizeOptions::require_host_only) is set)
/// includes a path other than `/`, a query or a fragment.
pub fn normalize_base_url_with(address: &str, options: &NormalizeOptions) -> Result<BaseUrl> {
    let raw = address.trim();
    if raw.is_empty() {
        return Err(InvalidAddress(
            "address must be a non-empty host, e.g. 'ontodocker.example.org'".into(),
        ));
    }
    let candidate: Cow<str> = if raw.contains("://") {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("{}://{raw}", options.default_scheme))
    };
    let url = Url::parse(&candidate)
        .map_err(|err| InvalidAddress(format!("can not parse {raw:?} as a URL: {err}")))?;

    let scheme = url.scheme().to_ascii_lowercase();
    if !options.allows(&scheme) {
        return Err(InvalidAddress(format!(
            "unsupported URL scheme '{scheme}', allowed: {:?}",
            options.allowed_schemes
        )));
    }

    let Some(host) = url.host_str().filter(|host| !host.is_empty()) else {
        return Err(InvalidAddress(format!(
            "{raw:?} has no host, expected e.g. 'example.org' or 'https://example.org'"
        )));
    };
    if !url.username().is_empty() || url.password().is_some() {
        return Err(InvalidAddress(format!(
            "{raw:?} must not carry user credentials, use a token instead"
        )));
    }

    let (raw_authority, raw_path) = split_raw(&candidate);
    if options.require_host_only {
        // the parser resolves dot-segments and backslashes, so check the text as written
        let has_path = !matches!(raw_path, "" | "/");
        let has_query = url.query().is_some_and(|q| !q.is_empty());
        let has_fragment = url.fragment().is_some_and(|f| !f.is_empty());
        if has_path || has_query || has_fragment {
            return Err(InvalidAddress(format!(
                "{raw:?} must be host[:port] only (no path/query/fragment), e.g. 'https://example.org:8080'"
            )));
        }
    }

    let port = if has_explicit_port(raw_authority) {
        url.port_or_known_default()
    } else {
        url.port()
    };
    let base = match port {
        Some(port) => format!("{scheme}://{host}:{port}"),
        None => format!("{scheme}://{host}"),
    };
    Ok(BaseUrl::new_unchecked(base))
}

/// Split `scheme://authority/path?query#fragment` into its authority and path,
/// exactly as written.
fn split_raw(candidate: &str) -> (&str, &str) {
    let rest = candidate.split_once("://").map_or(candidate, |(_, rest)| rest);
    let (authority, rest) = rest.split_at(rest.find(['/', '\\', '?', '#']).unwrap_or(rest.len()));
    (authority, &rest[..rest.find(['?', '#']).unwrap_or(rest.len())])
}

fn has_explicit_port(authority: &str) -> bool {
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host_port)| host_port);
    let after_host = match host_port.strip_prefix('[') {
        Some(ipv6) => ipv6.split_once(']').map_or("", |(_, after)| after),
        None => host_port,
    };
    after_host
        .rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty())
}
