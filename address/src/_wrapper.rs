//! I provide [`BaseUrl`], a wrapper around `Box<str>`
//! guaranteeing that its underlying data is a normalized base URL.
use super::{error::Result, join_url, normalize_base_url};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A normalized base URL of the form `scheme://host[:port]`,
/// as produced by [`normalize_base_url`](crate::normalize_base_url).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BaseUrl(Box<str>);

impl BaseUrl {
    /// Build new `BaseUrl` from a string, normalizing it with the default options.
    pub fn new(address: &str) -> Result<Self> {
        normalize_base_url(address)
    }

    /// Build new `BaseUrl` from a trusted, already normalized string.
    pub fn new_unchecked<T: Into<Box<str>>>(base: T) -> Self {
        BaseUrl(base.into())
    }

    /// The underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join path segments onto this base URL.
    ///
    /// See [`join_url`](crate::join_url).
    pub fn join<S: AsRef<str>>(&self, segments: &[S]) -> String {
        // a BaseUrl is never blank, so joining can not fail
        join_url(&self.0, segments).unwrap_or_else(|_| self.0.to_string())
    }

    /// Unwrap the underlying string.
    pub fn into_inner(self) -> Box<str> {
        self.0
    }
}

impl FromStr for BaseUrl {
    type Err = crate::InvalidAddress;

    fn from_str(s: &str) -> Result<Self> {
        normalize_base_url(s)
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for BaseUrl {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for BaseUrl {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BaseUrl {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for BaseUrl {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl PartialEq<BaseUrl> for str {
    fn eq(&self, other: &BaseUrl) -> bool {
        self == &*other.0
    }
}

impl PartialOrd<str> for BaseUrl {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        (*self.0).partial_cmp(other)
    }
}

impl From<BaseUrl> for String {
    fn from(base: BaseUrl) -> String {
        base.0.into()
    }
}
