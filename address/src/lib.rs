//! This crate is part of the Ontodocker client,
//! a Rust client for the [Ontodocker] triple-store management service.
//!
//! It turns user-supplied server addresses (`host[:port]` or full URLs)
//! into canonical base URLs, and joins path segments onto them.
//!
//! ```
//! use ontodocker_address::{join_url, normalize_base_url};
//!
//! let base = normalize_base_url("ontodocker.example.org:8443")?;
//! assert_eq!(base, "https://ontodocker.example.org:8443");
//! assert_eq!(
//!     join_url(&base, &["api", "v1", "endpoints"])?,
//!     "https://ontodocker.example.org:8443/api/v1/endpoints",
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [Ontodocker]: https://github.com/materialdigital/ontodocker

#![deny(missing_docs)]

pub mod error;
pub use error::{InvalidAddress, ValidationError};
mod _join;
pub use _join::*;
mod _normalize;
pub use _normalize::*;
mod _wrapper;
pub use _wrapper::*;
#[cfg(feature = "serde")]
mod _serde;
