//! This crate is part of the Ontodocker client,
//! a Rust client for the [Ontodocker] triple-store management service.
//!
//! It turns the raw response of the `/api/v1/endpoints` API
//! into a validated list of SPARQL endpoint URLs,
//! and extracts dataset names from those URLs.
//!
//! ```
//! use ontodocker_endpoints::{endpoint_infos, parse_endpoints_response};
//!
//! let raw = "['http://h:None/api/jena/ds1/sparql', 'http://h:None/api/jena/ds2']";
//! let endpoints = parse_endpoints_response(raw, true)?;
//! assert_eq!(endpoints[0], "https://h/api/v1/jena/ds1/sparql");
//!
//! let infos = endpoint_infos(endpoints)?;
//! assert_eq!(infos[1].dataset(), "ds2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [Ontodocker]: https://github.com/materialdigital/ontodocker
#![deny(missing_docs)]

mod _dataset;
pub use _dataset::*;
mod _error;
pub use _error::*;
mod _info;
pub use _info::*;
mod _parse;
pub use _parse::*;
mod _rectify;
pub use _rectify::*;
pub mod legacy;
