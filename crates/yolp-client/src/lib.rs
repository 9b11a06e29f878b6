//! Typed client for the Yahoo! Open Local Platform (YOLP) web API.
//!
//! Covers three read-only endpoints: local search, geocoding, and reverse
//! geocoding. Requests are plain structs whose set fields become query
//! parameters; responses decode into the nested models under [`response`].

pub mod client;
pub mod error;
pub mod extra;
pub mod http;
pub mod json;
pub mod query;
pub mod request;
pub mod response;

pub use client::{ClientConfig, YolpClient};
pub use error::YolpError;
pub use extra::ExtraFields;
pub use http::HttpAdapter;
pub use request::{GeoCoderRequest, LocalSearchRequest, ReverseGeoCoderRequest};
pub use response::{GeoCoderResult, LocalSearchResult, ReverseGeoCoderResult};
pub use yolp_core::{ConfigError, YolpSettings};
