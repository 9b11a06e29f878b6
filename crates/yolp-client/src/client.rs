//! Client for the three YOLP endpoints.
//!
//! Each operation builds `{base}{path}?appid=..&output=json`, appends the
//! request's set fields, and issues one GET through [`HttpAdapter`]. No state
//! changes between calls, so one [`YolpClient`] can be shared across tasks.

use reqwest::{Client, Url};
use serde::Serialize;
use yolp_core::{YolpSettings, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

use crate::error::YolpError;
use crate::http::HttpAdapter;
use crate::query;
use crate::request::{GeoCoderRequest, LocalSearchRequest, ReverseGeoCoderRequest};
use crate::response::{GeoCoderResult, LocalSearchResult, ReverseGeoCoderResult};

const LOCAL_SEARCH_PATH: &str = "search/local/V1/localSearch";
const GEOCODER_PATH: &str = "geocode/V1/geoCoder";
const REVERSE_GEOCODER_PATH: &str = "geoapi/V1/reverseGeoCoder";

/// Everything [`YolpClient::new`] needs: transport, credential, and host.
#[derive(Clone)]
pub struct ClientConfig {
    pub http: Client,
    pub app_id: String,
    pub base_url: String,
}

impl ClientConfig {
    /// Production host with a default transport identifying itself as
    /// [`DEFAULT_USER_AGENT`].
    ///
    /// # Errors
    ///
    /// Returns [`YolpError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(app_id: impl Into<String>) -> Result<Self, YolpError> {
        Ok(Self {
            http: build_http_client(DEFAULT_USER_AGENT)?,
            app_id: app_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Config built from settings loaded by [`yolp_core::load_settings`].
    ///
    /// # Errors
    ///
    /// Returns [`YolpError::Http`] if the `reqwest::Client` cannot be built.
    pub fn from_settings(settings: &YolpSettings) -> Result<Self, YolpError> {
        Ok(Self {
            http: build_http_client(&settings.user_agent)?,
            app_id: settings.app_id.clone(),
            base_url: settings.base_url.clone(),
        })
    }

    /// Replaces the transport, e.g. to share a pool with the host application.
    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Points the client at another host (a mock server in tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("app_id", &"[redacted]")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn build_http_client(user_agent: &str) -> Result<Client, YolpError> {
    Ok(Client::builder().user_agent(user_agent).build()?)
}

/// Typed client for local search, geocoding, and reverse geocoding.
#[derive(Debug, Clone)]
pub struct YolpClient {
    http: HttpAdapter,
    app_id: String,
    base_url: Url,
}

impl YolpClient {
    /// # Errors
    ///
    /// Returns [`YolpError::InvalidBaseUrl`] if `config.base_url` is not an
    /// absolute URL that can carry a path.
    pub fn new(config: ClientConfig) -> Result<Self, YolpError> {
        // Exactly one trailing slash so joined paths extend the base path
        // instead of replacing its last segment.
        let normalised = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| YolpError::InvalidBaseUrl {
            base_url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(YolpError::InvalidBaseUrl {
                base_url: config.base_url,
                reason: "URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            http: HttpAdapter::new(config.http),
            app_id: config.app_id,
            base_url,
        })
    }

    /// Searches shops, facilities, and other points of interest.
    ///
    /// # Errors
    ///
    /// - [`YolpError::Query`] if the request cannot be rendered as a query.
    /// - [`YolpError::Http`] on transport failure.
    /// - [`YolpError::RequestFailed`] if the API answers with a non-2xx status.
    /// - [`YolpError::Deserialize`] if the body does not match the result model.
    pub async fn local_search(
        &self,
        request: &LocalSearchRequest,
    ) -> Result<LocalSearchResult, YolpError> {
        let url = self.build_url(LOCAL_SEARCH_PATH, request)?;
        self.http.get(url, None).await
    }

    /// Resolves an address or place name to coordinates.
    ///
    /// # Errors
    ///
    /// Same as [`YolpClient::local_search`].
    pub async fn geocode(&self, request: &GeoCoderRequest) -> Result<GeoCoderResult, YolpError> {
        let url = self.build_url(GEOCODER_PATH, request)?;
        self.http.get(url, None).await
    }

    /// Resolves a coordinate to the address, building, and road there.
    ///
    /// # Errors
    ///
    /// Same as [`YolpClient::local_search`].
    pub async fn reverse_geocode(
        &self,
        request: &ReverseGeoCoderRequest,
    ) -> Result<ReverseGeoCoderResult, YolpError> {
        let url = self.build_url(REVERSE_GEOCODER_PATH, request)?;
        self.http.get(url, None).await
    }

    /// Builds `{base}{path}?appid={app_id}&output=json` followed by the set
    /// fields of `params`, all percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`YolpError::InvalidBaseUrl`] if `path` cannot be joined onto
    /// the base, or [`YolpError::Query`] if `params` is not a flat struct.
    pub fn build_url<P>(&self, path: &str, params: &P) -> Result<Url, YolpError>
    where
        P: Serialize + ?Sized,
    {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| YolpError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join '{path}': {e}"),
            })?;
        url.query_pairs_mut()
            .append_pair("appid", &self.app_id)
            .append_pair("output", "json");
        query::append_params(&mut url, params)?;
        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
