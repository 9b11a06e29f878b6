//! Thin JSON-over-HTTP adapter around `reqwest`.
//!
//! Every verb funnels through [`HttpAdapter::send`], which reads the body text
//! regardless of status, turns non-2xx answers into
//! [`YolpError::RequestFailed`], and decodes 2xx bodies with the
//! case-insensitive decoder in [`crate::json`].

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, IntoUrl, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::YolpError;
use crate::json;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Issues JSON requests on a shared `reqwest::Client`.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone, Default)]
pub struct HttpAdapter {
    client: Client,
}

impl HttpAdapter {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Sends a GET and decodes the JSON response into `T`.
    ///
    /// # Errors
    ///
    /// - [`YolpError::Http`] on transport failure or an unparsable URL.
    /// - [`YolpError::RequestFailed`] on a non-2xx status.
    /// - [`YolpError::Deserialize`] if the body does not decode into `T`.
    pub async fn get<T, U>(&self, url: U, authorization: Option<&str>) -> Result<T, YolpError>
    where
        T: DeserializeOwned,
        U: IntoUrl,
    {
        self.send(self.client.get(url), authorization).await
    }

    /// Sends `body` as JSON with POST and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// As [`HttpAdapter::get`], plus [`YolpError::Serialize`] if `body`
    /// cannot be encoded.
    pub async fn post<T, B, U>(
        &self,
        url: U,
        body: &B,
        authorization: Option<&str>,
    ) -> Result<T, YolpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        U: IntoUrl,
    {
        let request = with_json_body(self.client.post(url), body, "POST")?;
        self.send(request, authorization).await
    }

    /// Sends `body` as JSON with PUT and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// As [`HttpAdapter::post`].
    pub async fn put<T, B, U>(
        &self,
        url: U,
        body: &B,
        authorization: Option<&str>,
    ) -> Result<T, YolpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        U: IntoUrl,
    {
        let request = with_json_body(self.client.put(url), body, "PUT")?;
        self.send(request, authorization).await
    }

    /// Sends `body` as JSON with DELETE and decodes the response into `T`.
    ///
    /// # Errors
    ///
    /// As [`HttpAdapter::post`].
    pub async fn delete<T, B, U>(
        &self,
        url: U,
        body: &B,
        authorization: Option<&str>,
    ) -> Result<T, YolpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        U: IntoUrl,
    {
        let request = with_json_body(self.client.delete(url), body, "DELETE")?;
        self.send(request, authorization).await
    }

    async fn send<T>(
        &self,
        mut builder: RequestBuilder,
        authorization: Option<&str>,
    ) -> Result<T, YolpError>
    where
        T: DeserializeOwned,
    {
        if let Some(value) = authorization {
            let mut value = HeaderValue::from_str(value).map_err(|e| YolpError::InvalidHeader {
                name: AUTHORIZATION.as_str().to_string(),
                reason: e.to_string(),
            })?;
            value.set_sensitive(true);
            builder = builder.header(AUTHORIZATION, value);
        }

        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(%method, path = url.path(), "sending YOLP request");

        let response = self.client.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                %method,
                path = url.path(),
                status = status.as_u16(),
                "YOLP request failed"
            );
            return Err(YolpError::RequestFailed {
                status,
                method,
                url: url.to_string(),
                body,
            });
        }

        json::from_str(&body).map_err(|source| YolpError::Deserialize {
            context: format!("{method} {}", url.path()),
            source,
        })
    }
}

fn with_json_body<B>(
    builder: RequestBuilder,
    body: &B,
    method: &str,
) -> Result<RequestBuilder, YolpError>
where
    B: Serialize + ?Sized,
{
    let encoded = serde_json::to_vec(body).map_err(|source| YolpError::Serialize {
        context: format!("{method} request body"),
        source,
    })?;
    Ok(builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(encoded))
}
