//! One configured HTTP client per backend.

use std::fmt;
use std::sync::Arc;

use auras_config::HttpConfig;
use auras_core::ServiceKind;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::interceptor::{Interceptor, RequestContext};
use crate::response::{ApiResponse, decode_body, failure_from_response};

/// HTTP client bound to one service's base URL.
///
/// Cloning is cheap; clones share the connection pool and interceptors.
/// Construction performs no I/O.
#[derive(Clone)]
pub struct ServiceClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    kind: ServiceKind,
    base_url: String,
    http: reqwest::Client,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("service", &self.inner.kind)
            .field("base_url", &self.inner.base_url)
            .field("interceptors", &self.inner.interceptors.len())
            .finish()
    }
}

impl ServiceClient {
    /// Build a client for `kind` rooted at `base_url`.
    ///
    /// Every request carries `Content-Type: application/json` and is bounded
    /// by `http.timeout_ms`, body included.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` does not parse, or
    /// [`ApiError::Transport`] if the underlying `reqwest::Client` fails to build.
    pub fn new(
        kind: ServiceKind,
        base_url: &str,
        http: &HttpConfig,
        interceptors: Vec<Arc<dyn Interceptor>>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl {
            service: kind,
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(http.user_agent.clone())
            .timeout(http.timeout())
            .default_headers(headers)
            .build()
            .map_err(|source| ApiError::Transport {
                service: kind,
                source,
            })?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                kind,
                base_url,
                http: client,
                interceptors,
            }),
        })
    }

    #[must_use]
    pub fn kind(&self) -> ServiceKind {
        self.inner.kind
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Absolute URL for `path` (which should start with `/`).
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or a
    /// body that does not decode into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        let builder = self.request(&Method::GET, path);
        self.execute(&Method::GET, path, builder).await
    }

    /// `GET path?query`. `None` fields of `query` are left off.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<ApiResponse<T>, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(&Method::GET, path).query(query);
        self.execute(&Method::GET, path, builder).await
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(&Method::POST, path).json(body);
        self.execute(&Method::POST, path, builder).await
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(&Method::PUT, path).json(body);
        self.execute(&Method::PUT, path, builder).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See [`Self::get`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        let builder = self.request(&Method::DELETE, path);
        self.execute(&Method::DELETE, path, builder).await
    }

    /// Start a request with interceptor headers already applied.
    pub(crate) fn request(&self, method: &Method, path: &str) -> RequestBuilder {
        let ctx = self.context(method, path);
        let mut headers = HeaderMap::new();
        for interceptor in &self.inner.interceptors {
            interceptor.before_request(&ctx, &mut headers);
        }
        tracing::debug!(service = %self.inner.kind, %method, path, "sending request");
        self.inner
            .http
            .request(method.clone(), self.url(path))
            .headers(headers)
    }

    /// Send `builder` and return the raw response if its status is a success.
    ///
    /// Every failure is shown to the interceptors before it is returned.
    pub(crate) async fn dispatch(
        &self,
        method: &Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let result = match builder.send().await {
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => Err(failure_from_response(self.inner.kind, response).await),
            Err(source) => Err(ApiError::Transport {
                service: self.inner.kind,
                source,
            }),
        };

        if let Err(error) = &result {
            let ctx = self.context(method, path);
            for interceptor in &self.inner.interceptors {
                interceptor.after_error(&ctx, error);
            }
            tracing::debug!(service = %self.inner.kind, %method, path, %error, "request failed");
        }
        result
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<T>, ApiError> {
        let response = self.dispatch(method, path, builder).await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|source| ApiError::Transport {
            service: self.inner.kind,
            source,
        })?;
        let data = decode_body(self.inner.kind, path, &bytes)?;
        Ok(ApiResponse { status, data })
    }

    fn context<'a>(&self, method: &'a Method, path: &'a str) -> RequestContext<'a> {
        RequestContext {
            service: self.inner.kind,
            method,
            path,
        }
    }
}

/// Percent-encode a single path segment (an entity id).
#[must_use]
pub fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
