use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, DataEnvelope},
    config,
};

/// Characters that cannot appear verbatim inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_backend_url().await
        }
    }

    /// Absolute URL for an `/api`-relative path such as `/employees`.
    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn encode_segment(segment: &str) -> String {
        utf8_percent_encode(segment, PATH_SEGMENT).to_string()
    }

    /// Sends the request and returns the `data` member of the success body.
    pub(crate) async fn send_for_data<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.execute(request).await?;
        let body = Self::read_success_body(response).await?;
        serde_json::from_str::<DataEnvelope<T>>(&body)
            .map(|envelope| envelope.data)
            .map_err(|err| {
                log::error!("Failed to parse response envelope: {}", err);
                ApiError::unparseable(None)
            })
    }

    /// Collection endpoints may answer with a missing or `null` `data`.
    pub(crate) async fn send_for_list<T>(&self, request: RequestBuilder) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let data: Option<Vec<T>> = self.send_for_data(request).await?;
        Ok(data.unwrap_or_default())
    }

    /// Sends the request and only checks the status; the success body is ignored.
    pub(crate) async fn send_without_data(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = self.execute(request).await?;
        Self::read_success_body(response).await.map(|_| ())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        log::debug!("{} {}", request.method(), request.url().path());
        self.dispatch(request).await
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn dispatch(&self, request: Request) -> Result<Response, ApiError> {
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(e.to_string()))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn dispatch(&self, request: Request) -> Result<Response, ApiError> {
        let responder = find_mock(request.url().as_str()).ok_or_else(|| {
            ApiError::request_failed(format!("No mock registered for {}", request.url()))
        })?;
        responder.respond(&request).map(MockResponse::into_response)
    }

    async fn read_success_body(response: Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(e.to_string()))?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(ApiError::from_error_body(status.as_u16(), &body))
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::find_mock;
