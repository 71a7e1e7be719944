use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{
    domain::AlbumId,
    protocol::{Album, NewAlbum, UpdateAlbumRequest, UpdatedAlbum},
};
use tracing::debug;

pub mod error;

pub use error::{AlbumOperation, ClientError, ErrorCategory};
pub use reqwest::StatusCode;

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// A write against the albums endpoint: a new album when there is no id yet,
/// otherwise a title change for an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumSubmission {
    Create(NewAlbum),
    Update { id: AlbumId, title: String },
}

impl AlbumSubmission {
    pub fn operation(&self) -> AlbumOperation {
        match self {
            Self::Create(_) => AlbumOperation::Create,
            Self::Update { .. } => AlbumOperation::Update,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record as the server returned it, including its assigned id.
    Created(Album),
    /// Carries the title that was sent, not whatever the server echoed.
    Updated { id: AlbumId, title: String },
}

#[async_trait]
pub trait AlbumsHandle: Send + Sync {
    async fn load(&self) -> Result<Vec<Album>>;
    async fn submit(&self, submission: AlbumSubmission) -> Result<SubmitOutcome>;
    async fn remove(&self, id: AlbumId) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct AlbumsClient {
    http: Client,
    base_url: String,
}

impl AlbumsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// No timeout is applied unless one is given; a hung request stays pending.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::ClientBuild)?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_albums(&self) -> Result<Vec<Album>> {
        let operation = AlbumOperation::Load;
        let response = self
            .send(operation, self.http.get(format!("{}/albums", self.base_url)))
            .await?;
        decode_json(operation, response).await
    }

    pub async fn create_album(&self, draft: &NewAlbum) -> Result<Album> {
        let operation = AlbumOperation::Create;
        let request = self.json_request(
            operation,
            Method::POST,
            format!("{}/albums", self.base_url),
            draft,
        )?;
        let response = self.send(operation, request).await?;
        decode_json(operation, response).await
    }

    pub async fn update_album(&self, id: AlbumId, title: &str) -> Result<UpdatedAlbum> {
        let operation = AlbumOperation::Update;
        let request = self.json_request(
            operation,
            Method::PUT,
            format!("{}/albums/{}", self.base_url, id.0),
            &UpdateAlbumRequest {
                title: title.to_string(),
            },
        )?;
        let response = self.send(operation, request).await?;
        decode_json(operation, response).await
    }

    pub async fn delete_album(&self, id: AlbumId) -> Result<()> {
        let operation = AlbumOperation::Delete;
        self.send(
            operation,
            self.http.delete(format!("{}/albums/{}", self.base_url, id.0)),
        )
        .await?;
        Ok(())
    }

    fn json_request<T: Serialize>(
        &self,
        operation: AlbumOperation,
        method: Method,
        url: String,
        body: &T,
    ) -> Result<RequestBuilder> {
        let body = serde_json::to_vec(body)
            .map_err(|source| ClientError::Encode { operation, source })?;
        Ok(self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body))
    }

    async fn send(&self, operation: AlbumOperation, request: RequestBuilder) -> Result<Response> {
        debug!(operation = operation.as_str(), "sending albums request");
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { operation, status });
        }
        Ok(response)
    }
}

#[async_trait]
impl AlbumsHandle for AlbumsClient {
    async fn load(&self) -> Result<Vec<Album>> {
        self.list_albums().await
    }

    async fn submit(&self, submission: AlbumSubmission) -> Result<SubmitOutcome> {
        match submission {
            AlbumSubmission::Create(draft) => {
                self.create_album(&draft).await.map(SubmitOutcome::Created)
            }
            AlbumSubmission::Update { id, title } => {
                self.update_album(id, &title).await?;
                Ok(SubmitOutcome::Updated { id, title })
            }
        }
    }

    async fn remove(&self, id: AlbumId) -> Result<()> {
        self.delete_album(id).await
    }
}

async fn decode_json<T: DeserializeOwned>(
    operation: AlbumOperation,
    response: Response,
) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(|source| ClientError::Transport { operation, source })?;
    serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode { operation, source })
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    url::Url::parse(trimmed).map_err(|source| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
