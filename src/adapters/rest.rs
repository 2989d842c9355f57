//! Reqwest-based Drive API client.
//!
//! Production implementation of [`DriveApi`] against the Drive v3 REST
//! endpoints. Authentication is an opaque Bearer token supplied by the
//! caller; obtaining and refreshing it is out of scope here.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::error::DriveError;
use crate::models::{DriveFile, FileList, FILE_FIELDS};
use crate::query::Query;
use crate::traits::DriveApi;

/// Default base URL for the Drive API.
pub const DRIVE_API_URL: &str = "https://www.googleapis.com";

/// Drive API client backed by reqwest.
///
/// Every request carries the shared-drive visibility flags required by the
/// [`DriveApi`] contract.
///
/// # Example
///
/// ```ignore
/// use drivepath::adapters::RestDriveClient;
///
/// let client = RestDriveClient::new().with_auth("ya29.token");
/// let folder = client.get_file("1A2b3C").await?;
/// ```
#[derive(Debug, Clone)]
pub struct RestDriveClient {
    /// Base URL for the Drive API
    base_url: String,
    /// Reusable HTTP client
    client: Client,
    /// Optional authentication token for Bearer auth
    auth_token: Option<String>,
}

impl RestDriveClient {
    /// Create a new client with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: DRIVE_API_URL.to_string(),
            client: Client::new(),
            auth_token: None,
        }
    }

    /// Create a new client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
            auth_token: None,
        }
    }

    /// Set the authentication token for Bearer auth.
    pub fn with_auth(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    /// Set the authentication token on an existing client.
    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.auth_token = token;
    }

    /// Helper to add auth header to a request builder if token is set.
    fn add_auth_header(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(ref token) = self.auth_token {
            builder.header("Authorization", format!("Bearer {}", token))
        } else {
            builder
        }
    }

    /// Turn a non-success response into a [`DriveError::Api`].
    async fn error_from_response(response: reqwest::Response) -> DriveError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        DriveError::Api { status, message }
    }
}

impl Default for RestDriveClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DriveApi for RestDriveClient {
    /// GET /drive/v3/files/{id}
    ///
    /// A 404 maps to `Ok(None)`; every other non-2xx status is an error.
    async fn get_file(&self, id: &str) -> Result<Option<DriveFile>, DriveError> {
        let url = format!("{}/drive/v3/files/{}", self.base_url, id);
        debug!("GET {url}");

        let builder = self
            .client
            .get(&url)
            .query(&[("supportsAllDrives", "true")]);
        let response = self.add_auth_header(builder).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let text = response.text().await?;
        let file = serde_json::from_str::<DriveFile>(&text)?;
        Ok(Some(file))
    }

    /// GET /drive/v3/files
    ///
    /// Sends `q`, `spaces=drive`, the field projection, both shared-drive
    /// flags, and `pageToken` when continuing a listing.
    async fn list_files(
        &self,
        query: &Query,
        page_token: Option<&str>,
    ) -> Result<FileList, DriveError> {
        let url = format!("{}/drive/v3/files", self.base_url);
        let q = query.to_query_string();
        debug!("GET {url} q={q}");

        let mut params = vec![
            ("q", q.as_str()),
            ("spaces", "drive"),
            ("fields", FILE_FIELDS),
            ("supportsAllDrives", "true"),
            ("includeItemsFromAllDrives", "true"),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let builder = self.client.get(&url).query(&params);
        let response = self.add_auth_header(builder).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let text = response.text().await?;
        let list = serde_json::from_str::<FileList>(&text)?;
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults_to_public_api() {
        let client = RestDriveClient::new();
        assert_eq!(client.base_url, DRIVE_API_URL);
        assert!(client.auth_token.is_none());
    }

    #[test]
    fn test_with_auth_sets_token() {
        let client = RestDriveClient::new().with_auth("tok");
        assert_eq!(client.auth_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_set_auth_token_replaces_and_clears() {
        let mut client = RestDriveClient::with_base_url("http://localhost:1".to_string());
        client.set_auth_token(Some("tok".to_string()));
        assert_eq!(client.auth_token.as_deref(), Some("tok"));
        client.set_auth_token(None);
        assert!(client.auth_token.is_none());
    }
}
