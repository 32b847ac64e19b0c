// # HTTP Contact Repository
//
// This crate provides the HTTP/JSON implementation of `ContactRepository`.
//
// ## Behavior
//
// - ✅ One HTTP request per repository call
// - ✅ Full error propagation to the caller as `Error::Http` or `Error::Json`
// - ✅ HTTP timeout from configuration
// - ✅ Single configurable base URL for reads and writes
// - ❌ NO retry logic
// - ❌ NO caching
// - ❌ NO background tasks
//
// ## API Reference
//
// | Operation | Method | Path                    | Body          | Response        |
// |-----------|--------|-------------------------|---------------|-----------------|
// | list      | GET    | `/api/v1/contact/`      | -             | array of Contact|
// | create    | POST   | `/api/v1/contact/`      | ContactDraft  | created Contact |
// | update    | PUT    | `/api/v1/contact/{id}`  | ContactDraft  | updated Contact |
// | delete    | DELETE | `/api/v1/contact/{id}`  | -             | status only     |

use async_trait::async_trait;
use contacts_core::config::ApiConfig;
use contacts_core::traits::ContactRepository;
use contacts_core::{Contact, ContactDraft, ContactId, Error, Result};
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Collection path under the service base URL
const CONTACT_PATH: &str = "/api/v1/contact/";

/// User agent sent with every request
const USER_AGENT: &str = concat!("contacts/", env!("CARGO_PKG_VERSION"));

/// HTTP contact repository
///
/// Stateless apart from the connection pool inside `reqwest::Client`.
/// Every call is a single request; failures are returned, never retried.
#[derive(Debug, Clone)]
pub struct HttpContactRepository {
    /// Service base URL without trailing slash
    base_url: String,

    /// HTTP client for API requests
    client: reqwest::Client,
}

impl HttpContactRepository {
    /// Create a repository from API configuration
    ///
    /// # Returns
    ///
    /// - `Ok(Self)`: Ready to use
    /// - `Err(Error::Config)`: If the configuration is invalid or the HTTP client cannot be built
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;

        // Build HTTP client with timeout
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.normalized_base_url().to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the contact collection
    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, CONTACT_PATH)
    }

    /// URL of a single contact
    fn item_url(&self, id: &ContactId) -> String {
        format!(
            "{}{}{}",
            self.base_url,
            CONTACT_PATH,
            encode_path_segment(id.as_str())
        )
    }

    /// Send a request and check the status
    ///
    /// Transport errors and non-2xx responses both become `Error::Http`.
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&ContactDraft>,
    ) -> Result<Response> {
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), url);
        if let Some(draft) = body {
            request = request.json(draft);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::http(format!("{} {} failed: {}", method, url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            return Err(Error::http(format!(
                "{} {} returned {} - {}",
                method, url, status, error_text
            )));
        }

        Ok(response)
    }

    /// Decode a JSON body
    ///
    /// A body that cannot be read is `Error::Http`; one that is not the
    /// expected JSON is `Error::Json`.
    async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::http(format!("Failed to read response from {}: {}", url, e)))?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Unexpected response body from {}: {}", url, e);
            Error::from(e)
        })
    }
}

#[async_trait]
impl ContactRepository for HttpContactRepository {
    async fn list(&self) -> Result<Vec<Contact>> {
        let url = self.collection_url();
        let response = self.send(Method::GET, &url, None).await?;
        let contacts: Vec<Contact> = Self::decode(response, &url).await?;

        tracing::debug!("Fetched {} contact(s)", contacts.len());
        Ok(contacts)
    }

    async fn create(&self, draft: &ContactDraft) -> Result<Contact> {
        let url = self.collection_url();
        let response = self.send(Method::POST, &url, Some(draft)).await?;
        Self::decode(response, &url).await
    }

    async fn update(&self, id: &ContactId, draft: &ContactDraft) -> Result<Contact> {
        let url = self.item_url(id);
        let response = self.send(Method::PUT, &url, Some(draft)).await?;
        Self::decode(response, &url).await
    }

    async fn delete(&self, id: &ContactId) -> Result<()> {
        let url = self.item_url(id);
        self.send(Method::DELETE, &url, None).await?;
        Ok(())
    }

    fn repository_name(&self) -> &'static str {
        "http"
    }
}

/// Percent-encode characters that are not safe in a URL path segment.
///
/// Identifiers are opaque, so anything that would end or split the segment
/// (`/`, `?`, `#`) is escaped, along with `%` itself.
fn encode_path_segment(s: &str) -> String {
    s.replace('%', "%25")
        .replace('/', "%2F")
        .replace('#', "%23")
        .replace('?', "%3F")
}
