/// Fallible read access to the posts service.
///
/// `path` is everything after the base URL, e.g. `/posts?userId=1`.
#[allow(async_fn_in_trait)]
pub trait PostsApi {
    async fn get(&self, path: &str) -> Result<String, ClientError>;
}

/// Client for the remote posts service
pub struct PostsClient {
    base_url: String,
    client: reqwest::Client,
}

impl PostsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Get the base URL for the client
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl PostsApi for PostsClient {
    async fn get(&self, path: &str) -> Result<String, ClientError> {
        let url = self.url_for(path);
        let response = self.client
            .get(&url)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(body)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Malformed response body: {0}")]
    DecodeError(#[from] serde_json::Error),
}
