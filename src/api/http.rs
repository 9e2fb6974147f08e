use super::types::{ApiReply, CommandRequest, Endpoints};
use super::PlaybackApi;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_USER_AGENT: &str = concat!("spotify-kiosk/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed client for the kiosk backend
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
    endpoints: Endpoints,
}

impl HttpApi {
    pub fn new(client: Client, base_url: &str, endpoints: Endpoints) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints,
        }
    }

    /// Shared HTTP client (reused for API calls and artwork downloads)
    pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
        Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(timeout)
            .build()
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn read_reply(resp: Response) -> Result<ApiReply> {
        let status = resp.status().as_u16();
        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);

        if !is_json {
            return Ok(ApiReply::empty(status));
        }

        let bytes = resp.bytes().await?;
        let body = serde_json::from_slice(&bytes)?;
        Ok(ApiReply::new(status, body))
    }
}

#[async_trait]
impl PlaybackApi for HttpApi {
    async fn now_playing(&self) -> Result<ApiReply> {
        let url = self.url(&self.endpoints.now_playing);
        debug!(%url, "GET now playing");
        let resp = self.client.get(&url).send().await?;
        Self::read_reply(resp).await
    }

    async fn send_command(&self, command: CommandRequest) -> Result<ApiReply> {
        let url = self.url(command.path(&self.endpoints));
        debug!(%url, command = command.label(), "POST command");

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(body) = command.body() {
            request = request.json(&body);
        }

        let resp = request.send().await?;
        Self::read_reply(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let api = HttpApi::new(Client::new(), "http://kiosk.local:8888/", Endpoints::default());
        assert_eq!(api.url("/api/next"), "http://kiosk.local:8888/api/next");
        assert_eq!(api.url("api/next"), "http://kiosk.local:8888/api/next");
    }
}
