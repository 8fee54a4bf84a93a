use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;
use zeroize::Zeroizing;

use crate::entities::profile::{Profile, ProfileUpdate};
use crate::errors::ApiClientError;
use crate::interfaces::api::ProfileApi;
use crate::settings::EditorConfig;

/// `reqwest`-backed implementation of [`ProfileApi`]. The bearer token is
/// taken from the injected configuration, never from ambient storage.
pub struct HttpProfileApi {
    client: Client,
    endpoint: Url,
    token: Zeroizing<String>,
}

impl HttpProfileApi {
    pub fn new(config: &EditorConfig) -> Result<Self, ApiClientError> {
        let endpoint = Url::parse(&format!(
            "{}/profile",
            config.api_base_url.trim_end_matches('/')
        ))
        .map_err(|e| ApiClientError::InvalidEndpoint(e.to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(HttpProfileApi {
            client,
            endpoint,
            token: Zeroizing::new(config.auth_token.clone()),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiClientError> {
        let response = self
            .client
            .put(self.endpoint.clone())
            .bearer_auth(self.token.as_str())
            .json(update)
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiClientError::Unauthorized);
        }

        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(|e| e.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                });
            tracing::warn!(status = status.as_u16(), "Profile update rejected: {}", message);
            return Err(ApiClientError::Rejected(status.as_u16(), message));
        }

        let profile = response
            .json::<Profile>()
            .await
            .map_err(|e| ApiClientError::Decode(e.to_string()))?;

        Ok(profile)
    }
}
