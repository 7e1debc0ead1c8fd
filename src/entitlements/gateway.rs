use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::config::ServiceConfig;
use crate::entitlements::model::Entitlement;

/// REST path for entitlement lookups on the service side.
const ENTITLEMENTS_PATH: &str = "/api/entitlements/v1/entitlements/";

/// Errors that can occur while talking to the entitlement service.
///
/// The three classes exist for diagnostics; callers in the effect layer
/// coalesce every one of them into a single failure action.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a response (DNS, connect, timeout).
    #[error("request to entitlement service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("entitlement service returned HTTP {code}")]
    Status { code: u16 },

    /// The response body was not the expected JSON collection.
    #[error("could not decode entitlement response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

/// Remote data gateway for entitlement lookups.
///
/// A trait seam so the effect layer can be exercised against a scripted
/// gateway in tests. Implementations make exactly one attempt per call:
/// no retry, no caching, no de-duplication of concurrent calls.
#[async_trait]
pub trait EntitlementsGateway: Send + Sync {
    async fn fetch_entitlements(&self, username: &str) -> Result<Vec<Entitlement>, GatewayError>;
}

/// Gateway backed by the entitlement service's REST API.
pub struct HttpEntitlementsGateway {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpEntitlementsGateway {
    pub fn new(service: &ServiceConfig) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(
                service.connect_timeout_seconds,
            )))
            .timeout(Duration::from_secs(u64::from(
                service.request_timeout_seconds,
            )))
            .build()?;

        Ok(Self {
            client,
            base_url: service.base_url.trim_end_matches('/').to_string(),
            api_token: service.api_token.clone(),
        })
    }
}

#[async_trait]
impl EntitlementsGateway for HttpEntitlementsGateway {
    async fn fetch_entitlements(&self, username: &str) -> Result<Vec<Entitlement>, GatewayError> {
        let url = format!("{}{}", self.base_url, ENTITLEMENTS_PATH);
        let mut request = self.client.get(&url).query(&[("user", username)]);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                code: status.as_u16(),
            });
        }

        response
            .json::<Vec<Entitlement>>()
            .await
            .map_err(|source| GatewayError::Decode { source })
    }
}
