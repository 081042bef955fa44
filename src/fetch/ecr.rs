//! ECR-backed token fetching.
//!
//! Wraps the AWS SDK client behind [`TokenFetcher`]. Credential/session
//! negotiation is the SDK's ambient provider chain (environment, profile,
//! IMDS); this module only shapes the request and the response.

use aws_config::BehaviorVersion;
use aws_sdk_ecr::error::DisplayErrorContext;
use aws_sdk_ecr::Client;

use super::{AuthorizationRecord, TokenFetcher};
use crate::error::{EcrLoginError, Result};

/// Fetches authorization tokens from ECR with a single batched call.
#[derive(Debug, Clone)]
pub struct EcrTokenFetcher {
    client: Client,
}

impl EcrTokenFetcher {
    /// Create a fetcher around an existing ECR client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a fetcher from the ambient AWS configuration, optionally
    /// overriding the region.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let config = loader.load().await;
        Self::new(Client::new(&config))
    }
}

impl TokenFetcher for EcrTokenFetcher {
    async fn fetch(&self, registry_ids: &[String]) -> Result<Vec<AuthorizationRecord>> {
        let mut request = self.client.get_authorization_token();
        if !registry_ids.is_empty() {
            tracing::debug!("Requesting tokens for {} registries", registry_ids.len());
            // registryIds is deprecated upstream but still honored, and it is
            // the only way to scope the batch to specific registries.
            #[allow(deprecated)]
            {
                request = request.set_registry_ids(Some(registry_ids.to_vec()));
            }
        } else {
            tracing::debug!("Requesting tokens for all accessible registries");
        }

        let response = request.send().await.map_err(|e| EcrLoginError::Transport {
            message: DisplayErrorContext(&e).to_string(),
        })?;

        let records = response
            .authorization_data()
            .iter()
            .map(|data| AuthorizationRecord {
                token: data.authorization_token().map(str::to_owned),
                proxy_endpoint: data.proxy_endpoint().map(str::to_owned),
                expires_at: data
                    .expires_at()
                    .and_then(|t| chrono::DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
            })
            .collect::<Vec<_>>();

        tracing::debug!("Received {} authorization records", records.len());
        Ok(records)
    }
}
