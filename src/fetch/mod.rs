//! Authorization token fetching.
//!
//! [`TokenFetcher`] is the seam between the pipeline and the registry
//! service: the real implementation ([`EcrTokenFetcher`]) issues one batched
//! `GetAuthorizationToken` call, and tests substitute an in-memory fake.
//! Raw records keep the service's field optionality; validation happens in
//! the decoder.

pub mod ecr;

use chrono::{DateTime, Utc};

use crate::error::Result;

pub use ecr::EcrTokenFetcher;

/// One raw authorization record as returned by the registry service.
///
/// Fields mirror the wire shape, so any of them may be absent; the decoder
/// treats a missing field as a contract violation by the upstream service.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationRecord {
    /// Opaque base64-encoded `user:pass` token.
    pub token: Option<String>,
    /// URL a client uses to authenticate against this registry.
    pub proxy_endpoint: Option<String>,
    /// Instant after which the token is no longer valid.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Fetches authorization records for a set of registry identifiers.
///
/// One call covers the whole set: an empty slice requests tokens for every
/// registry the ambient identity can access. Implementations keep no state
/// between calls and must preserve the service's record order.
// The pipeline drives a single fetch per run on one task; no Send bound is
// required of implementor futures.
#[allow(async_fn_in_trait)]
pub trait TokenFetcher {
    /// Request authorization records for exactly `registry_ids`, or for all
    /// accessible registries when the slice is empty.
    async fn fetch(&self, registry_ids: &[String]) -> Result<Vec<AuthorizationRecord>>;
}
