//! Credential decoding.
//!
//! Turns raw authorization records into [`Credential`]s. ECR tokens are
//! base64-encoded `user:password` pairs; the password may itself contain
//! colons, so the split happens on the first colon only.
//!
//! Decoding is strict: one malformed record fails the whole batch. For a
//! credential tool, silently dropping a registry's login is a worse failure
//! mode than an outright error.

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{EcrLoginError, Result};
use crate::fetch::AuthorizationRecord;

/// A decoded registry credential.
///
/// Immutable once constructed; the field names below are the names a custom
/// template sees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credential {
    /// The verbatim base64 token as returned by the service, for templates
    /// that want the raw form.
    pub token: String,
    /// Username, the text before the first colon of the decoded token.
    pub user: String,
    /// Password, everything after the first colon.
    pub pass: String,
    /// Registry login URL.
    pub endpoint: String,
    /// Instant after which this credential is no longer valid.
    pub expires_at: DateTime<Utc>,
}

/// Decode a single authorization record.
///
/// `index` is the record's position in the batch, used only for error
/// messages.
pub fn decode(record: &AuthorizationRecord, index: usize) -> Result<Credential> {
    let token = record
        .token
        .as_deref()
        .ok_or(EcrLoginError::IncompleteRecord {
            index,
            field: "authorizationToken",
        })?;

    let bytes = general_purpose::STANDARD.decode(token).map_err(|e| {
        EcrLoginError::MalformedToken {
            index,
            message: format!("malformed token encoding: {e}"),
        }
    })?;

    let text = String::from_utf8(bytes).map_err(|_| EcrLoginError::MalformedToken {
        index,
        message: "decoded token is not valid UTF-8".into(),
    })?;

    let (user, pass) = text.split_once(':').ok_or_else(|| EcrLoginError::MalformedToken {
        index,
        message: "malformed credential payload: no `:` delimiter".into(),
    })?;

    let endpoint = record
        .proxy_endpoint
        .as_deref()
        .ok_or(EcrLoginError::IncompleteRecord {
            index,
            field: "proxyEndpoint",
        })?;

    let expires_at = record
        .expires_at
        .ok_or(EcrLoginError::IncompleteRecord {
            index,
            field: "expiresAt",
        })?;

    Ok(Credential {
        token: token.to_owned(),
        user: user.to_owned(),
        pass: pass.to_owned(),
        endpoint: endpoint.to_owned(),
        expires_at,
    })
}

/// Decode a whole batch, preserving the service's record order.
///
/// All-or-nothing: the first malformed or incomplete record aborts the
/// batch, so no partial credential set ever reaches the renderer.
pub fn decode_all(records: &[AuthorizationRecord]) -> Result<Vec<Credential>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| decode(record, index))
        .collect()
}
