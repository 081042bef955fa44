//! Integration tests for the fetch → decode → render pipeline, driven
//! through a fake token fetcher.

use std::fs;
use std::sync::Mutex;

use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;
use ecr_login::config::Config;
use ecr_login::error::{EcrLoginError, Result};
use ecr_login::fetch::{AuthorizationRecord, TokenFetcher};

/// In-memory fetcher that returns canned records and remembers which
/// registry identifiers were requested.
struct FakeFetcher {
    records: Vec<AuthorizationRecord>,
    requested: Mutex<Option<Vec<String>>>,
}

impl FakeFetcher {
    fn new(records: Vec<AuthorizationRecord>) -> Self {
        Self {
            records,
            requested: Mutex::new(None),
        }
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone().expect("fetch was never called")
    }
}

impl TokenFetcher for FakeFetcher {
    async fn fetch(&self, registry_ids: &[String]) -> Result<Vec<AuthorizationRecord>> {
        *self.requested.lock().unwrap() = Some(registry_ids.to_vec());
        Ok(self.records.clone())
    }
}

/// Fetcher that always fails with a transport error.
struct FailingFetcher;

impl TokenFetcher for FailingFetcher {
    async fn fetch(&self, _registry_ids: &[String]) -> Result<Vec<AuthorizationRecord>> {
        Err(EcrLoginError::Transport {
            message: "dispatch failure".into(),
        })
    }
}

fn record(user_pass: &str, endpoint: &str) -> AuthorizationRecord {
    AuthorizationRecord {
        token: Some(general_purpose::STANDARD.encode(user_pass)),
        proxy_endpoint: Some(endpoint.into()),
        expires_at: Some(Utc::now()),
    }
}

#[tokio::test]
async fn renders_one_login_command_per_record_in_order() {
    let fetcher = FakeFetcher::new(vec![
        record("AWS:first-secret", "https://111.dkr.ecr.us-east-1.amazonaws.com"),
        record("AWS:second-secret", "https://222.dkr.ecr.us-east-1.amazonaws.com"),
    ]);
    let mut out = Vec::new();

    ecr_login::run(&Config::default(), &fetcher, &mut out)
        .await
        .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(
        output,
        "docker login -u AWS -p first-secret -e none https://111.dkr.ecr.us-east-1.amazonaws.com\n\
         docker login -u AWS -p second-secret -e none https://222.dkr.ecr.us-east-1.amazonaws.com\n"
    );
}

#[tokio::test]
async fn empty_registry_set_requests_all_registries() {
    let fetcher = FakeFetcher::new(vec![]);
    let mut out = Vec::new();

    ecr_login::run(&Config::default(), &fetcher, &mut out)
        .await
        .unwrap();

    assert!(fetcher.requested().is_empty());
    assert!(out.is_empty());
}

#[tokio::test]
async fn registry_ids_are_passed_through_verbatim() {
    let fetcher = FakeFetcher::new(vec![]);
    let config = Config::new(vec!["222".into(), "111".into()], None);
    let mut out = Vec::new();

    ecr_login::run(&config, &fetcher, &mut out).await.unwrap();

    assert_eq!(fetcher.requested(), vec!["222", "111"]);
}

#[tokio::test]
async fn one_malformed_token_fails_the_run_with_no_output() {
    let mut bad = record("AWS:secret", "https://222.dkr.ecr.us-east-1.amazonaws.com");
    bad.token = Some("!!not-base64!!".into());
    let fetcher = FakeFetcher::new(vec![
        record("AWS:secret", "https://111.dkr.ecr.us-east-1.amazonaws.com"),
        bad,
        record("AWS:secret", "https://333.dkr.ecr.us-east-1.amazonaws.com"),
    ]);
    let mut out = Vec::new();

    let err = ecr_login::run(&Config::default(), &fetcher, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, EcrLoginError::MalformedToken { index: 1, .. }));
    assert!(out.is_empty());
}

#[tokio::test]
async fn missing_endpoint_fails_the_run() {
    let mut bad = record("AWS:secret", "unused");
    bad.proxy_endpoint = None;
    let fetcher = FakeFetcher::new(vec![bad]);
    let mut out = Vec::new();

    let err = ecr_login::run(&Config::default(), &fetcher, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EcrLoginError::IncompleteRecord {
            field: "proxyEndpoint",
            ..
        }
    ));
    assert!(out.is_empty());
}

#[tokio::test]
async fn transport_error_propagates_with_no_output() {
    let mut out = Vec::new();

    let err = ecr_login::run(&Config::default(), &FailingFetcher, &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, EcrLoginError::Transport { .. }));
    assert!(out.is_empty());
}

#[tokio::test]
async fn custom_template_file_overrides_default_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("env.tpl");
    fs::write(
        &path,
        "{% for credential in credentials %}export ECR_PASS={{ credential.pass }}\n{% endfor %}",
    )
    .unwrap();

    let fetcher = FakeFetcher::new(vec![record(
        "AWS:secret",
        "https://111.dkr.ecr.us-east-1.amazonaws.com",
    )]);
    let config = Config::new(vec![], Some(path));
    let mut out = Vec::new();

    ecr_login::run(&config, &fetcher, &mut out).await.unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "export ECR_PASS=secret\n");
}

#[tokio::test]
async fn missing_template_file_fails_before_any_output() {
    let fetcher = FakeFetcher::new(vec![record(
        "AWS:secret",
        "https://111.dkr.ecr.us-east-1.amazonaws.com",
    )]);
    let config = Config::new(vec![], Some("/nonexistent/login.tpl".into()));
    let mut out = Vec::new();

    let err = ecr_login::run(&config, &fetcher, &mut out).await.unwrap_err();

    assert!(matches!(err, EcrLoginError::TemplateLoad { .. }));
    assert!(out.is_empty());
}
