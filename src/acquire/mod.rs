//! Remote acquisition: resolve a URL to name/extension/MIME metadata and
//! materialize its bytes at a collision-resistant temp path.
//!
//! Orchestrates the candidate-name derivation, temp-path generation, the
//! fetch/retry state machine, and final descriptor assembly. Each call is a
//! single sequential operation; the only suspension point is the backoff
//! wait between a timeout and the next attempt.

mod error;

pub use error::AcquireError;

use crate::config::RetryConfig;
use crate::fetch::{self, FetchResponse};
use crate::naming;
use crate::retry::{self, RetryDecision};
use crate::source::FileDescriptor;
use crate::temp_path;
use std::fs;
use std::time::Duration;

/// Caller-supplied context for one acquisition. An explicit `file_name`
/// overrides the candidate derived from the URL path and is used verbatim.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    pub file_name: Option<String>,
}

/// Downloads `url` to a fresh temp path and returns the populated descriptor.
///
/// Ownership of the temp file transfers to the caller via the descriptor's
/// `local_path`; this function never deletes it. Backoff waits block the
/// calling thread; hosts with their own scheduling use
/// [`acquire_with_sleeper`].
pub fn acquire(
    url: &str,
    scope: &Scope,
    config: &RetryConfig,
) -> Result<FileDescriptor, AcquireError> {
    acquire_with_sleeper(url, scope, config, std::thread::sleep)
}

/// [`acquire`] with an injectable suspension function, so cooperative hosts
/// can yield instead of blocking and tests can observe backoff without real
/// delays.
pub fn acquire_with_sleeper(
    url: &str,
    scope: &Scope,
    config: &RetryConfig,
    mut sleep: impl FnMut(Duration),
) -> Result<FileDescriptor, AcquireError> {
    let parsed = url::Url::parse(url)
        .map_err(|e| AcquireError::InvalidInput(format!("malformed URL {:?}: {}", url, e)))?;

    let candidate = match &scope.file_name {
        Some(name) => name.clone(),
        None => naming::candidate_from_url(&parsed),
    };
    let hint = naming::extension_of(&candidate)
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();
    let target = temp_path::generate(&hint);

    let response = fetch_with_retry(parsed.as_str(), config, &mut sleep)?;

    fs::write(&target, &response.body).map_err(|source| AcquireError::LocalIo {
        path: target.clone(),
        source,
    })?;

    let mime_type = content_type(&response.headers).ok_or(AcquireError::MissingContentType)?;
    let (file_name, extension) = naming::resolve(&candidate, &mime_type)
        .ok_or_else(|| AcquireError::NoExtensionForMimeType(mime_type.clone()))?;

    Ok(FileDescriptor {
        local_path: Some(target),
        file_name,
        binary: None,
        headers: response.headers,
        mime_type: Some(mime_type),
        extension: Some(extension),
    })
}

/// Fetch loop: retries timeout-classified failures per the backoff policy,
/// fails immediately on anything else. Attempts are strictly ordered; a new
/// one starts only after the previous timed out and the delay elapsed.
fn fetch_with_retry(
    url: &str,
    config: &RetryConfig,
    sleep: &mut impl FnMut(Duration),
) -> Result<FetchResponse, AcquireError> {
    let mut attempt = 0u32;
    loop {
        match fetch::fetch(url, config) {
            Ok(response) => return Ok(response),
            Err(e) if e.is_timeout() => match retry::decide(attempt, config) {
                RetryDecision::RetryAfter(delay) => {
                    tracing::debug!(
                        "GET {} timed out (attempt {}), retrying in {:?}",
                        url,
                        attempt + 1,
                        delay
                    );
                    sleep(delay);
                    attempt += 1;
                }
                RetryDecision::GiveUp => {
                    return Err(AcquireError::Timeout {
                        attempts: attempt + 1,
                    })
                }
            },
            Err(e) => return Err(AcquireError::Transport(e)),
        }
    }
}

/// First `content-type` header of the final response (name matched
/// case-insensitively), with any `;`-separated parameters stripped.
fn content_type(headers: &[(String, String)]) -> Option<String> {
    headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| {
            value
                .split(';')
                .next()
                .unwrap_or(value)
                .trim()
                .to_string()
        })
        .filter(|essence| !essence.is_empty())
}
