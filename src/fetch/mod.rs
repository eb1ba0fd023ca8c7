//! HTTP GET transport.
//!
//! Uses the curl crate (libcurl) to perform one blocking GET with redirect
//! following and the configured timeout budgets. Classifies failures so the
//! acquirer can retry timeouts and nothing else. Never touches local storage.

mod parse;

use crate::config::RetryConfig;
use std::str;
use thiserror::Error;

/// Body and final-response headers of a successful (HTTP 200) fetch.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub body: Vec<u8>,
    /// Header (name, value) pairs of the final response, in wire order.
    pub headers: Vec<(String, String)>,
}

/// Classified fetch failure. Only [`FetchError::Timeout`] is ever retried;
/// every other class is terminal on the first occurrence.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connect, receive-stall, or whole-request budget exceeded.
    #[error("request timed out: {0}")]
    Timeout(#[source] curl::Error),
    /// Non-timeout transport failure (DNS, connection refused, TLS, ...).
    #[error("transport failure: {0}")]
    Transport(#[source] curl::Error),
    /// Response arrived with a status other than 200.
    #[error("unexpected HTTP status {0}")]
    Status(u32),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout(_))
    }
}

/// Performs a GET for `url`, following redirects (up to 10 hops).
///
/// A 200 response yields the body plus the final hop's headers. Timeouts
/// (connect, receive stall, request budget) classify as `Timeout`; any other
/// failure or status classifies as `Transport`/`Status`. One network transfer
/// per call on a fresh handle; attempts never share a connection.
pub fn fetch(url: &str, config: &RetryConfig) -> Result<FetchResponse, FetchError> {
    let (code, raw_headers, body) = perform_get(url, config).map_err(classify)?;
    if code != 200 {
        return Err(FetchError::Status(code));
    }
    Ok(FetchResponse {
        body,
        headers: parse::final_header_block(&raw_headers),
    })
}

fn perform_get(
    url: &str,
    config: &RetryConfig,
) -> Result<(u32, Vec<String>, Vec<u8>), curl::Error> {
    let mut raw_headers: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(config.connect_timeout())?;
    easy.timeout(config.request_timeout())?;
    // Receive-stall budget: abort when under 1 byte/s for recv_timeout.
    easy.low_speed_limit(1)?;
    easy.low_speed_time(config.recv_timeout())?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                raw_headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    Ok((code, raw_headers, body))
}

/// Timeouts are the one retryable class; everything else is transport.
fn classify(e: curl::Error) -> FetchError {
    if e.is_operation_timedout() {
        FetchError::Timeout(e)
    } else {
        FetchError::Transport(e)
    }
}
