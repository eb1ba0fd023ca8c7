//! Acquisition error taxonomy.

use crate::fetch::FetchError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of one acquisition or normalization. Every variant is terminal at
/// the point it is returned; only timeout-class fetch failures are retried,
/// and those surface here as [`AcquireError::Timeout`] once the budget is
/// exhausted. Nothing is logged-and-swallowed or downgraded to a placeholder
/// descriptor.
#[derive(Debug, Error)]
pub enum AcquireError {
    /// Malformed URL, empty raw input, or missing local file.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Non-timeout network or HTTP failure (bad status, DNS, refused
    /// connection). Never retried.
    #[error("transport failure: {0}")]
    Transport(#[source] FetchError),

    /// Every attempt timed out; `attempts` counts them all, including the
    /// first.
    #[error("request timed out after {attempts} attempts")]
    Timeout { attempts: u32 },

    /// Download succeeded but the response carried no usable content-type
    /// header. No fallback MIME type is guessed.
    #[error("response is missing a content-type header")]
    MissingContentType,

    /// The resolved MIME type has no registered extension mapping.
    #[error("no registered extension for MIME type {0:?}")]
    NoExtensionForMimeType(String),

    /// Writing bytes to local storage failed. Distinct failure domain from
    /// the network; never retried.
    #[error("local I/O failure at {}: {source}", path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
