// SPDX-License-Identifier: PMPL-1.0-or-later
//
// Unified error types for Inkbridge.

use thiserror::Error;

/// Top-level error type for all Inkbridge operations.
///
/// Every failure is terminal and local to the operation that raised it:
/// nothing here is retried, and nothing crosses back to the host except
/// through its own job/registry signalling.
#[derive(Debug, Error)]
pub enum InkbridgeError {
    /// The reachability probe failed (network error or non-2xx response).
    /// Suppresses printer publication; never escapes discovery start.
    #[error("printer probe failed: {0}")]
    ProbeUnavailable(String),

    /// Local I/O failure reading the job's document payload. Fails the job
    /// before any network attempt is made.
    #[error("could not read the print document: {0}")]
    DocumentRead(String),

    /// Non-2xx response or transport failure while uploading a job.
    /// Unexpected errors during submission are folded into this variant.
    #[error("could not send the document to the printer: {0}")]
    Upload(String),

    /// Malformed host or HTTP client construction failure.
    #[error("printer connection configuration error: {0}")]
    Config(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, InkbridgeError>;
