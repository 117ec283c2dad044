//! Domain error types for the Haven engine.
//!
//! These errors represent domain-level failures that can occur during
//! feed operations. They are caught at the mutation boundary in the app
//! shell and never escape to a rendering layer.

use thiserror::Error;

/// Errors surfaced by the remote store client.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

/// Errors surfaced by feed mutations.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Submitted content trimmed down to nothing; no network call is issued.
    #[error("content is empty after trimming")]
    EmptyContent,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors surfaced by the session provider.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("sign out failed: {0}")]
    SignOutFailed(String),

    #[error("session operation failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}
