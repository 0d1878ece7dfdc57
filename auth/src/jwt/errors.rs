use thiserror::Error;

/// Error type for JWT operations.
///
/// Variants are granular for logging; the HTTP surface is expected to
/// collapse them into a single uniform authentication failure.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token is expired")]
    TokenExpired,

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}
