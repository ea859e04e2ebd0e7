use thiserror::Error;

/// Boundary classification of a [`DomainError`].
///
/// The HTTP layer maps each kind to a status code; nothing below the
/// dispatcher needs to know about transport semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad hex, bad address, bad wire-format name. Never retried.
    MalformedInput,
    /// Non-conforming caller: unnormalized name, namehash mismatch,
    /// unknown selector or record function.
    ProtocolViolation,
    /// Registry or NFT lookups that could not produce an answer.
    UpstreamResolution,
    /// Key unavailable or signing primitive failure.
    Signing,
    /// Configuration could not be loaded.
    Internal,
}

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid hex data: {0}")]
    InvalidHex(String),

    #[error("Malformed DNS name: {0}")]
    MalformedName(String),

    #[error("Malformed call data: {0}")]
    MalformedCallData(String),

    #[error("Unsupported function selector {0}")]
    UnsupportedSelector(String),

    #[error("Name must be normalised: {0}")]
    NameNotNormalized(String),

    #[error("Name does not match namehash: {0}")]
    NamehashMismatch(String),

    #[error("Unsupported query function {0}")]
    UnsupportedQuery(String),

    #[error("No mapping for domain {0}")]
    NoDomainMapping(String),

    #[error("No mapping for domain {domain} at {subdomain}")]
    NoMapping { domain: String, subdomain: String },

    #[error("Upstream call failed: {0}")]
    Upstream(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidAddress(_)
            | DomainError::InvalidHex(_)
            | DomainError::MalformedName(_)
            | DomainError::MalformedCallData(_) => ErrorKind::MalformedInput,

            DomainError::UnsupportedSelector(_)
            | DomainError::NameNotNormalized(_)
            | DomainError::NamehashMismatch(_)
            | DomainError::UnsupportedQuery(_) => ErrorKind::ProtocolViolation,

            DomainError::NoDomainMapping(_)
            | DomainError::NoMapping { .. }
            | DomainError::Upstream(_) => ErrorKind::UpstreamResolution,

            DomainError::Signing(_) => ErrorKind::Signing,

            DomainError::ConfigError(_) => ErrorKind::Internal,
        }
    }
}
