/// Convenience result type used across muxu.
pub type MuxuResult<T> = Result<T, MuxuError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum MuxuError {
    /// Invalid caller-provided data or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Frame sequence metadata or frame bytes could not be read or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Checkout session creation failed; surfaced to the shopper as-is.
    #[error("checkout error: {0}")]
    Checkout(String),

    /// Contact form rejected or challenge verification failed.
    #[error("contact error: {0}")]
    Contact(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MuxuError {
    /// Build a [`MuxuError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MuxuError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`MuxuError::Checkout`] value.
    pub fn checkout(msg: impl Into<String>) -> Self {
        Self::Checkout(msg.into())
    }

    /// Build a [`MuxuError::Contact`] value.
    pub fn contact(msg: impl Into<String>) -> Self {
        Self::Contact(msg.into())
    }

    /// Build a [`MuxuError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
