use thiserror::Error;

/// Errors raised while building a [`TransformState`](super::state::TransformState).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A build parameter is outside its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A buffer could not be reserved.
    #[error("failed to allocate {buffer} ({len} elements)")]
    AllocationFailure { buffer: &'static str, len: usize },
}

impl TransformError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        TransformError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = TransformError::invalid("spectrum_size must be > 0");
        assert_eq!(err.to_string(), "invalid argument: spectrum_size must be > 0");

        let err = TransformError::AllocationFailure {
            buffer: "frequencies",
            len: 512,
        };
        assert_eq!(err.to_string(), "failed to allocate frequencies (512 elements)");
    }
}
