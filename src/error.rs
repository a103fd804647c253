//! Error types for the typed-value codec.

use crate::types::TypeTag;

/// Errors that can occur while encoding or decoding typed values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("truncated input for {tag}: need {needed} bytes but only {available} available")]
    TruncatedInput {
        tag: TypeTag,
        needed: usize,
        available: usize,
    },

    #[error("invalid UTF-8 for {tag}: {reason}")]
    InvalidUtf8 { tag: TypeTag, reason: String },

    #[error("{kind} value is incompatible with {tag}")]
    Incompatible { tag: TypeTag, kind: &'static str },

    #[error("{values} values but {tags} type tags")]
    LengthMismatch { values: usize, tags: usize },

    #[error("unknown type code: {0}")]
    UnknownTypeCode(u8),

    #[error("unknown type name: {0:?}")]
    UnknownTypeName(String),

    #[error("transport error: {0}")]
    Transport(String),
}

impl CodecError {
    /// Wraps any displayable error as a transport error.
    pub fn transport(e: impl std::fmt::Display) -> Self {
        Self::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_input_message() {
        let err = CodecError::TruncatedInput {
            tag: TypeTag::I32,
            needed: 4,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "truncated input for I32: need 4 bytes but only 2 available"
        );
    }

    #[test]
    fn transport_wraps_display() {
        let io = std::io::Error::other("connection reset");
        assert_eq!(
            CodecError::transport(io),
            CodecError::Transport("connection reset".into())
        );
    }
}
