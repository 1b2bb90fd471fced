//! Error type shared by every entry point

use std::fmt::Debug;

/// Hexagon generation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HexagonError {
    /// An input violated its type, shape or range contract
    #[error("{context}: {field} must be {expected}, instead of {actual}")]
    InvalidParameter {
        /// Entry point that rejected the input
        context: &'static str,
        /// Name of the offending input
        field: &'static str,
        /// Constraint the input has to satisfy
        expected: &'static str,
        /// Offending type and value
        actual: String,
    },
}

impl HexagonError {
    /// Build an `InvalidParameter` error and report it on the diagnostic channel
    pub(crate) fn invalid(
        context: &'static str,
        field: &'static str,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        let actual = actual.into();
        tracing::warn!(context, field, expected, actual = %actual, "invalid parameter");
        Self::InvalidParameter {
            context,
            field,
            expected,
            actual,
        }
    }

    /// Entry point that rejected the input
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidParameter { context, .. } => context,
        }
    }

    /// Name of the input that was rejected
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidParameter { field, .. } => field,
        }
    }
}

/// Describe a rejected scalar as "<type> with value <value>"
pub(crate) fn describe<T: Debug>(value: &T) -> String {
    format!("{} with value {:?}", std::any::type_name::<T>(), value)
}

/// Describe a rejected flat buffer by its length
pub(crate) fn describe_buffer<T>(buffer: &[T]) -> String {
    format!(
        "buffer of {} {} elements",
        buffer.len(),
        std::any::type_name::<T>()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_field_and_value() {
        let err = HexagonError::invalid("generate", "size", "a positive number", describe(&-3.0f32));
        let msg = err.to_string();
        assert!(msg.contains("generate"));
        assert!(msg.contains("size"));
        assert!(msg.contains("a positive number"));
        assert!(msg.contains("f32 with value -3.0"));
        assert_eq!(err.field(), "size");
        assert_eq!(err.context(), "generate");
    }

    #[test]
    fn test_describe_buffer() {
        assert_eq!(describe_buffer(&[1u32, 2]), "buffer of 2 u32 elements");
    }
}
