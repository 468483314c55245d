use super::Error;

/// Error when an engine does not support a requested feature.
///
/// This occurs when:
/// - DDL is requested for an index kind the engine has no syntax for
/// - A retrospection entry point is invoked that the engine does not implement
///
/// Callers are expected to avoid the feature for this engine rather than retry.
#[derive(Debug)]
pub(super) struct UnsupportedFeature {
    message: Box<str>,
}

impl std::error::Error for UnsupportedFeature {}

impl core::fmt::Display for UnsupportedFeature {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported feature: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported feature error.
    pub fn unsupported_feature(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedFeature(UnsupportedFeature {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an unsupported feature error.
    pub fn is_unsupported_feature(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::UnsupportedFeature(_)))
    }
}
