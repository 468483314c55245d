use super::Error;

/// Error when a catalog row does not have the expected shape.
///
/// This occurs when:
/// - A catalog view is missing an expected column
/// - A column holds a value of the wrong kind (text where a number is expected)
/// - A type code has no logical type counterpart
#[derive(Debug)]
pub(super) struct InvalidResult {
    message: Box<str>,
}

impl std::error::Error for InvalidResult {}

impl core::fmt::Display for InvalidResult {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid result error.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResult(InvalidResult {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid result error.
    pub fn is_invalid_result(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InvalidResult(_)))
    }
}
