use std::error::Error;
use std::fmt;

/// The error returned by [`research`](crate::research) when the pattern
/// string cannot be compiled to a [`Regex`](regex::Regex).
///
/// This is the only recoverable error in this crate: a pattern is ordinary
/// runtime input, so a malformed one is reported rather than unwrapped.
/// Everything else that can go wrong here is a programming error (indexing a
/// child group that does not exist, passing bounds that are not `char`
/// boundaries) or a broken contract in the regex engine itself, and those
/// panic instead. See the crate root documentation for the panic messages.
#[derive(Debug, Clone)]
pub struct PatternError {
    /// Error that was returned by the regex compiler
    pub error: regex::Error,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "research: the pattern failed to compile: {}", self.error)
    }
}

impl Error for PatternError {
    /// Returns the underlying [`regex::Error`]
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}
