//! Error policy definitions.

use std::fmt;

use crate::error::{Error, Result};

/// How non-fatal errors are handled.
///
/// Usage errors and directory-creation failures abort under every policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log a generic message and continue with zero-valued data (default).
    #[default]
    Lenient,
    /// Propagate the error; `main` reports it and exits non-zero.
    Strict,
}

impl ErrorPolicy {
    /// Map the compile-time strict flag to a policy.
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            ErrorPolicy::Strict
        } else {
            ErrorPolicy::Lenient
        }
    }

    /// Apply the policy to the result of a step.
    ///
    /// Returns `Ok(Some(value))` on success, `Ok(None)` when a lenient policy
    /// swallowed the error, and `Err` when the error must propagate.
    pub fn absorb<T>(self, result: Result<T>, message: &str) -> Result<Option<T>> {
        let err = match result {
            Ok(value) => return Ok(Some(value)),
            Err(err) => err,
        };

        if err.is_fatal() {
            return Err(err);
        }

        match self {
            ErrorPolicy::Lenient => {
                tracing::debug!("{}", err);
                tracing::error!("{}", message);
                Ok(None)
            }
            ErrorPolicy::Strict => Err(err),
        }
    }

    /// Apply the policy to a condition that ends the run early without a
    /// user-facing message.
    pub fn skip(self, err: Error) -> Result<()> {
        if err.is_fatal() {
            return Err(err);
        }

        match self {
            ErrorPolicy::Lenient => {
                tracing::debug!("Skipping: {}", err);
                Ok(())
            }
            ErrorPolicy::Strict => Err(err),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Lenient => write!(f, "lenient"),
            ErrorPolicy::Strict => write!(f, "strict"),
        }
    }
}
