//! Error context extension trait
//!
//! Adds `.context()` / `.with_context()` to any `Result` whose error converts
//! into [`BnglError`], in the spirit of `anyhow::Context`, while keeping the
//! error variant so callers can still match on it.
//!
//! # Examples
//!
//! ```rust
//! use bngl_export::domain::Result;
//! use bngl_export::domain::context::ResultExt;
//!
//! fn write_header(out: &mut String) -> Result<()> {
//!     use std::fmt::Write;
//!     writeln!(out, "begin model").context("Failed to write model header")
//! }
//! ```

use crate::domain::errors::BnglError;
use crate::domain::result::Result;
use std::fmt::Display;

/// Extension trait for adding context to `Result` types
pub trait ResultExt<T> {
    /// Add context to an error
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display;

    /// Add context to an error using a closure (lazy evaluation)
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<BnglError>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display,
    {
        self.map_err(|e| e.into().prefixed(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.into().prefixed(f()))
    }
}

impl BnglError {
    /// Prefixes the message of a message-carrying variant
    ///
    /// Structured variants are returned unchanged.
    fn prefixed(self, context: impl Display) -> Self {
        let wrap = |msg: String| format!("{context}: {msg}");
        match self {
            BnglError::Configuration(m) => BnglError::Configuration(wrap(m)),
            BnglError::Model(m) => BnglError::Model(wrap(m)),
            BnglError::Write(m) => BnglError::Write(wrap(m)),
            BnglError::Serialization(m) => BnglError::Serialization(wrap(m)),
            BnglError::Io(m) => BnglError::Io(wrap(m)),
            BnglError::Other(m) => BnglError::Other(wrap(m)),
            structured @ (BnglError::InconsistentCompartments { .. }
            | BnglError::UnknownCompartment(_)) => structured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::CompartmentId;
    use std::cell::Cell;

    #[test]
    fn test_context_keeps_variant() {
        let result: Result<()> = Err(BnglError::Write("sink closed".to_string()));
        let err = result.context("Failed to write reaction rules").unwrap_err();

        assert!(matches!(err, BnglError::Write(_)));
        let msg = err.to_string();
        assert!(msg.contains("Failed to write reaction rules"));
        assert!(msg.contains("sink closed"));
    }

    #[test]
    fn test_context_converts_foreign_errors() {
        let result: std::result::Result<(), std::fmt::Error> = Err(std::fmt::Error);
        let err = result.context("Failed to write parameters").unwrap_err();
        assert!(matches!(err, BnglError::Write(_)));
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let called = Cell::new(false);
        let result: Result<i32> = Ok(42);
        let value = result
            .with_context(|| {
                called.set(true);
                "unused"
            })
            .unwrap();

        assert_eq!(value, 42);
        assert!(!called.get());
    }

    #[test]
    fn test_structured_variants_unchanged() {
        let result: Result<()> = Err(BnglError::UnknownCompartment(CompartmentId::new(7)));
        let err = result.context("Ordering compartments").unwrap_err();
        assert!(matches!(err, BnglError::UnknownCompartment(id) if id.value() == 7));
    }
}
