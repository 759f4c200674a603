//! Result type alias for the exporter

use super::errors::BnglError;

/// Result type alias for exporter operations
///
/// # Examples
///
/// ```
/// use bngl_export::domain::result::Result;
/// use bngl_export::domain::errors::BnglError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(BnglError::Model("no compartments".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, BnglError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(BnglError::Other("test error".to_string()));
        assert!(result.is_err());
    }
}
