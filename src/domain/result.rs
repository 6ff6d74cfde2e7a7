//! Result type alias for the GEMtractor client

use super::errors::ClientError;

/// Result type alias for client operations
///
/// # Examples
///
/// ```
/// use gemtractor_client::domain::result::Result;
/// use gemtractor_client::domain::errors::ClientError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ClientError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ClientError>;

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
        let result: Result<i32> = Err(ClientError::Validation("test error".to_string()));
        assert!(result.is_err());
    }
}
