//! Username validation utilities

use thiserror::Error;

/// Errors that can occur during username validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UsernameValidationError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username exceeds maximum length of {0} characters")]
    TooLong(usize),

    #[error("Username contains invalid character: '{0}'. Only alphanumeric characters, underscores, and hyphens are allowed")]
    InvalidCharacter(char),
}

const MAX_USERNAME_LENGTH: usize = 50;

/// Validate a username
///
/// Rules:
/// - Cannot be empty
/// - Maximum 50 characters
/// - Only alphanumeric characters, underscores, and hyphens
pub fn validate_username(username: &str) -> Result<(), UsernameValidationError> {
    if username.is_empty() {
        return Err(UsernameValidationError::Empty);
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(UsernameValidationError::TooLong(MAX_USERNAME_LENGTH));
    }

    for c in username.chars() {
        if !c.is_ascii_alphanumeric() && c != '_' && c != '-' {
            return Err(UsernameValidationError::InvalidCharacter(c));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("user_name").is_ok());
        assert!(validate_username("user-1").is_ok());
        assert!(validate_username("Bob42").is_ok());
    }

    #[test]
    fn test_empty_username() {
        assert_eq!(validate_username(""), Err(UsernameValidationError::Empty));
    }

    #[test]
    fn test_username_too_long() {
        let long_username = "a".repeat(51);
        assert_eq!(
            validate_username(&long_username),
            Err(UsernameValidationError::TooLong(50))
        );
    }

    #[test]
    fn test_username_invalid_character() {
        assert_eq!(
            validate_username("user@name"),
            Err(UsernameValidationError::InvalidCharacter('@'))
        );
        assert_eq!(
            validate_username("user name"),
            Err(UsernameValidationError::InvalidCharacter(' '))
        );
    }
}
