use email_address::EmailAddress;
use std::str::FromStr;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MAX_DISPLAY_NAME_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Password must be at most 128 characters")]
    PasswordTooLong,

    #[error("Display name must be between 1 and 100 characters")]
    InvalidDisplayName,
}

/// Emails are compared case-insensitively, so they are stored lower-cased.
pub fn normalize_email(raw: &str) -> Result<String, CredentialError> {
    let email = raw.trim().to_lowercase();
    EmailAddress::from_str(&email).map_err(|_| CredentialError::InvalidEmail)?;
    Ok(email)
}

pub fn validate_password(password: &str) -> Result<(), CredentialError> {
    let len = password.chars().count();

    if len < MIN_PASSWORD_LEN {
        return Err(CredentialError::PasswordTooShort);
    }
    if len > MAX_PASSWORD_LEN {
        return Err(CredentialError::PasswordTooLong);
    }

    Ok(())
}

pub fn normalize_display_name(raw: &str) -> Result<String, CredentialError> {
    let name = raw.trim();
    let len = name.chars().count();

    if len == 0 || len > MAX_DISPLAY_NAME_LEN {
        return Err(CredentialError::InvalidDisplayName);
    }

    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email_lowercases_and_trims() {
        assert_eq!(
            normalize_email("  Jane.Doe@Example.COM ").unwrap(),
            "jane.doe@example.com"
        );
    }

    #[test]
    fn test_normalize_email_rejects_garbage() {
        assert_eq!(normalize_email("not-an-email"), Err(CredentialError::InvalidEmail));
        assert_eq!(normalize_email(""), Err(CredentialError::InvalidEmail));
    }

    #[test]
    fn test_password_length_bounds() {
        assert_eq!(validate_password("short"), Err(CredentialError::PasswordTooShort));
        assert!(validate_password("longenough").is_ok());
        assert_eq!(
            validate_password(&"x".repeat(MAX_PASSWORD_LEN + 1)),
            Err(CredentialError::PasswordTooLong)
        );
    }

    #[test]
    fn test_display_name_rules() {
        assert_eq!(normalize_display_name("  Jane  ").unwrap(), "Jane");
        assert_eq!(
            normalize_display_name("   "),
            Err(CredentialError::InvalidDisplayName)
        );
        assert_eq!(
            normalize_display_name(&"a".repeat(MAX_DISPLAY_NAME_LEN + 1)),
            Err(CredentialError::InvalidDisplayName)
        );
    }
}
