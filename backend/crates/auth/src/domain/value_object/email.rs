//! Email Value Object
//!
//! Represents a syntactically valid, lower-cased email address.

use serde::Serialize;
use std::fmt;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Characters allowed in the local part besides ASCII alphanumerics
const LOCAL_SPECIAL_CHARS: &str = ".!#$%&'*+/=?^_`{|}~-";

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Validate and normalize (lower-case) an email address
    ///
    /// The error is the field message reported to the client.
    pub fn new(email: impl Into<String>) -> Result<Self, &'static str> {
        let email = email.into().trim().to_lowercase();

        if email.is_empty() {
            return Err("must be provided");
        }

        if email.len() > EMAIL_MAX_LENGTH || !Self::is_valid_format(&email) {
            return Err("must be a valid email address");
        }

        Ok(Self(email))
    }

    fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        if local.is_empty()
            || !local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIAL_CHARS.contains(c))
        {
            return false;
        }

        // Labels: 1..=63 alphanumerics or hyphens, no leading or trailing hyphen
        !domain.is_empty()
            && domain.split('.').all(|label| {
                !label.is_empty()
                    && label.len() <= 63
                    && !label.starts_with('-')
                    && !label.ends_with('-')
                    && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("admin@localhost").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert_eq!(Email::new(""), Err("must be provided"));
        assert_eq!(Email::new("   "), Err("must be provided"));
        for bad in [
            "userexample.com",
            "user@",
            "@example.com",
            "user@@example.com",
            "user@-example.com",
            "user@example..com",
            "us er@example.com",
        ] {
            assert_eq!(Email::new(bad), Err("must be a valid email address"), "{bad}");
        }
    }

    #[test]
    fn test_email_case_normalization() {
        let email = Email::new("  User@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }
}
