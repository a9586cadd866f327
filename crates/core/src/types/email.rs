//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// RFC 5321 upper bound on address length.
const MAX_EMAIL_LENGTH: usize = 254;

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("email must be at most {MAX_EMAIL_LENGTH} characters")]
    TooLong,
    /// The input is missing an @ symbol, or the local/domain part is empty.
    #[error("email must have the form local@domain")]
    Malformed,
}

/// A syntactically valid email address.
///
/// Validation is structural only: a non-empty local part and domain separated
/// by a single @ symbol, within the RFC 5321 length limit. Deliverability is
/// not checked.
///
/// ## Examples
///
/// ```
/// use stockroom_core::Email;
///
/// assert!(Email::parse("user@example.com").is_ok());
/// assert!(Email::parse("user.name+tag@domain.co.uk").is_ok());
///
/// assert!(Email::parse("").is_err());
/// assert!(Email::parse("no-at-symbol").is_err());
/// assert!(Email::parse("@domain.com").is_err());
/// assert!(Email::parse("user@").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse and validate an email address.
    ///
    /// The address is lowercased so lookups are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] if the input is empty, too long, or not of the
    /// form `local@domain`.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(EmailError::Empty);
        }
        if input.len() > MAX_EMAIL_LENGTH {
            return Err(EmailError::TooLong);
        }

        let Some((local, domain)) = input.split_once('@') else {
            return Err(EmailError::Malformed);
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(EmailError::Malformed);
        }

        Ok(Self(input.to_lowercase()))
    }

    /// Get the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
