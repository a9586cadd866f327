//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::{Email, UserId};

/// A registered user (domain type).
///
/// The password hash is intentionally not a field here: it lives only in the
/// repository layer, so a `User` can never leak it into a response body.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_has_no_password_fields() {
        let user = User {
            id: UserId::generate(),
            email: Email::parse("user@example.com").unwrap(),
            name: "Test User".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("email"));
        assert!(obj.contains_key("name"));
        assert!(obj.contains_key("created_at"));
        assert!(!obj.contains_key("password_hash"));
        assert!(!obj.contains_key("password"));
    }
}
