//! # Database Models
//!
//! Row types returned by the user record store. The store owns these rows;
//! the gateway only ever reads them.

use serde::Deserialize;
use std::fmt;

/// One row of the users table
///
/// Only the columns the gateway needs are declared. Any other column the
/// store returns (`created_at`, ...) is ignored during deserialization.
///
/// ## Stored credential
/// `password` holds a bcrypt hash such as `$2b$12$...`, never the clear text.
/// See `gateway::password` for how it is checked.
///
/// `Debug` is implemented by hand so the stored credential never reaches the logs.
#[derive(Clone, Deserialize)]
pub struct UserRecord {
    /// Integer primary key, returned to the client as `user_id`
    pub id: i64,

    /// Login name, expected to be unique in the table
    pub username: String,

    /// Stored credential (bcrypt hash)
    pub password: String,
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_columns_are_ignored() {
        let rows: Vec<UserRecord> = serde_json::from_str(
            r#"[{"id": 7, "username": "alice", "password": "$2b$04$x", "created_at": "2024-01-15T10:30:00Z"}]"#,
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 7);
        assert_eq!(rows[0].username, "alice");
    }

    #[test]
    fn debug_hides_the_stored_credential() {
        let record = UserRecord {
            id: 1,
            username: "alice".into(),
            password: "$2b$04$abcdefghijklmnopqrstuv".into(),
        };

        let printed = format!("{:?}", record);
        assert!(printed.contains("alice"));
        assert!(!printed.contains("abcdefghijklmnopqrstuv"));
    }
}
