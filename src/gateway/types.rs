//! Request and response types for the login and health endpoints.

use crate::db::models::UserRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Username/password pair submitted to `POST /login`
///
/// Lives for one request only. `Debug` never prints the password.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful login response
///
/// `user_id` is omitted from the JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl AuthResult {
    /// Successful login for `record`, greeting the stored username.
    pub fn welcome(record: &UserRecord) -> Self {
        Self {
            success: true,
            message: format!("ようこそ！{}さん", record.username),
            user_id: Some(record.id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseState {
    Connected,
    Disconnected,
}

/// Body of `GET /health`
///
/// Exactly one of `users_count` (healthy) and `error` (unhealthy) is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: HealthState,
    pub database: DatabaseState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn healthy(users_count: u64) -> Self {
        Self {
            status: HealthState::Healthy,
            database: DatabaseState::Connected,
            users_count: Some(users_count),
            error: None,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: HealthState::Unhealthy,
            database: DatabaseState::Disconnected,
            users_count: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_debug_is_redacted() {
        let credentials = Credentials {
            username: "alice".into(),
            password: "hunter2".into(),
        };
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("alice"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn health_json_shapes() {
        assert_eq!(
            serde_json::to_value(HealthStatus::healthy(3)).unwrap(),
            json!({"status": "healthy", "database": "connected", "users_count": 3})
        );
        assert_eq!(
            serde_json::to_value(HealthStatus::unhealthy("connection refused")).unwrap(),
            json!({"status": "unhealthy", "database": "disconnected", "error": "connection refused"})
        );
    }

    #[test]
    fn welcome_embeds_username_and_id() {
        let record = UserRecord {
            id: 7,
            username: "alice".into(),
            password: String::new(),
        };
        let result = AuthResult::welcome(&record);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"success": true, "message": "ようこそ！aliceさん", "user_id": 7})
        );
    }
}
