//! # Auth Gateway
//!
//! The only component with behavior of its own: it checks submitted
//! credentials against the user record store and reports store health.
//!
//! ## Submodules
//! - `types`: Request/response types for the API
//! - `authentication`: `AuthGateway::authenticate`
//! - `health`: `AuthGateway::health_check`
//! - `password`: Verification of a submitted password against the stored hash
//!
//! ## Login flow
//! 1. Look up every record whose username matches exactly
//! 2. No record → generic `Unauthorized`
//! 3. First record's hash doesn't verify → the same `Unauthorized`
//! 4. Otherwise → welcome message and the record id
//!
//! The gateway holds no mutable state: repeating a call against an unchanged
//! store gives the same answer, and concurrent calls never interact.

pub mod authentication;
pub mod health;
pub mod password;
pub mod types;

use crate::db::UserStore;
use std::sync::Arc;

/// Handle to the gateway, shared by every request handler
///
/// The store is injected at construction and never replaced. Cloning only
/// bumps the `Arc` count.
#[derive(Clone)]
pub struct AuthGateway {
    store: Arc<dyn UserStore>,
}

impl AuthGateway {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory `UserStore` used by gateway and router tests.

    use crate::db::models::UserRecord;
    use crate::db::{StoreError, UserStore};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Detail text a failing store reports; must never reach a login response.
    pub const OUTAGE_DETAIL: &str = "upstream 10.0.0.5:5432 refused connection";

    pub struct MemoryStore {
        records: Vec<UserRecord>,
        failing: bool,
        queries: AtomicUsize,
    }

    impl MemoryStore {
        pub fn with_users(users: &[(i64, &str, &str)]) -> Self {
            let records = users
                .iter()
                .map(|&(id, username, password)| UserRecord {
                    id,
                    username: username.to_string(),
                    password: bcrypt::hash(password, 4).unwrap(),
                })
                .collect();

            Self {
                records,
                failing: false,
                queries: AtomicUsize::new(0),
            }
        }

        pub fn unreachable() -> Self {
            Self {
                records: Vec::new(),
                failing: true,
                queries: AtomicUsize::new(0),
            }
        }

        /// Insert a row verbatim, without hashing the stored credential.
        pub fn push_raw(&mut self, id: i64, username: &str, stored: &str) {
            self.records.push(UserRecord {
                id,
                username: username.to_string(),
                password: stored.to_string(),
            });
        }

        pub fn queries(&self) -> usize {
            self.queries.load(Ordering::SeqCst)
        }

        fn outage() -> StoreError {
            StoreError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: OUTAGE_DETAIL.to_string(),
            }
        }
    }

    #[async_trait]
    impl UserStore for MemoryStore {
        async fn find_by_username(&self, username: &str) -> Result<Vec<UserRecord>, StoreError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            if self.failing {
                return Err(Self::outage());
            }
            Ok(self
                .records
                .iter()
                .filter(|r| r.username == username)
                .cloned()
                .collect())
        }

        async fn count_users(&self) -> Result<u64, StoreError> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            if self.failing {
                return Err(Self::outage());
            }
            Ok(self.records.len() as u64)
        }
    }
}
