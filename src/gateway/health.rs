use crate::gateway::types::HealthStatus;
use crate::gateway::AuthGateway;

impl AuthGateway {
    /// Count the users table to prove the store is reachable.
    ///
    /// Never fails: a store error is reported inline as `unhealthy`, with the
    /// error's text included for the operator.
    #[tracing::instrument(skip(self))]
    pub async fn health_check(&self) -> HealthStatus {
        match self.store.count_users().await {
            Ok(count) => HealthStatus::healthy(count),
            Err(e) => {
                tracing::warn!(error = %e, "store health check failed");
                HealthStatus::unhealthy(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::{MemoryStore, OUTAGE_DETAIL};
    use crate::gateway::types::{DatabaseState, HealthState};
    use std::sync::Arc;

    #[tokio::test]
    async fn reachable_store_reports_row_count() {
        let store = MemoryStore::with_users(&[(1, "alice", "a"), (2, "bob", "b")]);
        let status = AuthGateway::new(Arc::new(store)).health_check().await;

        assert_eq!(status, HealthStatus::healthy(2));
    }

    #[tokio::test]
    async fn unreachable_store_reports_error_text() {
        let status = AuthGateway::new(Arc::new(MemoryStore::unreachable()))
            .health_check()
            .await;

        assert_eq!(status.status, HealthState::Unhealthy);
        assert_eq!(status.database, DatabaseState::Disconnected);
        assert!(status.users_count.is_none());
        assert!(status.error.unwrap().contains(OUTAGE_DETAIL));
    }
}
