use crate::error::{AppError, AppResult};
use crate::gateway::password;
use crate::gateway::types::{AuthResult, Credentials};
use crate::gateway::AuthGateway;

impl AuthGateway {
    /// Check `credentials` against the user record store.
    ///
    /// Unknown usernames and wrong passwords both return
    /// `AppError::Unauthorized`. A failed store query returns `AppError::Store`.
    /// Only the first record is consulted when several share a username.
    #[tracing::instrument(skip_all, fields(username = %credentials.username))]
    pub async fn authenticate(&self, credentials: &Credentials) -> AppResult<AuthResult> {
        let records = self.store.find_by_username(&credentials.username).await?;

        let Some(record) = records.into_iter().next() else {
            tracing::debug!("login rejected: no matching user record");
            return Err(AppError::Unauthorized);
        };

        if !password::verify(&credentials.password, &record.password).await? {
            tracing::debug!(user_id = record.id, "login rejected: credential mismatch");
            return Err(AppError::Unauthorized);
        }

        tracing::info!(user_id = record.id, "login succeeded");
        Ok(AuthResult::welcome(&record))
    }
}
