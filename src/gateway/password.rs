//! Stored credential verification.
//!
//! The `password` column of the users table holds a salted bcrypt hash. The
//! submitted password is checked against it with `bcrypt::verify`, which is
//! CPU-bound, so the check runs on Tokio's blocking pool instead of stalling
//! an async worker thread.

use crate::error::{AppError, AppResult};

/// bcrypt only hashes the first 72 bytes of its input
const MAX_PASSWORD_BYTES: usize = 72;

/// Check `password` against the stored bcrypt hash.
///
/// A stored value that is not a bcrypt hash never matches. That is a data
/// problem on the store side, so it is logged but reported to the caller as
/// an ordinary mismatch.
///
/// Passwords longer than bcrypt's 72-byte input never match: past that point
/// bcrypt would ignore the tail and accept a different password.
pub async fn verify(password: &str, stored_hash: &str) -> AppResult<bool> {
    if password.len() > MAX_PASSWORD_BYTES {
        tracing::debug!("submitted password exceeds bcrypt input limit");
        return Ok(false);
    }

    let password = password.to_owned();
    let stored_hash = stored_hash.to_owned();

    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
        .await
        .map_err(|e| AppError::Internal(format!("credential verification task failed: {e}")))?;

    match outcome {
        Ok(matched) => Ok(matched),
        Err(_) => {
            // The bcrypt error text can quote the stored value, so it is not logged
            tracing::warn!("stored credential is not a valid bcrypt hash");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn matching_password_verifies() {
        let hash = bcrypt::hash("secret", 4).unwrap();
        assert!(verify("secret", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn wrong_password_does_not_verify() {
        let hash = bcrypt::hash("secret", 4).unwrap();
        assert!(!verify("Secret", &hash).await.unwrap());
        assert!(!verify("", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn plaintext_stored_value_never_matches() {
        assert!(!verify("secret", "secret").await.unwrap());
    }

    #[tokio::test]
    async fn suffix_past_bcrypt_limit_does_not_match() {
        let stored = "A".repeat(72);
        let hash = bcrypt::hash(&stored, 4).unwrap();

        assert!(verify(&stored, &hash).await.unwrap());

        let longer = format!("{stored}totally-different-suffix");
        assert!(!verify(&longer, &hash).await.unwrap());
    }
}
