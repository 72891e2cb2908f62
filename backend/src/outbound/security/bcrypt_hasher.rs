//! bcrypt-backed `PasswordHasher`.
//!
//! bcrypt is CPU bound, so both operations run on tokio's blocking pool.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Work factor used for new digests.
pub const BCRYPT_COST: u32 = 10;

/// [`PasswordHasher`] using bcrypt.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self { cost: BCRYPT_COST }
    }
}

impl BcryptPasswordHasher {
    /// Hasher with a custom work factor. Tests use the bcrypt minimum to stay
    /// fast.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHashError> {
        let plaintext = zeroize::Zeroizing::new(plaintext.to_owned());
        let cost = self.cost;
        let digest = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext.as_str(), cost))
            .await
            .map_err(|err| PasswordHashError::hashing(err.to_string()))?
            .map_err(|err| PasswordHashError::hashing(err.to_string()))?;
        PasswordHash::new(digest).map_err(|err| PasswordHashError::hashing(err.to_string()))
    }

    async fn verify(&self, plaintext: &str, digest: &PasswordHash) -> bool {
        let plaintext = zeroize::Zeroizing::new(plaintext.to_owned());
        let digest = digest.as_ref().to_owned();
        match tokio::task::spawn_blocking(move || bcrypt::verify(plaintext.as_str(), &digest)).await
        {
            Ok(Ok(matches)) => matches,
            Ok(Err(error)) => {
                debug!(%error, "stored password digest is malformed");
                false
            }
            Err(error) => {
                debug!(%error, "password verification task failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::with_cost(4)
    }

    #[rstest]
    #[tokio::test]
    async fn verify_accepts_the_original_password(hasher: BcryptPasswordHasher) {
        let digest = hasher.hash("abc123").await.expect("hash");
        assert!(hasher.verify("abc123", &digest).await);
        assert!(!hasher.verify("abc124", &digest).await);
    }

    #[rstest]
    #[tokio::test]
    async fn digests_are_salted(hasher: BcryptPasswordHasher) {
        let first = hasher.hash("abc123").await.expect("hash");
        let second = hasher.hash("abc123").await.expect("hash");
        assert_ne!(first, second);
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_digest_never_matches(hasher: BcryptPasswordHasher) {
        let digest = PasswordHash::new("not-a-bcrypt-digest").expect("non-empty");
        assert!(!hasher.verify("abc123", &digest).await);
    }

    #[rstest]
    fn default_cost_is_ten() {
        assert_eq!(BcryptPasswordHasher::default().cost, 10);
    }
}
