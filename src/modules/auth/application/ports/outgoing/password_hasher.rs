use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,

    /// The stored value is not a parseable PHC string.
    #[error("Stored password hash is unreadable")]
    VerifyFailed,

    #[error("Hashing worker did not finish")]
    TaskFailed,
}

/// Slow password hashing. Implementations keep the work off the async executor.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Returns a self-describing PHC string (algorithm, parameters, salt and digest).
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` is a wrong password. `Err` means the check itself could not run.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
