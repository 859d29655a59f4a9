use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

/// Lifetime of every single-use token, whatever its kind.
pub const TOKEN_TTL_SECONDS: i64 = 3600;

const RAW_TOKEN_LEN: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    AlreadyUsed,
    Expired,
}

pub fn generate_raw_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RAW_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// SHA-256 hex digest. Only the digest is persisted.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn expiry_from(issued_at: DateTime<Utc>) -> DateTime<Utc> {
    issued_at + Duration::seconds(TOKEN_TTL_SECONDS)
}

/// A used token stays rejected even after it would have expired anyway.
pub fn check_consumable(
    used_at: Option<DateTime<Utc>>,
    expires_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), TokenRejection> {
    if used_at.is_some() {
        return Err(TokenRejection::AlreadyUsed);
    }

    if now >= expires_at {
        return Err(TokenRejection::Expired);
    }

    Ok(())
}
