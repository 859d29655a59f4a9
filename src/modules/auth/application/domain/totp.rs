//! Time-based one-time passwords (RFC 6238, HMAC-SHA1, 6 digits, 30 s step).

use base32::Alphabet;
use rand::RngCore;
use regex::Regex;
use std::sync::OnceLock;
use totp_rs::{Algorithm, TOTP};

pub const STEP_SECONDS: u64 = 30;
pub const DIGITS: usize = 6;
/// Steps accepted on either side of the current one.
pub const WINDOW: u8 = 1;

const SECRET_BYTES: usize = 20;
const ISSUER: &str = "AIPIX";
const SECRET_ALPHABET: Alphabet = Alphabet::Rfc4648 { padding: false };

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TotpError {
    #[error("stored MFA secret is not valid base32")]
    InvalidSecret,
}

fn code_format() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{6}$").ok()).as_ref()
}

pub fn generate_secret() -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    base32::encode(SECRET_ALPHABET, &bytes)
}

pub fn otpauth_url(email: &str, secret: &str) -> String {
    let label = format!("{} ({})", ISSUER, email);
    format!(
        "otpauth://totp/{}?secret={}&issuer={}",
        urlencoding::encode(&label),
        secret,
        ISSUER
    )
}

/// SHA1 generator for a base32 secret; totp-rs rejects keys under 128 bits.
fn generator(secret: &str) -> Result<TOTP, TotpError> {
    let normalized = secret.trim().trim_end_matches('=').to_ascii_uppercase();
    let key = base32::decode(SECRET_ALPHABET, &normalized).ok_or(TotpError::InvalidSecret)?;

    TOTP::new(Algorithm::SHA1, DIGITS, WINDOW, STEP_SECONDS, key)
        .map_err(|_| TotpError::InvalidSecret)
}

fn timestamp(unix_time: i64) -> u64 {
    u64::try_from(unix_time).unwrap_or(0)
}

/// Code for the step containing `unix_time`.
pub fn code_at(secret: &str, unix_time: i64) -> Result<String, TotpError> {
    Ok(generator(secret)?.generate(timestamp(unix_time)))
}

/// Malformed codes are simply rejected; only an unusable secret is an error.
pub fn verify(secret: &str, code: &str, unix_time: i64) -> Result<bool, TotpError> {
    let totp = generator(secret)?;
    let code = code.trim();

    if !code_format().is_some_and(|re| re.is_match(code)) {
        return Ok(false);
    }

    Ok(totp.check(code, timestamp(unix_time)))
}
