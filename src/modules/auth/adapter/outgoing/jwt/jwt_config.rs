use crate::config::{parse_or, required, ConfigError};

const MIN_SECRET_LEN: usize = 32;
const MAX_ACCESS_EXPIRY: i64 = 86400;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // Expiration in seconds
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("access_token_expiry", &self.access_token_expiry)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_lookup<F>(get: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = required(get, "JWT_SECRET")?;

        // HS256 needs at least 32 bytes of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {} characters", MIN_SECRET_LEN),
            });
        }

        let access_token_expiry: i64 = parse_or(get, "JWT_ACCESS_EXPIRY", 3600)?;
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer: get("JWT_ISSUER").unwrap_or_else(|| "AIPIX".to_string()),
            access_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    #[test]
    fn test_short_secret_is_rejected() {
        let vars = hashmap! { "JWT_SECRET" => "too-short" };
        let get = |key: &str| vars.get(key).map(|v| v.to_string());

        let err = JwtConfig::from_lookup(&get).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "JWT_SECRET", .. }));
    }

    #[test]
    fn test_expiry_bounds() {
        let vars = hashmap! {
            "JWT_SECRET" => "0123456789abcdef0123456789abcdef",
            "JWT_ACCESS_EXPIRY" => "0",
        };
        let get = |key: &str| vars.get(key).map(|v| v.to_string());

        let err = JwtConfig::from_lookup(&get).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "JWT_ACCESS_EXPIRY", .. }));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let vars = hashmap! { "JWT_SECRET" => "0123456789abcdef0123456789abcdef" };
        let get = |key: &str| vars.get(key).map(|v| v.to_string());

        let config = JwtConfig::from_lookup(&get).unwrap();
        let output = format!("{:?}", config);

        assert!(!output.contains("0123456789abcdef"));
        assert_eq!(config.issuer, "AIPIX");
    }
}
