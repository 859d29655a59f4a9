use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::auth::application::domain::credentials::normalize_email;
use crate::modules::auth::application::domain::entities::UserProfile;
use crate::modules::auth::application::domain::totp;
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthSession, LoginCommand, LoginError, LoginUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, TokenProvider, UserQuery, UserRepository,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct LoginUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q, R> LoginUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> LoginUserUseCase for LoginUserService<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, LoginError> {
        // Unknown and malformed addresses get the same answer as a wrong password.
        let email = normalize_email(&command.email).map_err(|_| LoginError::InvalidCredentials)?;

        let user = self
            .user_query
            .find_by_email(&email)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let password_ok = self
            .password_hasher
            .verify_password(&command.password, &user.password_hash)
            .await
            .map_err(|e| LoginError::Internal(e.to_string()))?;
        if !password_ok {
            return Err(LoginError::InvalidCredentials);
        }

        if user.mfa_enabled {
            let code = command
                .mfa_code
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .ok_or(LoginError::MfaRequired)?;

            let secret = user.mfa_secret.as_deref().ok_or_else(|| {
                warn!(user_id = %user.id, "MFA enabled without a stored secret");
                LoginError::MfaMisconfigured
            })?;

            match totp::verify(secret, code, Utc::now().timestamp()) {
                Ok(true) => {}
                Ok(false) => return Err(LoginError::MfaInvalid),
                Err(e) => {
                    warn!(user_id = %user.id, error = %e, "Stored MFA secret is unreadable");
                    return Err(LoginError::MfaMisconfigured);
                }
            }
        }

        let token = self
            .token_provider
            .issue_session(user.id.value(), &user.email)
            .map_err(|e| LoginError::Internal(e.to_string()))?;

        if let Err(e) = self.user_repository.record_login(user.id, Utc::now()).await {
            warn!(user_id = %user.id, error = %e, "Failed to record last login");
        }

        info!(user_id = %user.id, "User logged in");

        Ok(AuthSession {
            token,
            user: UserProfile::from(&user),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::User;
    use crate::tests::support::auth_fakes::{sample_user, InMemoryUsers, PlainHasher};
    use crate::tests::support::auth_helper::test_token_provider;

    fn service(users: &InMemoryUsers) -> LoginUserService<InMemoryUsers, InMemoryUsers> {
        LoginUserService::new(
            users.clone(),
            users.clone(),
            Arc::new(PlainHasher),
            test_token_provider(),
        )
    }

    fn login(email: &str, password: &str, mfa_code: Option<&str>) -> LoginCommand {
        LoginCommand {
            email: email.to_string(),
            password: password.to_string(),
            mfa_code: mfa_code.map(str::to_string),
        }
    }

    fn mfa_user() -> User {
        let mut user = sample_user("jane@example.com");
        user.mfa_secret = Some(totp::generate_secret());
        user.mfa_enabled = true;
        user
    }

    #[tokio::test]
    async fn test_login_success_records_last_login() {
        let user = sample_user("jane@example.com");
        let users = InMemoryUsers::with_user(user.clone());

        let session = service(&users)
            .execute(login("JANE@example.com ", "correct-horse", None))
            .await
            .unwrap();

        assert_eq!(session.user.id, user.id.value());
        assert!(!session.token.is_empty());
        assert!(users.get(user.id).unwrap().last_login_at.is_some());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let users = InMemoryUsers::with_user(sample_user("jane@example.com"));
        let svc = service(&users);

        let wrong_password = svc
            .execute(login("jane@example.com", "incorrect", None))
            .await;
        let unknown = svc
            .execute(login("ghost@example.com", "correct-horse", None))
            .await;
        let malformed = svc.execute(login("ghost", "correct-horse", None)).await;

        assert_eq!(wrong_password, Err(LoginError::InvalidCredentials));
        assert_eq!(unknown, Err(LoginError::InvalidCredentials));
        assert_eq!(malformed, Err(LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_mfa_user_without_code_gets_mfa_required() {
        let users = InMemoryUsers::with_user(mfa_user());

        let result = service(&users)
            .execute(login("jane@example.com", "correct-horse", None))
            .await;
        assert_eq!(result, Err(LoginError::MfaRequired));

        let blank = service(&users)
            .execute(login("jane@example.com", "correct-horse", Some("  ")))
            .await;
        assert_eq!(blank, Err(LoginError::MfaRequired));
    }

    #[tokio::test]
    async fn test_mfa_user_with_valid_code_logs_in() {
        let user = mfa_user();
        let secret = user.mfa_secret.clone().unwrap();
        let users = InMemoryUsers::with_user(user);

        let code = totp::code_at(&secret, Utc::now().timestamp()).unwrap();
        let result = service(&users)
            .execute(login("jane@example.com", "correct-horse", Some(&code)))
            .await;

        assert!(result.is_ok());
        assert!(result.unwrap().user.mfa_enabled);
    }

    #[tokio::test]
    async fn test_mfa_user_with_wrong_code_is_rejected() {
        let user = mfa_user();
        let secret = user.mfa_secret.clone().unwrap();
        let users = InMemoryUsers::with_user(user);

        // Well outside the accepted window.
        let stale = totp::code_at(&secret, Utc::now().timestamp() - 3600).unwrap();
        let result = service(&users)
            .execute(login("jane@example.com", "correct-horse", Some(&stale)))
            .await;
        let garbage = service(&users)
            .execute(login("jane@example.com", "correct-horse", Some("12ab56")))
            .await;

        assert_eq!(result, Err(LoginError::MfaInvalid));
        assert_eq!(garbage, Err(LoginError::MfaInvalid));
    }

    #[tokio::test]
    async fn test_mfa_enabled_without_secret_is_misconfigured() {
        let mut user = sample_user("jane@example.com");
        user.mfa_enabled = true;
        let users = InMemoryUsers::with_user(user);

        let result = service(&users)
            .execute(login("jane@example.com", "correct-horse", Some("123456")))
            .await;

        assert_eq!(result, Err(LoginError::MfaMisconfigured));
    }

    #[tokio::test]
    async fn test_wrong_password_is_checked_before_mfa() {
        let users = InMemoryUsers::with_user(mfa_user());

        let result = service(&users)
            .execute(login("jane@example.com", "incorrect", None))
            .await;

        assert_eq!(result, Err(LoginError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_repository_failure_is_mapped() {
        let users = InMemoryUsers::default();
        users.fail_all();

        let result = service(&users)
            .execute(login("jane@example.com", "correct-horse", None))
            .await;

        assert!(matches!(result, Err(LoginError::RepositoryError(_))));
    }
}
