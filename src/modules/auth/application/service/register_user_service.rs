use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::modules::auth::application::domain::credentials::{
    normalize_display_name, normalize_email, validate_password,
};
use crate::modules::auth::application::domain::entities::{TokenKind, UserProfile};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthSession, RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, SingleUseTokenRepository, TokenProvider, UserQuery, UserRepository,
    UserRepositoryError,
};
use crate::modules::auth::application::service::SingleUseTokenIssuer;
use crate::modules::email::application::ports::outgoing::UserEmailNotifier;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct RegisterUserService<Q, R, T>
where
    Q: UserQuery,
    R: UserRepository,
    T: SingleUseTokenRepository,
{
    user_query: Q,
    user_repository: R,
    tokens: SingleUseTokenIssuer<T>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
    notifier: Arc<dyn UserEmailNotifier>,
}

impl<Q, R, T> RegisterUserService<Q, R, T>
where
    Q: UserQuery,
    R: UserRepository,
    T: SingleUseTokenRepository,
{
    pub fn new(
        user_query: Q,
        user_repository: R,
        token_repository: T,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
        notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            user_query,
            user_repository,
            tokens: SingleUseTokenIssuer::new(token_repository),
            password_hasher,
            token_provider,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R, T> RegisterUserUseCase for RegisterUserService<Q, R, T>
where
    Q: UserQuery,
    R: UserRepository,
    T: SingleUseTokenRepository,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<AuthSession, RegisterUserError> {
        let email = normalize_email(&command.email)
            .map_err(|e| RegisterUserError::InvalidInput(e.to_string()))?;
        validate_password(&command.password)
            .map_err(|e| RegisterUserError::InvalidInput(e.to_string()))?;
        let display_name = normalize_display_name(&command.display_name)
            .map_err(|e| RegisterUserError::InvalidInput(e.to_string()))?;

        let existing = self
            .user_query
            .find_by_email(&email)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(RegisterUserError::EmailTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| RegisterUserError::Internal(e.to_string()))?;

        // The unique index still decides races between two registrations.
        let user = self
            .user_repository
            .create_user(NewUser {
                email,
                password_hash,
                display_name,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => RegisterUserError::EmailTaken,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let raw_token = self
            .tokens
            .issue(user.id, TokenKind::EmailVerification)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if let Err(e) = self
            .notifier
            .send_verification_email(&user.email, &user.display_name, &raw_token)
            .await
        {
            error!(user_id = %user.id, error = %e, "Verification email could not be sent");
            return Err(RegisterUserError::EmailDeliveryFailed(e.to_string()));
        }

        let token = self
            .token_provider
            .issue_session(user.id.value(), &user.email)
            .map_err(|e| RegisterUserError::Internal(e.to_string()))?;

        info!(user_id = %user.id, "User registered");

        Ok(AuthSession {
            token,
            user: UserProfile::from(&user),
        })
    }
}
