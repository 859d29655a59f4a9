//! In-memory stand-ins for the auth ports, shared by the auth service tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, TokenKind, User, UserId};
use crate::modules::auth::application::domain::single_use_token::{
    check_consumable, TokenRejection,
};
use crate::modules::auth::application::ports::outgoing::{
    ConsumeTokenError, HashError, IssueTokenData, NewUser, PasswordHasher, RoleQuery,
    RoleQueryError, SingleUseTokenRepository, TokenEffect, TokenRepositoryError, UserQuery,
    UserQueryError, UserRepository, UserRepositoryError,
};
use crate::modules::email::application::ports::outgoing::{
    UserEmailNotificationError, UserEmailNotifier,
};

pub fn sample_user(email: &str) -> User {
    let now = Utc::now();
    User {
        id: UserId::from(Uuid::new_v4()),
        email: email.to_string(),
        password_hash: PlainHasher::hash_of("correct-horse"),
        display_name: "Jane".to_string(),
        email_verified_at: None,
        mfa_secret: None,
        mfa_enabled: false,
        last_login_at: None,
        created_at: now,
        updated_at: now,
    }
}

// ── Users ────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<HashMap<Uuid, User>>>,
    failing: Arc<Mutex<bool>>,
}

impl InMemoryUsers {
    pub fn with_user(user: User) -> Self {
        let users = Self::default();
        users.insert(user);
        users
    }

    pub fn insert(&self, user: User) {
        self.users.lock().unwrap().insert(user.id.value(), user);
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.lock().unwrap().get(&id.value()).cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn fail_all(&self) {
        *self.failing.lock().unwrap() = true;
    }

    fn is_failing(&self) -> bool {
        *self.failing.lock().unwrap()
    }

    fn update<F>(&self, id: UserId, f: F) -> Result<(), UserRepositoryError>
    where
        F: FnOnce(&mut User),
    {
        if self.is_failing() {
            return Err(UserRepositoryError::DatabaseError("db down".into()));
        }
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&id.value())
            .ok_or(UserRepositoryError::NotFound)?;
        f(user);
        Ok(())
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        if self.is_failing() {
            return Err(UserQueryError::DatabaseError("db down".into()));
        }
        Ok(self.get(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        if self.is_failing() {
            return Err(UserQueryError::DatabaseError("db down".into()));
        }
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: NewUser) -> Result<User, UserRepositoryError> {
        if self.is_failing() {
            return Err(UserRepositoryError::DatabaseError("db down".into()));
        }
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == data.email) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let user = User {
            id: UserId::from(Uuid::new_v4()),
            email: data.email,
            password_hash: data.password_hash,
            display_name: data.display_name,
            email_verified_at: None,
            mfa_secret: None,
            mfa_enabled: false,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id.value(), user.clone());
        Ok(user)
    }

    async fn record_login(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.update(user_id, |u| u.last_login_at = Some(at))
    }

    async fn store_mfa_secret(
        &self,
        user_id: UserId,
        secret: String,
    ) -> Result<(), UserRepositoryError> {
        self.update(user_id, |u| u.mfa_secret = Some(secret))
    }

    async fn set_mfa_enabled(
        &self,
        user_id: UserId,
        enabled: bool,
    ) -> Result<(), UserRepositoryError> {
        self.update(user_id, |u| {
            u.mfa_enabled = enabled;
            if !enabled {
                u.mfa_secret = None;
            }
        })
    }
}

// ── Single-use tokens ────────────────────────────────────

#[derive(Clone, Debug)]
pub struct StoredToken {
    pub user_id: UserId,
    pub kind: TokenKind,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub used_at: Option<DateTime<Utc>>,
}

/// Applies token effects to the shared user store, mirroring the transactional adapter.
#[derive(Clone)]
pub struct InMemoryTokens {
    users: InMemoryUsers,
    tokens: Arc<Mutex<Vec<StoredToken>>>,
}

impl InMemoryTokens {
    pub fn new(users: InMemoryUsers) -> Self {
        Self {
            users,
            tokens: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn all(&self) -> Vec<StoredToken> {
        self.tokens.lock().unwrap().clone()
    }

    pub fn expire_all(&self, at: DateTime<Utc>) {
        for token in self.tokens.lock().unwrap().iter_mut() {
            token.expires_at = at;
        }
    }
}

#[async_trait]
impl SingleUseTokenRepository for InMemoryTokens {
    async fn issue(&self, data: IssueTokenData) -> Result<(), TokenRepositoryError> {
        self.tokens.lock().unwrap().push(StoredToken {
            user_id: data.user_id,
            kind: data.kind,
            token_hash: data.token_hash,
            expires_at: data.expires_at,
            used_at: None,
        });
        Ok(())
    }

    async fn consume(
        &self,
        kind: TokenKind,
        token_hash: &str,
        now: DateTime<Utc>,
        effect: TokenEffect,
    ) -> Result<UserId, ConsumeTokenError> {
        let mut tokens = self.tokens.lock().unwrap();
        let token = tokens
            .iter_mut()
            .find(|t| t.kind == kind && t.token_hash == token_hash)
            .ok_or(ConsumeTokenError::NotFound)?;

        check_consumable(token.used_at, token.expires_at, now).map_err(|r| match r {
            TokenRejection::AlreadyUsed => ConsumeTokenError::AlreadyUsed,
            TokenRejection::Expired => ConsumeTokenError::Expired,
        })?;

        let user_id = token.user_id;
        let applied = match effect {
            TokenEffect::MarkEmailVerified => self
                .users
                .update(user_id, |u| u.email_verified_at = Some(now)),
            TokenEffect::SetPasswordHash(hash) => {
                self.users.update(user_id, |u| u.password_hash = hash)
            }
        };
        applied.map_err(|e| ConsumeTokenError::DatabaseError(e.to_string()))?;

        token.used_at = Some(now);
        Ok(user_id)
    }
}

// ── Roles ────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryRoles {
    roles: Arc<Mutex<HashMap<Uuid, Vec<Role>>>>,
}

impl InMemoryRoles {
    pub fn grant(&self, user_id: UserId, role: Role) {
        self.roles
            .lock()
            .unwrap()
            .entry(user_id.value())
            .or_default()
            .push(role);
    }

    pub fn revoke_all(&self, user_id: UserId) {
        self.roles.lock().unwrap().remove(&user_id.value());
    }
}

#[async_trait]
impl RoleQuery for InMemoryRoles {
    async fn roles_for_user(&self, user_id: UserId) -> Result<Vec<Role>, RoleQueryError> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .get(&user_id.value())
            .cloned()
            .unwrap_or_default())
    }
}

// ── Hashing ──────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct PlainHasher;

impl PlainHasher {
    pub fn hash_of(password: &str) -> String {
        format!("plain${}", password)
    }
}

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(Self::hash_of(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(Self::hash_of(password) == hash)
    }
}

// ── Email ────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SentEmail {
    Verification { to: String, token: String },
    PasswordReset { to: String, token: String },
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    failing: Arc<Mutex<bool>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        let notifier = Self::default();
        *notifier.failing.lock().unwrap() = true;
        notifier
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_token(&self) -> Option<String> {
        self.sent().last().map(|e| match e {
            SentEmail::Verification { token, .. } | SentEmail::PasswordReset { token, .. } => {
                token.clone()
            }
        })
    }

    fn record(&self, email: SentEmail) -> Result<(), UserEmailNotificationError> {
        if *self.failing.lock().unwrap() {
            return Err(UserEmailNotificationError::EmailSendingFailed(
                "smtp unavailable".into(),
            ));
        }
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

#[async_trait]
impl UserEmailNotifier for RecordingNotifier {
    async fn send_verification_email(
        &self,
        to: &str,
        _display_name: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.record(SentEmail::Verification {
            to: to.to_string(),
            token: token.to_string(),
        })
    }

    async fn send_password_reset_email(
        &self,
        to: &str,
        _display_name: &str,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        self.record(SentEmail::PasswordReset {
            to: to.to_string(),
            token: token.to_string(),
        })
    }
}
