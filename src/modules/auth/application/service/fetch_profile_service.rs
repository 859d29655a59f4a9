use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{UserId, UserProfile};
use crate::modules::auth::application::ports::incoming::use_cases::{
    FetchProfileError, FetchProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::UserQuery;

pub struct FetchProfileService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> FetchProfileService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> FetchProfileUseCase for FetchProfileService<Q>
where
    Q: UserQuery,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        self.user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchProfileError::RepositoryError(e.to_string()))?
            .map(|user| UserProfile::from(&user))
            .ok_or(FetchProfileError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_fakes::{sample_user, InMemoryUsers};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_profile_hides_secrets() {
        let mut user = sample_user("jane@example.com");
        user.mfa_secret = Some("SECRET".to_string());
        let users = InMemoryUsers::with_user(user.clone());

        let profile = FetchProfileService::new(users).execute(user.id).await.unwrap();

        assert_eq!(profile.email, "jane@example.com");
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("SECRET"));
        assert!(!json.contains("passwordHash"));
    }

    #[tokio::test]
    async fn test_missing_user() {
        let result = FetchProfileService::new(InMemoryUsers::default())
            .execute(UserId::from(Uuid::new_v4()))
            .await;

        assert_eq!(result, Err(FetchProfileError::UserNotFound));
    }
}
