use async_trait::async_trait;
use tracing::warn;

use crate::modules::auth::application::domain::entities::{Role, UserId};
use crate::modules::auth::application::ports::incoming::use_cases::{
    RequireRoleError, RequireRoleUseCase,
};
use crate::modules::auth::application::ports::outgoing::RoleQuery;

pub struct RequireRoleService<R>
where
    R: RoleQuery,
{
    role_query: R,
}

impl<R> RequireRoleService<R>
where
    R: RoleQuery,
{
    pub fn new(role_query: R) -> Self {
        Self { role_query }
    }
}

#[async_trait]
impl<R> RequireRoleUseCase for RequireRoleService<R>
where
    R: RoleQuery,
{
    async fn execute(&self, user_id: UserId, role: Role) -> Result<(), RequireRoleError> {
        let roles = self
            .role_query
            .roles_for_user(user_id)
            .await
            .map_err(|e| RequireRoleError::RepositoryError(e.to_string()))?;

        if roles.contains(&role) {
            Ok(())
        } else {
            warn!(user_id = %user_id, role = role.as_str(), "Role check failed");
            Err(RequireRoleError::Forbidden)
        }
    }
}
