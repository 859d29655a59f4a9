use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::str::FromStr;
use std::sync::Arc;
use tracing::warn;

use super::sea_orm_entity::user_roles::{Column as RoleColumn, Entity as RoleEntity};
use crate::modules::auth::application::domain::entities::{Role, UserId};
use crate::modules::auth::application::ports::outgoing::{RoleQuery, RoleQueryError};

#[derive(Clone, Debug)]
pub struct RoleQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RoleQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleQuery for RoleQueryPostgres {
    async fn roles_for_user(&self, user_id: UserId) -> Result<Vec<Role>, RoleQueryError> {
        let rows = RoleEntity::find()
            .filter(RoleColumn::UserId.eq(user_id.value()))
            .all(&*self.db)
            .await
            .map_err(|e| RoleQueryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .filter_map(|row| match Role::from_str(&row.role) {
                Ok(role) => Some(role),
                Err(_) => {
                    warn!(user_id = %user_id, role = %row.role, "Ignoring unknown role");
                    None
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::sea_orm_entity::user_roles::Model as RoleModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    fn row(user_id: Uuid, role: &str) -> RoleModel {
        RoleModel {
            id: Uuid::new_v4(),
            user_id,
            role: role.to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_roles_are_parsed() {
        let user_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(user_id, "ADMIN"), row(user_id, "SUPERHERO")]])
            .into_connection();

        let roles = RoleQueryPostgres::new(Arc::new(db))
            .roles_for_user(user_id.into())
            .await
            .unwrap();

        assert_eq!(roles, vec![Role::Admin]);
    }

    #[tokio::test]
    async fn test_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("boom".to_string())])
            .into_connection();

        let result = RoleQueryPostgres::new(Arc::new(db))
            .roles_for_user(Uuid::new_v4().into())
            .await;

        assert!(matches!(result, Err(RoleQueryError::DatabaseError(_))));
    }
}
