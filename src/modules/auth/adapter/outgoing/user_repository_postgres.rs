use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::outgoing::{
    NewUser, UserRepository, UserRepositoryError,
};
use crate::shared::db::is_unique_violation;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Single-statement update; zero affected rows means the user is gone.
    async fn update_columns(
        &self,
        user_id: UserId,
        columns: Vec<(UserColumn, SimpleExpr)>,
    ) -> Result<(), UserRepositoryError> {
        let mut update = UserEntity::update_many()
            .col_expr(UserColumn::UpdatedAt, Expr::value(Utc::now().fixed_offset()));
        for (column, value) in columns {
            update = update.col_expr(column, value);
        }

        let result = update
            .filter(UserColumn::Id.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            display_name: Set(data.display_name),
            email_verified_at: Set(None),
            mfa_secret: Set(None),
            mfa_enabled: Set(false),
            last_login_at: Set(None),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::EmailAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(User::from(inserted))
    }

    async fn record_login(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.update_columns(
            user_id,
            vec![(UserColumn::LastLoginAt, Expr::value(at.fixed_offset()))],
        )
        .await
    }

    async fn store_mfa_secret(
        &self,
        user_id: UserId,
        secret: String,
    ) -> Result<(), UserRepositoryError> {
        self.update_columns(user_id, vec![(UserColumn::MfaSecret, Expr::value(secret))])
            .await
    }

    async fn set_mfa_enabled(
        &self,
        user_id: UserId,
        enabled: bool,
    ) -> Result<(), UserRepositoryError> {
        let mut columns = vec![(UserColumn::MfaEnabled, Expr::value(enabled))];
        if !enabled {
            columns.push((UserColumn::MfaSecret, Expr::value(Option::<String>::None)));
        }

        self.update_columns(user_id, columns).await
    }
}
