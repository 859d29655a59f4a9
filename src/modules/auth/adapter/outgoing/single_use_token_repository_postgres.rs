use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::single_use_tokens::{
    ActiveModel as TokenActiveModel, Column as TokenColumn, Entity as TokenEntity,
};
use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::modules::auth::application::domain::entities::{TokenKind, UserId};
use crate::modules::auth::application::domain::single_use_token::{
    check_consumable, TokenRejection,
};
use crate::modules::auth::application::ports::outgoing::{
    ConsumeTokenError, IssueTokenData, SingleUseTokenRepository, TokenEffect,
    TokenRepositoryError,
};

#[derive(Clone, Debug)]
pub struct SingleUseTokenRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SingleUseTokenRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn apply_effect(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        effect: TokenEffect,
        now: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let update = UserEntity::update_many()
            .col_expr(UserColumn::UpdatedAt, Expr::value(now.fixed_offset()));

        let update = match effect {
            TokenEffect::MarkEmailVerified => {
                update.col_expr(UserColumn::EmailVerifiedAt, Expr::value(now.fixed_offset()))
            }
            TokenEffect::SetPasswordHash(hash) => {
                update.col_expr(UserColumn::PasswordHash, Expr::value(hash))
            }
        };

        update
            .filter(UserColumn::Id.eq(user_id))
            .exec(txn)
            .await?;

        Ok(())
    }
}

fn db_error(e: DbErr) -> ConsumeTokenError {
    ConsumeTokenError::DatabaseError(e.to_string())
}

#[async_trait]
impl SingleUseTokenRepository for SingleUseTokenRepositoryPostgres {
    async fn issue(&self, data: IssueTokenData) -> Result<(), TokenRepositoryError> {
        TokenActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id.value()),
            kind: Set(data.kind.as_str().to_string()),
            token_hash: Set(data.token_hash),
            expires_at: Set(data.expires_at.fixed_offset()),
            used_at: Set(None),
            created_at: NotSet,
        }
        .insert(&*self.db)
        .await
        .map_err(|e| TokenRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn consume(
        &self,
        kind: TokenKind,
        token_hash: &str,
        now: DateTime<Utc>,
        effect: TokenEffect,
    ) -> Result<UserId, ConsumeTokenError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        // Dropping `txn` on any early return rolls it back.
        let token = TokenEntity::find()
            .filter(TokenColumn::TokenHash.eq(token_hash))
            .filter(TokenColumn::Kind.eq(kind.as_str()))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or(ConsumeTokenError::NotFound)?;

        check_consumable(
            token.used_at.map(|t| t.with_timezone(&Utc)),
            token.expires_at.with_timezone(&Utc),
            now,
        )
        .map_err(|r| match r {
            TokenRejection::AlreadyUsed => ConsumeTokenError::AlreadyUsed,
            TokenRejection::Expired => ConsumeTokenError::Expired,
        })?;

        TokenEntity::update_many()
            .col_expr(TokenColumn::UsedAt, Expr::value(now.fixed_offset()))
            .filter(TokenColumn::Id.eq(token.id))
            .exec(&txn)
            .await
            .map_err(db_error)?;

        Self::apply_effect(&txn, token.user_id, effect, now)
            .await
            .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        Ok(UserId::from(token.user_id))
    }
}
