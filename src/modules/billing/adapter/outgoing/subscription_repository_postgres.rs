use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::credit_usages::{
    Column as CreditUsageColumn, Entity as CreditUsageEntity, UsageTotal,
};
use super::sea_orm_entity::plans::Entity as PlanEntity;
use super::sea_orm_entity::subscriptions::{
    ActiveModel as SubscriptionActiveModel, Column as SubscriptionColumn,
    Entity as SubscriptionEntity,
};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::billing::application::domain::entities::{
    Plan, Subscription, SubscriptionWithPlan,
};
use crate::modules::billing::application::ports::outgoing::{
    SubscriptionRepository, SubscriptionRepositoryError,
};

/// `SUM(credits_used)` for one subscription, zero for an empty ledger.
///
/// Generic over the connection so admission control can run it inside its own transaction.
pub async fn sum_credits_used<C>(conn: &C, subscription_id: Uuid) -> Result<i64, DbErr>
where
    C: ConnectionTrait,
{
    let total = CreditUsageEntity::find()
        .select_only()
        .column_as(Expr::col(CreditUsageColumn::CreditsUsed).sum(), "total")
        .filter(CreditUsageColumn::SubscriptionId.eq(subscription_id))
        .into_model::<UsageTotal>()
        .one(conn)
        .await?;

    Ok(total.and_then(|t| t.total).unwrap_or(0))
}

#[derive(Clone, Debug)]
pub struct SubscriptionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubscriptionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> SubscriptionRepositoryError {
    SubscriptionRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SubscriptionRepository for SubscriptionRepositoryPostgres {
    async fn find_active(
        &self,
        user_id: UserId,
    ) -> Result<Option<SubscriptionWithPlan>, SubscriptionRepositoryError> {
        let row = SubscriptionEntity::find()
            .filter(SubscriptionColumn::UserId.eq(user_id.value()))
            .filter(SubscriptionColumn::IsActive.eq(true))
            .find_also_related(PlanEntity)
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        match row {
            None => Ok(None),
            Some((subscription, Some(plan))) => Ok(Some(SubscriptionWithPlan {
                subscription: Subscription::from(subscription),
                plan: Plan::from(plan),
            })),
            Some((subscription, None)) => Err(SubscriptionRepositoryError::DatabaseError(
                format!("subscription {} references a missing plan", subscription.id),
            )),
        }
    }

    async fn activate(
        &self,
        user_id: UserId,
        plan_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Subscription, SubscriptionRepositoryError> {
        let txn = self.db.begin().await.map_err(db_error)?;

        PlanEntity::find_by_id(plan_id)
            .one(&txn)
            .await
            .map_err(db_error)?
            .ok_or(SubscriptionRepositoryError::PlanNotFound)?;

        SubscriptionEntity::update_many()
            .col_expr(SubscriptionColumn::IsActive, Expr::value(false))
            .col_expr(SubscriptionColumn::EndDate, Expr::value(now.fixed_offset()))
            .filter(SubscriptionColumn::UserId.eq(user_id.value()))
            .filter(SubscriptionColumn::IsActive.eq(true))
            .exec(&txn)
            .await
            .map_err(db_error)?;

        let inserted = SubscriptionActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.value()),
            plan_id: Set(plan_id),
            start_date: Set(now.fixed_offset()),
            end_date: Set(None),
            is_active: Set(true),
            created_at: Set(now.fixed_offset()),
        }
        .insert(&txn)
        .await
        .map_err(db_error)?;

        txn.commit().await.map_err(db_error)?;

        Ok(Subscription::from(inserted))
    }

    async fn used_credits(
        &self,
        subscription_id: Uuid,
    ) -> Result<i64, SubscriptionRepositoryError> {
        sum_credits_used(&*self.db, subscription_id)
            .await
            .map_err(db_error)
    }
}
