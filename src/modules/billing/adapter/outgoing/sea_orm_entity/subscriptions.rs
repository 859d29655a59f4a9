use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::billing::application::domain::entities::Subscription;

/// At most one row per user has `is_active`; a partial unique index holds that in the schema.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "subscriptions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan_id: Uuid,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: Option<DateTimeWithTimeZone>,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plans::Entity",
        from = "Column::PlanId",
        to = "super::plans::Column::Id"
    )]
    Plan,
    #[sea_orm(has_many = "super::credit_usages::Entity")]
    CreditUsages,
}

impl Related<super::plans::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plan.def()
    }
}

impl Related<super::credit_usages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreditUsages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Subscription {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id.into(),
            plan_id: model.plan_id,
            start_date: model.start_date.with_timezone(&chrono::Utc),
            end_date: model.end_date.map(|t| t.with_timezone(&chrono::Utc)),
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}
