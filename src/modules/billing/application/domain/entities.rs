use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub monthly_price_usd: f64,
    pub max_ai_credits: i32,
    pub max_storage_mb: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: Uuid,
    #[serde(skip)]
    pub user_id: UserId,
    pub plan_id: Uuid,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// A subscription joined with the plan it grants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionWithPlan {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub plan: Plan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSummary {
    pub subscription_id: Uuid,
    pub plan: Plan,
    pub used_credits: i64,
    pub remaining_credits: i64,
}

/// The only reason credits are ever drawn.
pub const ENHANCEMENT_JOB_REASON: &str = "ENHANCEMENT_JOB";

/// Credits left on a plan. Negative when usage overshot a later plan change.
pub fn remaining_credits(max_ai_credits: i32, used_credits: i64) -> i64 {
    i64::from(max_ai_credits) - used_credits
}

impl UsageSummary {
    pub fn new(subscription_id: Uuid, plan: Plan, used_credits: i64) -> Self {
        let remaining = remaining_credits(plan.max_ai_credits, used_credits).max(0);
        Self {
            subscription_id,
            plan,
            used_credits,
            remaining_credits: remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(max_ai_credits: i32) -> Plan {
        Plan {
            id: Uuid::new_v4(),
            name: "Pro".to_string(),
            description: None,
            monthly_price_usd: 49.0,
            max_ai_credits,
            max_storage_mb: 10_000,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_remaining_is_raw_difference() {
        assert_eq!(remaining_credits(100, 30), 70);
        assert_eq!(remaining_credits(10, 12), -2);
    }

    #[test]
    fn test_summary_floors_remaining_at_zero() {
        let summary = UsageSummary::new(Uuid::new_v4(), plan(10), 12);

        assert_eq!(summary.used_credits, 12);
        assert_eq!(summary.remaining_credits, 0);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = UsageSummary::new(Uuid::new_v4(), plan(100), 40);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["usedCredits"], 40);
        assert_eq!(json["remainingCredits"], 60);
        assert_eq!(json["plan"]["maxAiCredits"], 100);
    }
}
