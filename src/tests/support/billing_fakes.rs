//! In-memory billing ports.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::billing::application::domain::entities::{
    Plan, Subscription, SubscriptionWithPlan,
};
use crate::modules::billing::application::ports::outgoing::{
    NewPlan, PlanPatch, PlanRepository, PlanRepositoryError, SubscriptionRepository,
    SubscriptionRepositoryError,
};

pub fn sample_plan(name: &str, monthly_price_usd: f64, max_ai_credits: i32) -> Plan {
    let now = Utc::now();
    Plan {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        monthly_price_usd,
        max_ai_credits,
        max_storage_mb: 5_000,
        created_at: now,
        updated_at: now,
    }
}

// ── Plans ────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryPlans {
    plans: Arc<Mutex<HashMap<Uuid, Plan>>>,
}

impl InMemoryPlans {
    pub fn with_plans(plans: Vec<Plan>) -> Self {
        let store = Self::default();
        for plan in plans {
            store.insert(plan);
        }
        store
    }

    pub fn insert(&self, plan: Plan) {
        self.plans.lock().unwrap().insert(plan.id, plan);
    }

    pub fn get(&self, id: Uuid) -> Option<Plan> {
        self.plans.lock().unwrap().get(&id).cloned()
    }

    fn name_taken(&self, name: &str, except: Option<Uuid>) -> bool {
        self.plans
            .lock()
            .unwrap()
            .values()
            .any(|p| p.name == name && Some(p.id) != except)
    }
}

#[async_trait]
impl PlanRepository for InMemoryPlans {
    async fn list_plans(&self) -> Result<Vec<Plan>, PlanRepositoryError> {
        let mut plans: Vec<Plan> = self.plans.lock().unwrap().values().cloned().collect();
        plans.sort_by(|a, b| a.monthly_price_usd.total_cmp(&b.monthly_price_usd));
        Ok(plans)
    }

    async fn find_plan(&self, plan_id: Uuid) -> Result<Option<Plan>, PlanRepositoryError> {
        Ok(self.get(plan_id))
    }

    async fn create_plan(&self, plan: NewPlan) -> Result<Plan, PlanRepositoryError> {
        if self.name_taken(&plan.name, None) {
            return Err(PlanRepositoryError::NameTaken);
        }
        let now = Utc::now();
        let created = Plan {
            id: Uuid::new_v4(),
            name: plan.name,
            description: plan.description,
            monthly_price_usd: plan.monthly_price_usd,
            max_ai_credits: plan.max_ai_credits,
            max_storage_mb: plan.max_storage_mb,
            created_at: now,
            updated_at: now,
        };
        self.insert(created.clone());
        Ok(created)
    }

    async fn update_plan(
        &self,
        plan_id: Uuid,
        patch: PlanPatch,
    ) -> Result<Plan, PlanRepositoryError> {
        if let Some(name) = &patch.name {
            if self.name_taken(name, Some(plan_id)) {
                return Err(PlanRepositoryError::NameTaken);
            }
        }

        let mut plans = self.plans.lock().unwrap();
        let plan = plans.get_mut(&plan_id).ok_or(PlanRepositoryError::NotFound)?;

        if let Some(name) = patch.name {
            plan.name = name;
        }
        if let Some(description) = patch.description.into_update() {
            plan.description = description;
        }
        if let Some(price) = patch.monthly_price_usd {
            plan.monthly_price_usd = price;
        }
        if let Some(credits) = patch.max_ai_credits {
            plan.max_ai_credits = credits;
        }
        if let Some(storage) = patch.max_storage_mb {
            plan.max_storage_mb = storage;
        }
        plan.updated_at = Utc::now();

        Ok(plan.clone())
    }
}

// ── Subscriptions ────────────────────────────────────────

#[derive(Clone)]
pub struct InMemorySubscriptions {
    plans: InMemoryPlans,
    subscriptions: Arc<Mutex<Vec<Subscription>>>,
    usage: Arc<Mutex<HashMap<Uuid, i64>>>,
}

impl InMemorySubscriptions {
    pub fn new(plans: InMemoryPlans) -> Self {
        Self {
            plans,
            subscriptions: Arc::new(Mutex::new(Vec::new())),
            usage: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Starts an active subscription directly, bypassing `activate`.
    pub fn seed_active(&self, user_id: UserId, plan_id: Uuid) -> Subscription {
        let now = Utc::now();
        let sub = Subscription {
            id: Uuid::new_v4(),
            user_id,
            plan_id,
            start_date: now,
            end_date: None,
            is_active: true,
            created_at: now,
        };
        self.subscriptions.lock().unwrap().push(sub.clone());
        sub
    }

    pub fn record_usage(&self, subscription_id: Uuid, credits: i64) {
        *self.usage.lock().unwrap().entry(subscription_id).or_insert(0) += credits;
    }

    pub fn all_for(&self, user_id: UserId) -> Vec<Subscription> {
        self.subscriptions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptions {
    async fn find_active(
        &self,
        user_id: UserId,
    ) -> Result<Option<SubscriptionWithPlan>, SubscriptionRepositoryError> {
        let active = self
            .subscriptions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user_id == user_id && s.is_active)
            .cloned();

        Ok(active.and_then(|subscription| {
            self.plans.get(subscription.plan_id).map(|plan| SubscriptionWithPlan {
                subscription,
                plan,
            })
        }))
    }

    async fn activate(
        &self,
        user_id: UserId,
        plan_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Subscription, SubscriptionRepositoryError> {
        if self.plans.get(plan_id).is_none() {
            return Err(SubscriptionRepositoryError::PlanNotFound);
        }

        let mut subs = self.subscriptions.lock().unwrap();
        for sub in subs.iter_mut().filter(|s| s.user_id == user_id && s.is_active) {
            sub.is_active = false;
            sub.end_date = Some(now);
        }

        let created = Subscription {
            id: Uuid::new_v4(),
            user_id,
            plan_id,
            start_date: now,
            end_date: None,
            is_active: true,
            created_at: now,
        };
        subs.push(created.clone());
        Ok(created)
    }

    async fn used_credits(
        &self,
        subscription_id: Uuid,
    ) -> Result<i64, SubscriptionRepositoryError> {
        Ok(self
            .usage
            .lock()
            .unwrap()
            .get(&subscription_id)
            .copied()
            .unwrap_or(0))
    }
}
