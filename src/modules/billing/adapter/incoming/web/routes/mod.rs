mod plans;
mod subscription;

use actix_web::web;

pub use plans::{
    create_plan_handler, list_plans_handler, update_plan_handler, CreatePlanRequest,
    PlanResponse, UpdatePlanRequest,
};
pub use subscription::{
    my_subscription_handler, my_usage_handler, subscribe_handler, CreditUsageResponse,
    SubscribeRequest, SubscriptionResponse, UsageResponse,
};

pub use plans::{__path_create_plan_handler, __path_list_plans_handler, __path_update_plan_handler};
pub use subscription::{__path_my_subscription_handler, __path_my_usage_handler, __path_subscribe_handler};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_plans_handler)
        .service(create_plan_handler)
        .service(update_plan_handler)
        .service(my_subscription_handler)
        .service(subscribe_handler)
        .service(my_usage_handler);
}
