use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::{
    AuthSessionResponse, EmailRequest, LoginRequestDto, MessageResponse, MfaCodeRequest,
    MfaSetupResponse, RegisterUserRequest, ResetPasswordRequest, UserProfileResponse,
    VerifyEmailRequest,
};
use crate::modules::billing::adapter::incoming::web::routes::{
    CreatePlanRequest, CreditUsageResponse, PlanResponse, SubscribeRequest, SubscriptionResponse,
    UpdatePlanRequest, UsageResponse,
};
use crate::modules::enhancement::adapter::incoming::web::routes::{
    CompleteJobRequest, CreateJobsRequest, JobResponse,
};
use crate::modules::listing::adapter::incoming::web::routes::{
    AttachMediaRequest, CreateListingRequest, CreateListingWithMediaRequest,
    ListingDetailResponse, ListingMediaResponse, ListingResponse, MarketplaceDetailResponse,
    MarketplaceListingResponse, ProjectSummaryResponse, UpdateListingRequest,
};
use crate::modules::project::adapter::incoming::web::routes::{
    AdCopyDeletedResponse, AdCopyResponse, AddImageRequest, CreateAdCopyRequest,
    CreateProjectRequest, ImageResponse, ImageVersionResponse, ProjectDetailResponse,
    ProjectResponse, UpdateAdCopyRequest, UploadImageRequest, UploadImagesRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "AIPIX API",
        version = "1.0.0",
        description = "Photo enhancement and listing marketplace for real-estate agents",
        contact(
            name = "API Support",
            email = "support@aipix.local"
        )
    ),
    paths(
        // Auth
        crate::modules::auth::adapter::incoming::web::routes::register_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::verify_email_handler,
        crate::modules::auth::adapter::incoming::web::routes::resend_verification_handler,
        crate::modules::auth::adapter::incoming::web::routes::forgot_password_handler,
        crate::modules::auth::adapter::incoming::web::routes::reset_password_handler,
        crate::modules::auth::adapter::incoming::web::routes::me_handler,
        crate::modules::auth::adapter::incoming::web::routes::mfa_setup_handler,
        crate::modules::auth::adapter::incoming::web::routes::mfa_enable_handler,
        crate::modules::auth::adapter::incoming::web::routes::mfa_disable_handler,

        // Billing
        crate::modules::billing::adapter::incoming::web::routes::list_plans_handler,
        crate::modules::billing::adapter::incoming::web::routes::create_plan_handler,
        crate::modules::billing::adapter::incoming::web::routes::update_plan_handler,
        crate::modules::billing::adapter::incoming::web::routes::my_subscription_handler,
        crate::modules::billing::adapter::incoming::web::routes::subscribe_handler,
        crate::modules::billing::adapter::incoming::web::routes::my_usage_handler,

        // Projects
        crate::modules::project::adapter::incoming::web::routes::list_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_handler,
        crate::modules::project::adapter::incoming::web::routes::list_ad_copies_handler,
        crate::modules::project::adapter::incoming::web::routes::create_ad_copy_handler,
        crate::modules::project::adapter::incoming::web::routes::update_ad_copy_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_ad_copy_handler,
        crate::modules::project::adapter::incoming::web::routes::list_images_handler,
        crate::modules::project::adapter::incoming::web::routes::add_image_handler,
        crate::modules::project::adapter::incoming::web::routes::upload_image_handler,
        crate::modules::project::adapter::incoming::web::routes::upload_images_handler,

        // Enhancement
        crate::modules::enhancement::adapter::incoming::web::routes::create_jobs_handler,
        crate::modules::enhancement::adapter::incoming::web::routes::list_jobs_handler,
        crate::modules::enhancement::adapter::incoming::web::routes::complete_job_handler,

        // Listings
        crate::modules::listing::adapter::incoming::web::routes::list_my_listings_handler,
        crate::modules::listing::adapter::incoming::web::routes::create_listing_handler,
        crate::modules::listing::adapter::incoming::web::routes::create_listing_with_media_handler,
        crate::modules::listing::adapter::incoming::web::routes::get_my_listing_handler,
        crate::modules::listing::adapter::incoming::web::routes::update_listing_handler,
        crate::modules::listing::adapter::incoming::web::routes::attach_media_handler,

        // Marketplace
        crate::modules::listing::adapter::incoming::web::routes::list_marketplace_handler,
        crate::modules::listing::adapter::incoming::web::routes::get_marketplace_listing_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterUserRequest,
            LoginRequestDto,
            AuthSessionResponse,
            UserProfileResponse,
            VerifyEmailRequest,
            EmailRequest,
            MessageResponse,
            ResetPasswordRequest,
            MfaCodeRequest,
            MfaSetupResponse,

            // Billing DTOs
            PlanResponse,
            CreatePlanRequest,
            UpdatePlanRequest,
            SubscriptionResponse,
            SubscribeRequest,
            UsageResponse,
            CreditUsageResponse,

            // Project DTOs
            ProjectResponse,
            ProjectDetailResponse,
            CreateProjectRequest,
            AdCopyResponse,
            CreateAdCopyRequest,
            UpdateAdCopyRequest,
            AdCopyDeletedResponse,
            ImageResponse,
            ImageVersionResponse,
            AddImageRequest,
            UploadImageRequest,
            UploadImagesRequest,

            // Enhancement DTOs
            JobResponse,
            CreateJobsRequest,
            CompleteJobRequest,

            // Listing DTOs
            ListingResponse,
            ListingMediaResponse,
            ListingDetailResponse,
            MarketplaceListingResponse,
            MarketplaceDetailResponse,
            ProjectSummaryResponse,
            CreateListingRequest,
            CreateListingWithMediaRequest,
            AttachMediaRequest,
            UpdateListingRequest
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login, email verification, password reset and MFA"),
        (name = "billing", description = "Plans, subscriptions and credit usage"),
        (name = "projects", description = "Projects, images, uploads and ad copies"),
        (name = "enhancement", description = "AI enhancement jobs"),
        (name = "listings", description = "Agent-owned property listings"),
        (name = "marketplace", description = "Public listing search"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
