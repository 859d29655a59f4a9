use actix_web::web;
use std::sync::Arc;

use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::incoming::use_cases::{
    DisableMfaUseCase, EnableMfaUseCase, FetchProfileUseCase, LoginUserUseCase,
    RegisterUserUseCase, RequestPasswordResetUseCase, RequireRoleUseCase,
    ResendVerificationUseCase, ResetPasswordUseCase, SetupMfaUseCase, VerifyEmailUseCase,
};
use crate::modules::billing::application::billing_use_cases::BillingUseCases;
use crate::modules::billing::application::ports::incoming::use_cases::{
    CreatePlanUseCase, GetSubscriptionUseCase, ListPlansUseCase, SubscribeUseCase,
    UpdatePlanUseCase, UsageSummaryUseCase,
};
use crate::modules::enhancement::application::enhancement_use_cases::EnhancementUseCases;
use crate::modules::enhancement::application::ports::incoming::use_cases::{
    CompleteJobUseCase, CreateJobsUseCase, ListJobsUseCase,
};
use crate::modules::listing::application::listing_use_cases::ListingUseCases;
use crate::modules::listing::application::ports::incoming::use_cases::{
    AttachMediaUseCase, CreateListingUseCase, CreateListingWithMediaUseCase,
    GetMarketplaceListingUseCase, GetMyListingUseCase, ListMarketplaceUseCase,
    ListMyListingsUseCase, UpdateListingUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    AddImageUseCase, CreateAdCopyUseCase, CreateProjectUseCase, DeleteAdCopyUseCase,
    GetProjectUseCase, ListAdCopiesUseCase, ListImagesUseCase, ListProjectsUseCase,
    UpdateAdCopyUseCase, UploadImagesUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` whose use cases panic unless a test swaps them in.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    billing: BillingUseCases,
    project: ProjectUseCases,
    enhancement: EnhancementUseCases,
    listing: ListingUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                register: Arc::new(StubRegisterUserUseCase),
                login: Arc::new(StubLoginUserUseCase),
                verify_email: Arc::new(StubVerifyEmailUseCase),
                resend_verification: Arc::new(StubResendVerificationUseCase),
                request_password_reset: Arc::new(StubRequestPasswordResetUseCase),
                reset_password: Arc::new(StubResetPasswordUseCase),
                setup_mfa: Arc::new(StubSetupMfaUseCase),
                enable_mfa: Arc::new(StubEnableMfaUseCase),
                disable_mfa: Arc::new(StubDisableMfaUseCase),
                fetch_profile: Arc::new(StubFetchProfileUseCase),
                require_role: Arc::new(StubRequireRoleUseCase),
            },
            billing: BillingUseCases {
                list_plans: Arc::new(StubListPlansUseCase),
                create_plan: Arc::new(StubCreatePlanUseCase),
                update_plan: Arc::new(StubUpdatePlanUseCase),
                get_subscription: Arc::new(StubGetSubscriptionUseCase),
                subscribe: Arc::new(StubSubscribeUseCase),
                usage_summary: Arc::new(StubUsageSummaryUseCase),
            },
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase),
                list: Arc::new(StubListProjectsUseCase),
                get: Arc::new(StubGetProjectUseCase),
                add_image: Arc::new(StubAddImageUseCase),
                list_images: Arc::new(StubListImagesUseCase),
                upload_images: Arc::new(StubUploadImagesUseCase),
                list_ad_copies: Arc::new(StubListAdCopiesUseCase),
                create_ad_copy: Arc::new(StubCreateAdCopyUseCase),
                update_ad_copy: Arc::new(StubUpdateAdCopyUseCase),
                delete_ad_copy: Arc::new(StubDeleteAdCopyUseCase),
            },
            enhancement: EnhancementUseCases {
                create_jobs: Arc::new(StubCreateJobsUseCase),
                list_jobs: Arc::new(StubListJobsUseCase),
                complete_job: Arc::new(StubCompleteJobUseCase),
            },
            listing: ListingUseCases {
                create: Arc::new(StubCreateListingUseCase),
                create_with_media: Arc::new(StubCreateListingWithMediaUseCase),
                list_mine: Arc::new(StubListMyListingsUseCase),
                get_mine: Arc::new(StubGetMyListingUseCase),
                update: Arc::new(StubUpdateListingUseCase),
                attach_media: Arc::new(StubAttachMediaUseCase),
                list_marketplace: Arc::new(StubListMarketplaceUseCase),
                get_marketplace: Arc::new(StubGetMarketplaceListingUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // auth

    pub fn with_register(mut self, uc: impl RegisterUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.register = Arc::new(uc);
        self
    }

    pub fn with_login(mut self, uc: impl LoginUserUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_verify_email(
        mut self,
        uc: impl VerifyEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.verify_email = Arc::new(uc);
        self
    }

    pub fn with_resend_verification(
        mut self,
        uc: impl ResendVerificationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.resend_verification = Arc::new(uc);
        self
    }

    pub fn with_request_password_reset(
        mut self,
        uc: impl RequestPasswordResetUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.request_password_reset = Arc::new(uc);
        self
    }

    pub fn with_reset_password(
        mut self,
        uc: impl ResetPasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.reset_password = Arc::new(uc);
        self
    }

    pub fn with_setup_mfa(mut self, uc: impl SetupMfaUseCase + Send + Sync + 'static) -> Self {
        self.auth.setup_mfa = Arc::new(uc);
        self
    }

    pub fn with_enable_mfa(mut self, uc: impl EnableMfaUseCase + Send + Sync + 'static) -> Self {
        self.auth.enable_mfa = Arc::new(uc);
        self
    }

    pub fn with_disable_mfa(mut self, uc: impl DisableMfaUseCase + Send + Sync + 'static) -> Self {
        self.auth.disable_mfa = Arc::new(uc);
        self
    }

    pub fn with_fetch_profile(
        mut self,
        uc: impl FetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.fetch_profile = Arc::new(uc);
        self
    }

    pub fn with_require_role(
        mut self,
        uc: impl RequireRoleUseCase + Send + Sync + 'static,
    ) -> Self {
        self.auth.require_role = Arc::new(uc);
        self
    }

    // billing

    pub fn with_list_plans(mut self, uc: impl ListPlansUseCase + Send + Sync + 'static) -> Self {
        self.billing.list_plans = Arc::new(uc);
        self
    }

    pub fn with_create_plan(mut self, uc: impl CreatePlanUseCase + Send + Sync + 'static) -> Self {
        self.billing.create_plan = Arc::new(uc);
        self
    }

    pub fn with_update_plan(mut self, uc: impl UpdatePlanUseCase + Send + Sync + 'static) -> Self {
        self.billing.update_plan = Arc::new(uc);
        self
    }

    pub fn with_get_subscription(
        mut self,
        uc: impl GetSubscriptionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.billing.get_subscription = Arc::new(uc);
        self
    }

    pub fn with_subscribe(mut self, uc: impl SubscribeUseCase + Send + Sync + 'static) -> Self {
        self.billing.subscribe = Arc::new(uc);
        self
    }

    pub fn with_usage_summary(
        mut self,
        uc: impl UsageSummaryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.billing.usage_summary = Arc::new(uc);
        self
    }

    // projects

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_list_projects(
        mut self,
        uc: impl ListProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.list = Arc::new(uc);
        self
    }

    pub fn with_get_project(mut self, uc: impl GetProjectUseCase + Send + Sync + 'static) -> Self {
        self.project.get = Arc::new(uc);
        self
    }

    pub fn with_add_image(mut self, uc: impl AddImageUseCase + Send + Sync + 'static) -> Self {
        self.project.add_image = Arc::new(uc);
        self
    }

    pub fn with_list_images(mut self, uc: impl ListImagesUseCase + Send + Sync + 'static) -> Self {
        self.project.list_images = Arc::new(uc);
        self
    }

    pub fn with_upload_images(
        mut self,
        uc: impl UploadImagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.upload_images = Arc::new(uc);
        self
    }

    pub fn with_list_ad_copies(
        mut self,
        uc: impl ListAdCopiesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.list_ad_copies = Arc::new(uc);
        self
    }

    pub fn with_create_ad_copy(
        mut self,
        uc: impl CreateAdCopyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create_ad_copy = Arc::new(uc);
        self
    }

    pub fn with_update_ad_copy(
        mut self,
        uc: impl UpdateAdCopyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.update_ad_copy = Arc::new(uc);
        self
    }

    pub fn with_delete_ad_copy(
        mut self,
        uc: impl DeleteAdCopyUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.delete_ad_copy = Arc::new(uc);
        self
    }

    // enhancement

    pub fn with_create_jobs(mut self, uc: impl CreateJobsUseCase + Send + Sync + 'static) -> Self {
        self.enhancement.create_jobs = Arc::new(uc);
        self
    }

    pub fn with_list_jobs(mut self, uc: impl ListJobsUseCase + Send + Sync + 'static) -> Self {
        self.enhancement.list_jobs = Arc::new(uc);
        self
    }

    pub fn with_complete_job(
        mut self,
        uc: impl CompleteJobUseCase + Send + Sync + 'static,
    ) -> Self {
        self.enhancement.complete_job = Arc::new(uc);
        self
    }

    // listings

    pub fn with_create_listing(
        mut self,
        uc: impl CreateListingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.listing.create = Arc::new(uc);
        self
    }

    pub fn with_create_listing_with_media(
        mut self,
        uc: impl CreateListingWithMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.listing.create_with_media = Arc::new(uc);
        self
    }

    pub fn with_list_my_listings(
        mut self,
        uc: impl ListMyListingsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.listing.list_mine = Arc::new(uc);
        self
    }

    pub fn with_get_my_listing(
        mut self,
        uc: impl GetMyListingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.listing.get_mine = Arc::new(uc);
        self
    }

    pub fn with_update_listing(
        mut self,
        uc: impl UpdateListingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.listing.update = Arc::new(uc);
        self
    }

    pub fn with_attach_media(
        mut self,
        uc: impl AttachMediaUseCase + Send + Sync + 'static,
    ) -> Self {
        self.listing.attach_media = Arc::new(uc);
        self
    }

    pub fn with_list_marketplace(
        mut self,
        uc: impl ListMarketplaceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.listing.list_marketplace = Arc::new(uc);
        self
    }

    pub fn with_get_marketplace_listing(
        mut self,
        uc: impl GetMarketplaceListingUseCase + Send + Sync + 'static,
    ) -> Self {
        self.listing.get_marketplace = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            billing: self.billing,
            enhancement: self.enhancement,
            project: self.project,
            listing: self.listing,
        })
    }
}
