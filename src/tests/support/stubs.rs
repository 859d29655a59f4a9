//! Use cases that panic when called. The app state builder defaults every
//! slot to one of these so a route test only wires what it exercises.

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Role, UserId, UserProfile};
use crate::modules::auth::application::ports::incoming::use_cases::{
    AuthSession, DisableMfaError, DisableMfaUseCase, EnableMfaError, EnableMfaUseCase,
    FetchProfileError, FetchProfileUseCase, LoginCommand, LoginError, LoginUserUseCase, MfaSetup,
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase, RequestPasswordResetError,
    RequestPasswordResetUseCase, RequireRoleError, RequireRoleUseCase, ResendVerificationError,
    ResendVerificationUseCase, ResetPasswordCommand, ResetPasswordError, ResetPasswordUseCase,
    SetupMfaError, SetupMfaUseCase, VerifyEmailError, VerifyEmailUseCase,
};
use crate::modules::billing::application::domain::entities::{
    Plan, SubscriptionWithPlan, UsageSummary,
};
use crate::modules::billing::application::ports::incoming::use_cases::{
    CreatePlanError, CreatePlanUseCase, GetSubscriptionError, GetSubscriptionUseCase,
    ListPlansError, ListPlansUseCase, SubscribeError, SubscribeUseCase, UpdatePlanError,
    UpdatePlanUseCase, UsageSummaryError, UsageSummaryUseCase,
};
use crate::modules::billing::application::ports::outgoing::{NewPlan, PlanPatch};
use crate::modules::enhancement::application::domain::entities::EnhancementJob;
use crate::modules::enhancement::application::ports::incoming::use_cases::{
    CompleteJobError, CompleteJobUseCase, CreateJobsCommand, CreateJobsError, CreateJobsUseCase,
    ListJobsError, ListJobsUseCase,
};
use crate::modules::listing::application::domain::entities::{
    Listing, ListingWithMedia, MarketplaceDetail, MarketplaceFilter,
};
use crate::modules::listing::application::ports::incoming::use_cases::{
    AttachMediaCommand, AttachMediaError, AttachMediaUseCase, CreateListingCommand,
    CreateListingError, CreateListingUseCase, CreateListingWithMediaCommand,
    CreateListingWithMediaError, CreateListingWithMediaUseCase, GetMarketplaceListingError,
    GetMarketplaceListingUseCase, GetMyListingError, GetMyListingUseCase, ListMarketplaceError,
    ListMarketplaceUseCase, ListMyListingsError, ListMyListingsUseCase, UpdateListingError,
    UpdateListingUseCase,
};
use crate::modules::listing::application::ports::outgoing::ListingPatch;
use crate::modules::project::application::domain::entities::{
    AdCopy, ImageWithVersions, Project, ProjectDetail,
};
use crate::modules::project::application::domain::upload::UploadFile;
use crate::modules::project::application::ports::incoming::use_cases::{
    AddImageCommand, AddImageError, AddImageUseCase, CreateAdCopyCommand, CreateAdCopyError,
    CreateAdCopyUseCase, CreateProjectCommand, CreateProjectError, CreateProjectUseCase,
    DeleteAdCopyError, DeleteAdCopyUseCase, GetProjectError, GetProjectUseCase,
    ListAdCopiesError, ListAdCopiesUseCase, ListImagesError, ListImagesUseCase,
    ListProjectsError, ListProjectsUseCase, UpdateAdCopyError, UpdateAdCopyUseCase,
    UploadImagesError, UploadImagesUseCase,
};
use crate::modules::project::application::ports::outgoing::AdCopyPatch;

// ---------------------------------------------------------------------------
// auth
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl RegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyEmailUseCase;

#[async_trait]
impl VerifyEmailUseCase for StubVerifyEmailUseCase {
    async fn execute(&self, _token: &str) -> Result<(), VerifyEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResendVerificationUseCase;

#[async_trait]
impl ResendVerificationUseCase for StubResendVerificationUseCase {
    async fn execute(&self, _email: &str) -> Result<(), ResendVerificationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRequestPasswordResetUseCase;

#[async_trait]
impl RequestPasswordResetUseCase for StubRequestPasswordResetUseCase {
    async fn execute(&self, _email: &str) -> Result<(), RequestPasswordResetError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubResetPasswordUseCase;

#[async_trait]
impl ResetPasswordUseCase for StubResetPasswordUseCase {
    async fn execute(&self, _command: ResetPasswordCommand) -> Result<(), ResetPasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSetupMfaUseCase;

#[async_trait]
impl SetupMfaUseCase for StubSetupMfaUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<MfaSetup, SetupMfaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubEnableMfaUseCase;

#[async_trait]
impl EnableMfaUseCase for StubEnableMfaUseCase {
    async fn execute(&self, _user_id: UserId, _code: &str) -> Result<(), EnableMfaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDisableMfaUseCase;

#[async_trait]
impl DisableMfaUseCase for StubDisableMfaUseCase {
    async fn execute(&self, _user_id: UserId, _code: &str) -> Result<(), DisableMfaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchProfileUseCase;

#[async_trait]
impl FetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchProfileError> {
        unimplemented!("Not used in this test")
    }
}

/// Denies every role check.
#[derive(Default, Clone)]
pub struct StubRequireRoleUseCase;

#[async_trait]
impl RequireRoleUseCase for StubRequireRoleUseCase {
    async fn execute(&self, _user_id: UserId, _role: Role) -> Result<(), RequireRoleError> {
        Err(RequireRoleError::Forbidden)
    }
}

// ---------------------------------------------------------------------------
// billing
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubListPlansUseCase;

#[async_trait]
impl ListPlansUseCase for StubListPlansUseCase {
    async fn execute(&self) -> Result<Vec<Plan>, ListPlansError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreatePlanUseCase;

#[async_trait]
impl CreatePlanUseCase for StubCreatePlanUseCase {
    async fn execute(&self, _plan: NewPlan) -> Result<Plan, CreatePlanError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdatePlanUseCase;

#[async_trait]
impl UpdatePlanUseCase for StubUpdatePlanUseCase {
    async fn execute(&self, _plan_id: Uuid, _patch: PlanPatch) -> Result<Plan, UpdatePlanError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSubscriptionUseCase;

#[async_trait]
impl GetSubscriptionUseCase for StubGetSubscriptionUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
    ) -> Result<Option<SubscriptionWithPlan>, GetSubscriptionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubscribeUseCase;

#[async_trait]
impl SubscribeUseCase for StubSubscribeUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _plan_id: Uuid,
    ) -> Result<SubscriptionWithPlan, SubscribeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUsageSummaryUseCase;

#[async_trait]
impl UsageSummaryUseCase for StubUsageSummaryUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UsageSummary, UsageSummaryError> {
        unimplemented!("Not used in this test")
    }
}

// ---------------------------------------------------------------------------
// projects
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _command: CreateProjectCommand) -> Result<Project, CreateProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListProjectsUseCase;

#[async_trait]
impl ListProjectsUseCase for StubListProjectsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<Project>, ListProjectsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectUseCase;

#[async_trait]
impl GetProjectUseCase for StubGetProjectUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _project_id: Uuid,
    ) -> Result<ProjectDetail, GetProjectError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListAdCopiesUseCase;

#[async_trait]
impl ListAdCopiesUseCase for StubListAdCopiesUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _project_id: Uuid,
    ) -> Result<Vec<AdCopy>, ListAdCopiesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateAdCopyUseCase;

#[async_trait]
impl CreateAdCopyUseCase for StubCreateAdCopyUseCase {
    async fn execute(&self, _command: CreateAdCopyCommand) -> Result<AdCopy, CreateAdCopyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateAdCopyUseCase;

#[async_trait]
impl UpdateAdCopyUseCase for StubUpdateAdCopyUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _project_id: Uuid,
        _ad_copy_id: Uuid,
        _patch: AdCopyPatch,
    ) -> Result<AdCopy, UpdateAdCopyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAdCopyUseCase;

#[async_trait]
impl DeleteAdCopyUseCase for StubDeleteAdCopyUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _project_id: Uuid,
        _ad_copy_id: Uuid,
    ) -> Result<(), DeleteAdCopyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAddImageUseCase;

#[async_trait]
impl AddImageUseCase for StubAddImageUseCase {
    async fn execute(&self, _command: AddImageCommand) -> Result<ImageWithVersions, AddImageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListImagesUseCase;

#[async_trait]
impl ListImagesUseCase for StubListImagesUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _project_id: Uuid,
    ) -> Result<Vec<ImageWithVersions>, ListImagesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUploadImagesUseCase;

#[async_trait]
impl UploadImagesUseCase for StubUploadImagesUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _project_id: Uuid,
        _files: Vec<UploadFile>,
    ) -> Result<Vec<ImageWithVersions>, UploadImagesError> {
        unimplemented!("Not used in this test")
    }
}

// ---------------------------------------------------------------------------
// enhancement
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubCreateJobsUseCase;

#[async_trait]
impl CreateJobsUseCase for StubCreateJobsUseCase {
    async fn execute(
        &self,
        _command: CreateJobsCommand,
    ) -> Result<Vec<EnhancementJob>, CreateJobsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListJobsUseCase;

#[async_trait]
impl ListJobsUseCase for StubListJobsUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _project_id: Uuid,
    ) -> Result<Vec<EnhancementJob>, ListJobsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCompleteJobUseCase;

#[async_trait]
impl CompleteJobUseCase for StubCompleteJobUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _job_id: Uuid,
        _enhanced_url: &str,
    ) -> Result<EnhancementJob, CompleteJobError> {
        unimplemented!("Not used in this test")
    }
}

// ---------------------------------------------------------------------------
// listings
// ---------------------------------------------------------------------------

#[derive(Default, Clone)]
pub struct StubCreateListingUseCase;

#[async_trait]
impl CreateListingUseCase for StubCreateListingUseCase {
    async fn execute(&self, _command: CreateListingCommand) -> Result<Listing, CreateListingError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCreateListingWithMediaUseCase;

#[async_trait]
impl CreateListingWithMediaUseCase for StubCreateListingWithMediaUseCase {
    async fn execute(
        &self,
        _command: CreateListingWithMediaCommand,
    ) -> Result<ListingWithMedia, CreateListingWithMediaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListMyListingsUseCase;

#[async_trait]
impl ListMyListingsUseCase for StubListMyListingsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<Listing>, ListMyListingsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetMyListingUseCase;

#[async_trait]
impl GetMyListingUseCase for StubGetMyListingUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _listing_id: Uuid,
    ) -> Result<ListingWithMedia, GetMyListingError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateListingUseCase;

#[async_trait]
impl UpdateListingUseCase for StubUpdateListingUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _listing_id: Uuid,
        _patch: ListingPatch,
    ) -> Result<Listing, UpdateListingError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAttachMediaUseCase;

#[async_trait]
impl AttachMediaUseCase for StubAttachMediaUseCase {
    async fn execute(
        &self,
        _command: AttachMediaCommand,
    ) -> Result<ListingWithMedia, AttachMediaError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListMarketplaceUseCase;

#[async_trait]
impl ListMarketplaceUseCase for StubListMarketplaceUseCase {
    async fn execute(
        &self,
        _filter: MarketplaceFilter,
    ) -> Result<Vec<ListingWithMedia>, ListMarketplaceError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetMarketplaceListingUseCase;

#[async_trait]
impl GetMarketplaceListingUseCase for StubGetMarketplaceListingUseCase {
    async fn execute(
        &self,
        _listing_id: Uuid,
    ) -> Result<MarketplaceDetail, GetMarketplaceListingError> {
        unimplemented!("Not used in this test")
    }
}
