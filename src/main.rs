pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::fmt;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::modules::auth::adapter::outgoing::security::argon2_hasher::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::{
    RoleQueryPostgres, SingleUseTokenRepositoryPostgres, UserQueryPostgres,
    UserRepositoryPostgres,
};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::modules::auth::application::service::{
    DisableMfaService, EnableMfaService, FetchProfileService, LoginUserService,
    RegisterUserService, RequestPasswordResetService, RequireRoleService,
    ResendVerificationService, ResetPasswordService, SetupMfaService, VerifyEmailService,
};
use crate::modules::billing::adapter::outgoing::{
    PlanRepositoryPostgres, SubscriptionRepositoryPostgres,
};
use crate::modules::billing::application::billing_use_cases::BillingUseCases;
use crate::modules::billing::application::service::{
    CreatePlanService, GetSubscriptionService, ListPlansService, SubscribeService,
    UpdatePlanService, UsageSummaryService,
};
use crate::modules::email::adapter::outgoing::SmtpEmailSender;
use crate::modules::email::application::ports::outgoing::{EmailSender, UserEmailNotifier};
use crate::modules::email::application::services::UserEmailService;
use crate::modules::enhancement::adapter::outgoing::EnhancementJobRepositoryPostgres;
use crate::modules::enhancement::application::enhancement_use_cases::EnhancementUseCases;
use crate::modules::enhancement::application::service::{
    CompleteJobService, CreateJobsService, ListJobsService,
};
use crate::modules::listing::adapter::outgoing::{ListingQueryPostgres, ListingRepositoryPostgres};
use crate::modules::listing::application::listing_use_cases::ListingUseCases;
use crate::modules::listing::application::service::{
    AttachMediaService, CreateListingService, CreateListingWithMediaService,
    GetMarketplaceListingService, GetMyListingService, ListMarketplaceService,
    ListMyListingsService, UpdateListingService,
};
use crate::modules::project::adapter::outgoing::{
    AdCopyRepositoryPostgres, ProjectQueryPostgres, ProjectRepositoryPostgres,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    AddImageService, CreateAdCopyService, CreateProjectService, DeleteAdCopyService,
    GetProjectService, ListAdCopiesService, ListImagesService, ListProjectsService,
    UpdateAdCopyService, UploadImagesService,
};
use crate::modules::storage::adapter::outgoing::S3ObjectStorage;
use crate::modules::storage::application::ports::outgoing::ObjectStorage;
use crate::shared::api::{custom_json_config, upload_form_config};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub billing: BillingUseCases,
    pub enhancement: EnhancementUseCases,
    pub project: ProjectUseCases,
    pub listing: ListingUseCases,
}

fn startup_error(context: &str, e: impl fmt::Display) -> io::Error {
    error!("{}: {}", context, e);
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, e))
}

#[cfg(not(tarpaulin_include))]
async fn connect_database(config: &AppConfig) -> io::Result<Arc<DatabaseConnection>> {
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    if config.run_migrations {
        info!("Running pending migrations");
        Migrator::up(&conn, None)
            .await
            .map_err(|e| startup_error("Migrations failed", e))?;
    }

    Ok(Arc::new(conn))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| startup_error("Invalid configuration", e))?;
    info!(environment = %config.environment, "Configuration loaded");

    let db_arc = connect_database(&config).await?;

    // Shared adapters
    let jwt_service = Arc::new(JwtTokenService::new(config.jwt.clone()));
    let token_provider: Arc<dyn TokenProvider + Send + Sync> = jwt_service.clone();

    let hasher: Arc<dyn PasswordHasher> = Arc::new(
        Argon2Hasher::from_config(&config.argon2)
            .map_err(|e| startup_error("Invalid Argon2 settings", e))?,
    );

    let smtp_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(
        SmtpEmailSender::from_config(&config.smtp)
            .map_err(|e| startup_error("Invalid SMTP settings", e))?,
    );
    let notifier: Arc<dyn UserEmailNotifier> =
        Arc::new(UserEmailService::new(smtp_sender, &config.app_base_url));

    let storage: Arc<dyn ObjectStorage> = Arc::new(S3ObjectStorage::new(&config.storage).await);
    if config.storage.bucket.is_none() && config.is_production() {
        warn!("Running in production without object storage");
    }

    // Auth
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let token_repo = SingleUseTokenRepositoryPostgres::new(Arc::clone(&db_arc));
    let role_query = RoleQueryPostgres::new(Arc::clone(&db_arc));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            token_repo.clone(),
            Arc::clone(&hasher),
            jwt_service.clone(),
            Arc::clone(&notifier),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&hasher),
            jwt_service.clone(),
        )),
        verify_email: Arc::new(VerifyEmailService::new(token_repo.clone())),
        resend_verification: Arc::new(ResendVerificationService::new(
            user_query.clone(),
            token_repo.clone(),
            Arc::clone(&notifier),
        )),
        request_password_reset: Arc::new(RequestPasswordResetService::new(
            user_query.clone(),
            token_repo.clone(),
            Arc::clone(&notifier),
        )),
        reset_password: Arc::new(ResetPasswordService::new(token_repo, Arc::clone(&hasher))),
        setup_mfa: Arc::new(SetupMfaService::new(user_query.clone(), user_repo.clone())),
        enable_mfa: Arc::new(EnableMfaService::new(user_query.clone(), user_repo.clone())),
        disable_mfa: Arc::new(DisableMfaService::new(user_query.clone(), user_repo)),
        fetch_profile: Arc::new(FetchProfileService::new(user_query)),
        require_role: Arc::new(RequireRoleService::new(role_query)),
    };

    // Billing
    let plan_repo = PlanRepositoryPostgres::new(Arc::clone(&db_arc));
    let subscription_repo = SubscriptionRepositoryPostgres::new(Arc::clone(&db_arc));

    let billing = BillingUseCases {
        list_plans: Arc::new(ListPlansService::new(plan_repo.clone())),
        create_plan: Arc::new(CreatePlanService::new(plan_repo.clone())),
        update_plan: Arc::new(UpdatePlanService::new(plan_repo.clone())),
        get_subscription: Arc::new(GetSubscriptionService::new(subscription_repo.clone())),
        subscribe: Arc::new(SubscribeService::new(plan_repo, subscription_repo.clone())),
        usage_summary: Arc::new(UsageSummaryService::new(subscription_repo)),
    };

    // Projects
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db_arc));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let ad_copy_repo = AdCopyRepositoryPostgres::new(Arc::clone(&db_arc));

    let project = ProjectUseCases {
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        list: Arc::new(ListProjectsService::new(project_query.clone())),
        get: Arc::new(GetProjectService::new(
            project_query.clone(),
            ad_copy_repo.clone(),
        )),
        add_image: Arc::new(AddImageService::new(
            project_query.clone(),
            project_repo.clone(),
        )),
        list_images: Arc::new(ListImagesService::new(project_query.clone())),
        upload_images: Arc::new(UploadImagesService::new(
            project_query.clone(),
            project_repo,
            storage,
        )),
        list_ad_copies: Arc::new(ListAdCopiesService::new(
            project_query.clone(),
            ad_copy_repo.clone(),
        )),
        create_ad_copy: Arc::new(CreateAdCopyService::new(
            project_query.clone(),
            ad_copy_repo.clone(),
        )),
        update_ad_copy: Arc::new(UpdateAdCopyService::new(
            project_query.clone(),
            ad_copy_repo.clone(),
        )),
        delete_ad_copy: Arc::new(DeleteAdCopyService::new(project_query.clone(), ad_copy_repo)),
    };

    // Enhancement
    let job_repo = EnhancementJobRepositoryPostgres::new(Arc::clone(&db_arc));

    let enhancement = EnhancementUseCases {
        create_jobs: Arc::new(CreateJobsService::new(project_query.clone(), job_repo.clone())),
        list_jobs: Arc::new(ListJobsService::new(project_query.clone(), job_repo.clone())),
        complete_job: Arc::new(CompleteJobService::new(job_repo)),
    };

    // Listings
    let listing_repo = ListingRepositoryPostgres::new(Arc::clone(&db_arc));
    let listing_query = ListingQueryPostgres::new(Arc::clone(&db_arc));

    let listing = ListingUseCases {
        create: Arc::new(CreateListingService::new(
            project_query.clone(),
            listing_repo.clone(),
        )),
        create_with_media: Arc::new(CreateListingWithMediaService::new(
            project_query.clone(),
            listing_repo.clone(),
        )),
        list_mine: Arc::new(ListMyListingsService::new(listing_query.clone())),
        get_mine: Arc::new(GetMyListingService::new(listing_query.clone())),
        update: Arc::new(UpdateListingService::new(listing_repo.clone())),
        attach_media: Arc::new(AttachMediaService::new(
            project_query,
            listing_query.clone(),
            listing_repo,
        )),
        list_marketplace: Arc::new(ListMarketplaceService::new(listing_query.clone())),
        get_marketplace: Arc::new(GetMarketplaceListingService::new(listing_query)),
    };

    let state = AppState {
        auth,
        billing,
        enhancement,
        project,
        listing,
    };

    let server_url = config.server_url();
    let max_upload_bytes = config.max_upload_bytes;
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(upload_form_config(max_upload_bytes))
            .service(crate::health::health)
            .service(crate::health::readiness)
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    crate::modules::auth::adapter::incoming::web::routes::configure(cfg);
    crate::modules::billing::adapter::incoming::web::routes::configure(cfg);
    crate::modules::project::adapter::incoming::web::routes::configure(cfg);
    crate::modules::enhancement::adapter::incoming::web::routes::configure(cfg);
    crate::modules::listing::adapter::incoming::web::routes::configure(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
