use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::{
    DisableMfaUseCase, EnableMfaUseCase, FetchProfileUseCase, LoginUserUseCase,
    RegisterUserUseCase, RequestPasswordResetUseCase, RequireRoleUseCase,
    ResendVerificationUseCase, ResetPasswordUseCase, SetupMfaUseCase, VerifyEmailUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub verify_email: Arc<dyn VerifyEmailUseCase + Send + Sync>,
    pub resend_verification: Arc<dyn ResendVerificationUseCase + Send + Sync>,
    pub request_password_reset: Arc<dyn RequestPasswordResetUseCase + Send + Sync>,
    pub reset_password: Arc<dyn ResetPasswordUseCase + Send + Sync>,
    pub setup_mfa: Arc<dyn SetupMfaUseCase + Send + Sync>,
    pub enable_mfa: Arc<dyn EnableMfaUseCase + Send + Sync>,
    pub disable_mfa: Arc<dyn DisableMfaUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub require_role: Arc<dyn RequireRoleUseCase + Send + Sync>,
}
