pub mod disable_mfa_service;
pub mod enable_mfa_service;
pub mod fetch_profile_service;
pub mod login_user_service;
pub mod register_user_service;
pub mod request_password_reset_service;
pub mod resend_verification_service;
pub mod require_role_service;
pub mod reset_password_service;
pub mod setup_mfa_service;
pub mod token_issuer;
pub mod verify_email_service;

pub use disable_mfa_service::DisableMfaService;
pub use enable_mfa_service::EnableMfaService;
pub use fetch_profile_service::FetchProfileService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use request_password_reset_service::RequestPasswordResetService;
pub use resend_verification_service::ResendVerificationService;
pub use require_role_service::RequireRoleService;
pub use reset_password_service::ResetPasswordService;
pub use setup_mfa_service::SetupMfaService;
pub use token_issuer::SingleUseTokenIssuer;
pub use verify_email_service::VerifyEmailService;
