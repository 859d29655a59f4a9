pub mod disable_mfa;
pub mod enable_mfa;
pub mod fetch_profile;
pub mod login_user;
pub mod register_user;
pub mod request_password_reset;
pub mod resend_verification;
pub mod require_role;
pub mod reset_password;
pub mod setup_mfa;
pub mod verify_email;

pub use disable_mfa::{DisableMfaError, DisableMfaUseCase};
pub use enable_mfa::{EnableMfaError, EnableMfaUseCase};
pub use fetch_profile::{FetchProfileError, FetchProfileUseCase};
pub use login_user::{LoginCommand, LoginError, LoginUserUseCase};
pub use register_user::{RegisterUserCommand, RegisterUserError, RegisterUserUseCase};
pub use request_password_reset::{RequestPasswordResetError, RequestPasswordResetUseCase};
pub use resend_verification::{ResendVerificationError, ResendVerificationUseCase};
pub use require_role::{RequireRoleError, RequireRoleUseCase};
pub use reset_password::{ResetPasswordCommand, ResetPasswordError, ResetPasswordUseCase};
pub use setup_mfa::{MfaSetup, SetupMfaError, SetupMfaUseCase};
pub use verify_email::{VerifyEmailError, VerifyEmailUseCase};

use serde::Serialize;

use crate::modules::auth::application::domain::entities::UserProfile;

/// Returned by register and login.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}
