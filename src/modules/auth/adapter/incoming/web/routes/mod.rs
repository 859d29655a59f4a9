mod login_user;
mod me;
mod mfa;
mod password_reset;
mod register_user;
mod verify_email;

use actix_web::web;

pub use login_user::{login_user_handler, AuthSessionResponse, LoginRequestDto, UserProfileResponse};
pub use me::me_handler;
pub use mfa::{
    mfa_disable_handler, mfa_enable_handler, mfa_setup_handler, MfaCodeRequest, MfaSetupResponse,
};
pub use password_reset::{forgot_password_handler, reset_password_handler, ResetPasswordRequest};
pub use register_user::{register_user_handler, RegisterUserRequest};
pub use verify_email::{
    resend_verification_handler, verify_email_handler, EmailRequest, MessageResponse,
    VerifyEmailRequest,
};

pub use login_user::{__path_login_user_handler};
pub use me::{__path_me_handler};
pub use mfa::{__path_mfa_disable_handler, __path_mfa_enable_handler, __path_mfa_setup_handler};
pub use password_reset::{__path_forgot_password_handler, __path_reset_password_handler};
pub use register_user::{__path_register_user_handler};
pub use verify_email::{__path_resend_verification_handler, __path_verify_email_handler};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register_user_handler)
        .service(login_user_handler)
        .service(verify_email_handler)
        .service(resend_verification_handler)
        .service(forgot_password_handler)
        .service(reset_password_handler)
        .service(me_handler)
        .service(mfa_setup_handler)
        .service(mfa_enable_handler)
        .service(mfa_disable_handler);
}
