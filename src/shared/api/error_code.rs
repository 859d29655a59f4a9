use actix_web::http::StatusCode;

/// Stable machine-readable error codes returned in the `error.code` field.
///
/// Every code resolves to exactly one HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ValidationError,
    Unauthenticated,
    InvalidOrExpiredToken,
    InvalidCredentials,
    MfaRequired,
    MfaInvalid,
    MfaNotSetup,
    MfaAlreadyEnabled,
    MfaMisconfigured,
    EmailTaken,
    PlanNameTaken,
    TokenInvalid,
    TokenUsed,
    TokenExpired,
    AlreadyVerified,
    UserNotFound,
    Forbidden,
    PlanNotFound,
    NoActiveSubscription,
    InsufficientCredits,
    ProjectNotFound,
    AdCopyNotFound,
    InvalidImages,
    JobNotFound,
    ListingNotFound,
    InvalidImageVersions,
    StorageNotConfigured,
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        use ErrorCode::*;

        match self {
            ValidationError | MfaNotSetup | TokenInvalid | TokenUsed | TokenExpired
            | AlreadyVerified | InvalidImages | InvalidImageVersions => StatusCode::BAD_REQUEST,

            Unauthenticated | InvalidOrExpiredToken | InvalidCredentials | MfaRequired
            | MfaInvalid => StatusCode::UNAUTHORIZED,

            NoActiveSubscription | InsufficientCredits => StatusCode::PAYMENT_REQUIRED,

            Forbidden => StatusCode::FORBIDDEN,

            UserNotFound | PlanNotFound | ProjectNotFound | AdCopyNotFound | JobNotFound
            | ListingNotFound => StatusCode::NOT_FOUND,

            EmailTaken | PlanNameTaken | MfaAlreadyEnabled => StatusCode::CONFLICT,

            MfaMisconfigured | StorageNotConfigured | Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        use ErrorCode::*;

        match self {
            ValidationError => "VALIDATION_ERROR",
            Unauthenticated => "UNAUTHENTICATED",
            InvalidOrExpiredToken => "INVALID_OR_EXPIRED_TOKEN",
            InvalidCredentials => "INVALID_CREDENTIALS",
            MfaRequired => "MFA_REQUIRED",
            MfaInvalid => "MFA_INVALID",
            MfaNotSetup => "MFA_NOT_SETUP",
            MfaAlreadyEnabled => "MFA_ALREADY_ENABLED",
            MfaMisconfigured => "MFA_MISCONFIGURED",
            EmailTaken => "EMAIL_TAKEN",
            PlanNameTaken => "PLAN_NAME_TAKEN",
            TokenInvalid => "TOKEN_INVALID",
            TokenUsed => "TOKEN_USED",
            TokenExpired => "TOKEN_EXPIRED",
            AlreadyVerified => "ALREADY_VERIFIED",
            UserNotFound => "USER_NOT_FOUND",
            Forbidden => "FORBIDDEN",
            PlanNotFound => "PLAN_NOT_FOUND",
            NoActiveSubscription => "NO_ACTIVE_SUBSCRIPTION",
            InsufficientCredits => "INSUFFICIENT_CREDITS",
            ProjectNotFound => "PROJECT_NOT_FOUND",
            AdCopyNotFound => "AD_COPY_NOT_FOUND",
            InvalidImages => "INVALID_IMAGES",
            JobNotFound => "JOB_NOT_FOUND",
            ListingNotFound => "LISTING_NOT_FOUND",
            InvalidImageVersions => "INVALID_IMAGE_VERSIONS",
            StorageNotConfigured => "STORAGE_NOT_CONFIGURED",
            Internal => "INTERNAL_ERROR",
        }
    }
}
