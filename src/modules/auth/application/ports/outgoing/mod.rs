pub mod password_hasher;
pub mod role_query;
pub mod single_use_token_repository;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use role_query::{RoleQuery, RoleQueryError};
pub use single_use_token_repository::{
    ConsumeTokenError, IssueTokenData, SingleUseTokenRepository, TokenEffect, TokenRepositoryError,
};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{NewUser, UserRepository, UserRepositoryError};
