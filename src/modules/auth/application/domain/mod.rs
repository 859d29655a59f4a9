pub mod credentials;
pub mod entities;
pub mod single_use_token;
pub mod totp;
