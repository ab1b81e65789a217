mod config;
mod error;
mod minted;
mod token_claims;

pub use config::{Deployment, Identity, MinterConfig, DEFAULT_ALGORITHM, DEFAULT_VALIDITY_DAYS};
pub use error::AppError;
pub use minted::MintedToken;
pub use token_claims::TokenClaims;
