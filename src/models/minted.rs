use chrono::{DateTime, Utc};

use super::token_claims::TokenClaims;

/// Resultado de una emisión: el token firmado y los datos que lo describen
#[derive(Debug, Clone)]
pub struct MintedToken {
    pub token: String,
    pub claims: TokenClaims,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub validity_days: i64,
}
