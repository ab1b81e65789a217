use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub username: String,
    pub role: String, // "admin"
    pub iat: i64,
    pub exp: i64,
}
