pub const DEFAULT_ALGORITHM: &str = "HS256";
pub const DEFAULT_VALIDITY_DAYS: i64 = 365;

/// Identidad fija que se incrusta en el token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject: String,
    pub email: String,
    pub username: String,
    pub role: String,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            subject: "admin".to_string(),
            email: "admin@xeno.com".to_string(),
            username: "admin@xeno.com".to_string(),
            role: "admin".to_string(),
        }
    }
}

/// Nombres que aparecen en los recordatorios del informe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub token_var: String,
    pub secret_var: String,
    pub platform: String,
}

impl Default for Deployment {
    fn default() -> Self {
        Self {
            token_var: "ADMIN_JWT_TOKEN".to_string(),
            secret_var: "JWT_SECRET".to_string(),
            platform: "Railway".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct MinterConfig {
    pub secret: String,
    pub algorithm: String,
    pub identity: Identity,
    pub validity_days: i64,
    pub deployment: Deployment,
}

impl MinterConfig {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_string(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
            identity: Identity::default(),
            validity_days: DEFAULT_VALIDITY_DAYS,
            deployment: Deployment::default(),
        }
    }
}

// El secreto nunca se imprime
impl std::fmt::Debug for MinterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinterConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("identity", &self.identity)
            .field("validity_days", &self.validity_days)
            .field("deployment", &self.deployment)
            .finish()
    }
}
