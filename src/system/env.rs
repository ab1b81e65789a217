use std::env::var;

use tracing::{debug, warn};

use crate::models::{Deployment, Identity, MinterConfig, DEFAULT_ALGORITHM, DEFAULT_VALIDITY_DAYS};

// Cien años como tope razonable
const MAX_VALIDITY_DAYS: i64 = 36_500;

/// Lee la configuración de las variables de entorno del proceso
pub fn load_config() -> MinterConfig {
    load_config_from(|key| var(key).ok())
}

/// Construye la configuración a partir de una función de búsqueda de variables
pub fn load_config_from<F>(lookup: F) -> MinterConfig
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Identity::default();
    let deployment = Deployment::default();

    // Sin JWT_SECRET el secreto queda vacío y la firma fallará
    let secret = lookup(&deployment.secret_var).unwrap_or_default();
    let algorithm = lookup("JWT_ALGORITHM").unwrap_or_else(|| DEFAULT_ALGORITHM.to_string());

    let email = lookup("ADMIN_EMAIL").unwrap_or(defaults.email);
    let identity = Identity {
        subject: lookup("ADMIN_SUBJECT").unwrap_or(defaults.subject),
        username: lookup("ADMIN_USERNAME").unwrap_or_else(|| email.clone()),
        email,
        role: lookup("ADMIN_ROLE").unwrap_or(defaults.role),
    };

    let validity_days = match lookup("TOKEN_VALIDITY_DAYS") {
        Some(raw) => match raw.trim().parse::<i64>() {
            Ok(days) if (1..=MAX_VALIDITY_DAYS).contains(&days) => days,
            _ => {
                warn!(
                    "Invalid TOKEN_VALIDITY_DAYS '{}', using {} days",
                    raw, DEFAULT_VALIDITY_DAYS
                );
                DEFAULT_VALIDITY_DAYS
            }
        },
        None => DEFAULT_VALIDITY_DAYS,
    };

    let deployment = Deployment {
        token_var: lookup("TOKEN_ENV_VAR").unwrap_or(deployment.token_var),
        secret_var: deployment.secret_var,
        platform: lookup("DEPLOY_PLATFORM").unwrap_or(deployment.platform),
    };

    let config = MinterConfig {
        secret,
        algorithm,
        identity,
        validity_days,
        deployment,
    };
    debug!("Config: {:?}", config);
    config
}
