use std::fmt;

#[derive(Debug)]
pub enum AppError {
    // La librería JWT no pudo producir el token
    SigningFailure(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::SigningFailure(msg) => write!(f, "Error de firma: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        AppError::SigningFailure(err.to_string())
    }
}

// Métodos de conveniencia para crear errores específicos
impl AppError {
    pub fn empty_secret() -> Self {
        AppError::SigningFailure("the shared secret is empty".to_string())
    }

    pub fn unsupported_algorithm(name: &str) -> Self {
        AppError::SigningFailure(format!(
            "algorithm '{}' is not supported, expected one of HS256, HS384, HS512",
            name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_reason() {
        let err = AppError::unsupported_algorithm("RS256");
        assert!(err.to_string().starts_with("Error de firma: "));
        assert!(err.to_string().contains("RS256"));
    }

    #[test]
    fn converts_from_jsonwebtoken_errors() {
        let jwt_err: jsonwebtoken::errors::Error =
            jsonwebtoken::errors::ErrorKind::InvalidAlgorithm.into();
        let AppError::SigningFailure(msg) = AppError::from(jwt_err);
        assert!(!msg.is_empty());
    }
}
