use std::fmt;

use chrono::{DateTime, Utc};

use crate::models::{Deployment, MintedToken};

const BANNER_WIDTH: usize = 60;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Datos del informe de consola, separados de su presentación
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenReport {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub validity_days: i64,
    pub email: String,
    pub role: String,
    pub deployment: Deployment,
}

impl TokenReport {
    pub fn new(minted: &MintedToken, deployment: &Deployment) -> Self {
        Self {
            token: minted.token.clone(),
            issued_at: minted.issued_at,
            expires_at: minted.expires_at,
            validity_days: minted.validity_days,
            email: minted.claims.email.clone(),
            role: minted.claims.role.clone(),
            deployment: deployment.clone(),
        }
    }

    pub fn render(&self) -> String {
        let banner = "=".repeat(BANNER_WIDTH);
        let deployment = &self.deployment;
        let lines = [
            banner.clone(),
            "🔐 FRESH JWT TOKEN GENERATED".to_string(),
            banner.clone(),
            format!("Token: {}", self.token),
            String::new(),
            "📅 Token Details:".to_string(),
            format!("• Issued At: {}", self.issued_at.format(TIMESTAMP_FORMAT)),
            format!("• Expires At: {}", self.expires_at.format(TIMESTAMP_FORMAT)),
            format!("• Valid For: {} days", self.validity_days),
            format!("• User: {}", self.email),
            format!("• Role: {}", self.role),
            String::new(),
            "🚨 IMPORTANT:".to_string(),
            format!(
                "1. Use this as your {} in {} environment variables",
                deployment.token_var, deployment.platform
            ),
            format!(
                "2. Make sure {} matches the secret used here",
                deployment.secret_var
            ),
            format!(
                "3. Remove the old expired {} from {}",
                deployment.token_var, deployment.platform
            ),
            banner,
        ];
        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

impl fmt::Display for TokenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> TokenReport {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        TokenReport {
            token: "aaa.bbb.ccc".to_string(),
            issued_at,
            expires_at: Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
            validity_days: 365,
            email: "admin@xeno.com".to_string(),
            role: "admin".to_string(),
            deployment: Deployment::default(),
        }
    }

    #[test]
    fn renders_the_full_report_in_order() {
        let banner = "=".repeat(60);
        let expected = format!(
            "{banner}\n\
             🔐 FRESH JWT TOKEN GENERATED\n\
             {banner}\n\
             Token: aaa.bbb.ccc\n\
             \n\
             📅 Token Details:\n\
             • Issued At: 2024-01-01 00:00:00 UTC\n\
             • Expires At: 2024-12-31 00:00:00 UTC\n\
             • Valid For: 365 days\n\
             • User: admin@xeno.com\n\
             • Role: admin\n\
             \n\
             🚨 IMPORTANT:\n\
             1. Use this as your ADMIN_JWT_TOKEN in Railway environment variables\n\
             2. Make sure JWT_SECRET matches the secret used here\n\
             3. Remove the old expired ADMIN_JWT_TOKEN from Railway\n\
             {banner}\n"
        );
        assert_eq!(sample().render(), expected);
    }

    #[test]
    fn banners_are_sixty_equals_signs() {
        let rendered = sample().render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 17);
        for idx in [0, 2, 16] {
            assert_eq!(lines[idx].len(), 60);
            assert!(lines[idx].chars().all(|c| c == '='));
        }
    }

    #[test]
    fn reminders_follow_the_deployment_names() {
        let mut report = sample();
        report.deployment = Deployment {
            token_var: "OPS_TOKEN".to_string(),
            secret_var: "OPS_SECRET".to_string(),
            platform: "Fly".to_string(),
        };
        let rendered = report.to_string();
        assert!(rendered.contains("1. Use this as your OPS_TOKEN in Fly environment variables"));
        assert!(rendered.contains("2. Make sure OPS_SECRET matches the secret used here"));
        assert!(rendered.contains("3. Remove the old expired OPS_TOKEN from Fly"));
    }
}
