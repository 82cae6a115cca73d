use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Name of the browser-session cookie carrying the gate session id.
pub const SESSION_COOKIE: &str = "admin-iw-session";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GateStatus {
    /// Credentials are missing from the deployment; the console stays closed.
    NotConfigured,
    Locked,
    Unlocked,
}

/// The pre-shared admin username and password.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    /// Both values must be present and non-blank.
    pub fn from_parts(username: Option<String>, password: Option<String>) -> Option<Self> {
        let username = username.filter(|u| !u.trim().is_empty())?;
        let password = password.filter(|p| !p.trim().is_empty())?;
        Some(Self { username, password })
    }

    /// Exact match on both values. Both comparisons always run so the
    /// outcome does not depend on which field was wrong.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let user_ok = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), password.as_bytes());
        user_ok & pass_ok
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> AdminCredentials {
        AdminCredentials::from_parts(Some("owner".into()), Some("s3cret".into())).unwrap()
    }

    #[test]
    fn test_missing_or_blank_parts_are_not_credentials() {
        assert!(AdminCredentials::from_parts(None, Some("x".into())).is_none());
        assert!(AdminCredentials::from_parts(Some("owner".into()), None).is_none());
        assert!(AdminCredentials::from_parts(Some(" ".into()), Some("x".into())).is_none());
    }

    #[test]
    fn test_match_is_exact() {
        let creds = creds();
        assert!(creds.matches("owner", "s3cret"));
        assert!(!creds.matches("Owner", "s3cret"));
        assert!(!creds.matches("owner", "s3cret "));
        assert!(!creds.matches("", ""));
    }

    #[test]
    fn test_debug_hides_password() {
        let printed = format!("{:?}", creds());
        assert!(printed.contains("owner"));
        assert!(!printed.contains("s3cret"));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(GateStatus::NotConfigured).unwrap(),
            "not_configured"
        );
    }
}
