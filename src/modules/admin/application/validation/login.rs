use serde::Deserialize;
use utoipa::ToSchema;

use super::ValidationErrors;

/// Admin console credentials, as typed.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginForm {
    #[schema(example = "owner")]
    pub username: String,
    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

impl LoginForm {
    /// Presence only; whether they match is the gate's decision.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.username.is_empty() {
            errors.push("username", "Username is required");
        }
        if self.password.is_empty() {
            errors.push("password", "Password is required");
        }
        errors.finish(())
    }
}
