//! Pure, framework-free checks run before any network call.
//!
//! Every form yields either a validated record ready for insertion or the
//! full list of failing fields.

mod certificate;
mod experience;
mod fields;
mod login;
mod project;
mod skill;

pub use certificate::{CertificateForm, NewCertificate};
pub use experience::{ExperienceForm, NewExperience};
pub use login::LoginForm;
pub use project::{NewProject, ProjectForm};
pub use skill::{NewSkill, ProficiencyInput, SkillForm};

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::modules::content::domain::entities::Table;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    #[schema(example = "proficiency")]
    pub field: String,
    #[schema(example = "Proficiency must be between 0 and 100.")]
    pub message: String,
}

/// Ordered list of field failures. Never empty when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.0.iter().map(|e| e.field.as_str()).collect();
        write!(f, "Invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// A create form for one content table.
pub trait EntityForm: Clone + Default + Send + Sync + 'static {
    const TABLE: Table;

    /// Only certificate forms carry an uploaded image.
    const ACCEPTS_IMAGE: bool = false;

    /// Record sent to the backend, without its id.
    type Output: Serialize + Send + Sync;

    fn validate(&self) -> Result<Self::Output, ValidationErrors>;

    /// Points the validated record at an uploaded image.
    fn attach_image(_output: &mut Self::Output, _public_url: String) {}
}
