use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::fields::{optional_url, required_text, split_list};
use super::{EntityForm, ValidationErrors};
use crate::modules::content::domain::entities::Table;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ProjectForm {
    #[schema(example = "Neon Portfolio")]
    pub title: String,
    #[schema(example = "A portfolio site with an admin console")]
    pub summary: String,
    /// Comma separated.
    #[schema(example = "Rust, actix-web, Postgres")]
    pub tech_stack: String,
    pub github_url: String,
    pub live_url: String,
    pub thumbnail_url: String,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub summary: String,
    pub tech_stack: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
}

impl EntityForm for ProjectForm {
    const TABLE: Table = Table::Projects;
    type Output = NewProject;

    fn validate(&self) -> Result<NewProject, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = required_text(
            &mut errors,
            "title",
            &self.title,
            2,
            "Project title is required.",
        );
        let summary = required_text(
            &mut errors,
            "summary",
            &self.summary,
            8,
            "Summary should be at least 8 characters.",
        );

        let tech_stack = split_list(&self.tech_stack, ',');
        if tech_stack.is_empty() {
            errors.push("tech_stack", "Enter at least one technology.");
        }

        let github_url = optional_url(&mut errors, "github_url", &self.github_url);
        let live_url = optional_url(&mut errors, "live_url", &self.live_url);
        let thumbnail_url = optional_url(&mut errors, "thumbnail_url", &self.thumbnail_url);

        errors.finish(NewProject {
            title,
            summary,
            tech_stack,
            github_url,
            live_url,
            thumbnail_url,
            featured: self.featured,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProjectForm {
        ProjectForm {
            title: "Folio".to_string(),
            summary: "Personal portfolio".to_string(),
            tech_stack: "Rust, , actix-web".to_string(),
            github_url: "https://github.com/me/folio".to_string(),
            live_url: String::new(),
            thumbnail_url: String::new(),
            featured: true,
        }
    }

    #[test]
    fn test_valid_project_normalizes_lists_and_urls() {
        let project = form().validate().unwrap();

        assert_eq!(project.tech_stack, vec!["Rust", "actix-web"]);
        assert_eq!(project.live_url, None);
        assert_eq!(
            project.github_url.as_deref(),
            Some("https://github.com/me/folio")
        );
        assert!(project.featured);
    }

    #[test]
    fn test_malformed_url_is_rejected_but_blank_is_not() {
        let err = ProjectForm {
            live_url: "not a url".to_string(),
            ..form()
        }
        .validate()
        .unwrap_err();

        assert_eq!(err.fields().len(), 1);
        assert!(err.has("live_url"));
    }

    #[test]
    fn test_short_summary_and_empty_stack_are_both_reported() {
        let err = ProjectForm {
            summary: "short".to_string(),
            tech_stack: " , ".to_string(),
            ..form()
        }
        .validate()
        .unwrap_err();

        assert!(err.has("summary"));
        assert!(err.has("tech_stack"));
    }

    #[test]
    fn test_featured_defaults_to_false() {
        assert!(!ProjectForm::default().featured);
    }
}
