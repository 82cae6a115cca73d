use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::fields::{optional_text, optional_url, required_date, required_text, split_list};
use super::{EntityForm, ValidationErrors};
use crate::modules::content::domain::entities::Table;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CertificateForm {
    #[schema(example = "Certified Kubernetes Administrator")]
    pub title: String,
    #[schema(example = "CNCF")]
    pub issuer: String,
    #[schema(example = "2024-02-05")]
    pub issue_date: String,
    pub description: String,
    pub credential_id: String,
    pub credential_url: String,
    /// Comma separated.
    #[schema(example = "Kubernetes, Helm")]
    pub skills: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCertificate {
    pub title: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    pub description: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub skills: Vec<String>,
    pub image_url: Option<String>,
}

impl EntityForm for CertificateForm {
    const TABLE: Table = Table::Certificates;
    const ACCEPTS_IMAGE: bool = true;
    type Output = NewCertificate;

    fn validate(&self) -> Result<NewCertificate, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = required_text(
            &mut errors,
            "title",
            &self.title,
            2,
            "Certificate title is required.",
        );
        let issuer = required_text(&mut errors, "issuer", &self.issuer, 2, "Issuer is required.");
        let issue_date = required_date(
            &mut errors,
            "issue_date",
            &self.issue_date,
            "Issue date is required.",
        );
        let credential_url = optional_url(&mut errors, "credential_url", &self.credential_url);

        let Some(issue_date) = issue_date else {
            return Err(errors);
        };

        errors.finish(NewCertificate {
            title,
            issuer,
            issue_date,
            description: optional_text(&self.description),
            credential_id: optional_text(&self.credential_id),
            credential_url,
            skills: split_list(&self.skills, ','),
            image_url: None,
        })
    }

    fn attach_image(output: &mut NewCertificate, public_url: String) {
        output.image_url = Some(public_url);
    }
}
