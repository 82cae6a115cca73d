use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::fields::{optional_date, optional_text, required_date, required_text, split_list};
use super::{EntityForm, ValidationErrors};
use crate::modules::content::domain::entities::Table;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct ExperienceForm {
    #[schema(example = "Senior Engineer")]
    pub role: String,
    #[schema(example = "Acme Corp")]
    pub company: String,
    #[schema(example = "2022-03-01")]
    pub start_date: String,
    /// Blank while the role is ongoing.
    #[schema(example = "")]
    pub end_date: String,
    pub summary: String,
    /// One achievement per line.
    #[schema(example = "Led the platform migration\nCut build times in half")]
    pub achievements: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExperience {
    pub role: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub summary: Option<String>,
    /// Empty when none were given.
    pub achievements: Vec<String>,
}

impl EntityForm for ExperienceForm {
    const TABLE: Table = Table::Experiences;
    type Output = NewExperience;

    fn validate(&self) -> Result<NewExperience, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let role = required_text(&mut errors, "role", &self.role, 2, "Role is required.");
        let company = required_text(
            &mut errors,
            "company",
            &self.company,
            2,
            "Company name is required.",
        );
        let start_date = required_date(
            &mut errors,
            "start_date",
            &self.start_date,
            "Start date is required.",
        );
        let end_date = optional_date(&mut errors, "end_date", &self.end_date);

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                errors.push("end_date", "End date cannot be before the start date.");
            }
        }

        let Some(start_date) = start_date else {
            return Err(errors);
        };

        errors.finish(NewExperience {
            role,
            company,
            start_date,
            end_date,
            summary: optional_text(&self.summary),
            achievements: split_list(&self.achievements, '\n'),
        })
    }
}
