use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::fields::{optional_text, required_text};
use super::{EntityForm, ValidationErrors};
use crate::modules::content::domain::entities::Table;

pub const DEFAULT_PROFICIENCY: u8 = 80;
const PROFICIENCY_MESSAGE: &str = "Proficiency must be a whole number between 0 and 100.";

/// Range inputs post numbers; text inputs post strings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ProficiencyInput {
    Number(serde_json::Number),
    Text(String),
}

impl Default for ProficiencyInput {
    fn default() -> Self {
        ProficiencyInput::Number(DEFAULT_PROFICIENCY.into())
    }
}

impl ProficiencyInput {
    fn parse(&self) -> Option<u8> {
        let value = match self {
            ProficiencyInput::Number(n) => match n.as_i64() {
                Some(v) => v,
                // Whole floats such as 75.0 are still integers.
                None => {
                    let f = n.as_f64()?;
                    if f.fract() != 0.0 {
                        return None;
                    }
                    f as i64
                }
            },
            ProficiencyInput::Text(s) => s.trim().parse::<i64>().ok()?,
        };
        u8::try_from(value).ok().filter(|v| *v <= 100)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct SkillForm {
    #[schema(example = "Rust")]
    pub name: String,
    #[schema(example = "backend")]
    pub category: String,
    #[schema(value_type = u8, example = 80)]
    pub proficiency: ProficiencyInput,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSkill {
    pub name: String,
    pub category: String,
    pub proficiency: u8,
    pub summary: Option<String>,
}

impl EntityForm for SkillForm {
    const TABLE: Table = Table::Skills;
    type Output = NewSkill;

    fn validate(&self) -> Result<NewSkill, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = required_text(
            &mut errors,
            "name",
            &self.name,
            2,
            "Name must be at least 2 characters.",
        );
        let category = required_text(
            &mut errors,
            "category",
            &self.category,
            2,
            "Category is required.",
        );
        let proficiency = match self.proficiency.parse() {
            Some(v) => v,
            None => {
                errors.push("proficiency", PROFICIENCY_MESSAGE);
                0
            }
        };

        errors.finish(NewSkill {
            name,
            category,
            proficiency,
            summary: optional_text(&self.summary),
        })
    }
}
