use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Tables
// ──────────────────────────────────────────────────────────
//

/// Remote tables backing the four content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Skills,
    Experiences,
    Projects,
    Certificates,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::Skills,
        Table::Experiences,
        Table::Projects,
        Table::Certificates,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Skills => "skills",
            Table::Experiences => "experiences",
            Table::Projects => "projects",
            Table::Certificates => "certificates",
        }
    }

    /// Every read of a collection uses this ordering.
    pub fn order(&self) -> OrderBy {
        match self {
            Table::Skills => OrderBy::desc("proficiency"),
            Table::Experiences => OrderBy::desc("start_date"),
            Table::Projects => OrderBy::desc("created_at"),
            Table::Certificates => OrderBy::desc("issue_date"),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown table: {0}")]
pub struct UnknownTable(pub String);

impl FromStr for Table {
    type Err = UnknownTable;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skills" => Ok(Table::Skills),
            "experiences" => Ok(Table::Experiences),
            "projects" => Ok(Table::Projects),
            "certificates" => Ok(Table::Certificates),
            other => Err(UnknownTable(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub ascending: bool,
}

impl OrderBy {
    pub const fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }

    pub const fn asc(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }
}

/// A record type stored in one of the remote tables.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const TABLE: Table;

    fn id(&self) -> Uuid;
}

//
// ──────────────────────────────────────────────────────────
// Records
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    /// Free text; grouped case-insensitively.
    pub category: String,
    /// 0..=100
    pub proficiency: u8,
    #[serde(default)]
    pub summary: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub start_date: NaiveDate,
    /// `None` means the role is ongoing.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub achievements: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Certificate {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub issue_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub credential_id: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    /// Set only when an image was uploaded with the certificate.
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

macro_rules! impl_entity {
    ($ty:ty, $table:expr) => {
        impl Entity for $ty {
            const TABLE: Table = $table;

            fn id(&self) -> Uuid {
                self.id
            }
        }
    };
}

impl_entity!(Skill, Table::Skills);
impl_entity!(Experience, Table::Experiences);
impl_entity!(Project, Table::Projects);
impl_entity!(Certificate, Table::Certificates);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_round_trips_through_name() {
        for table in Table::ALL {
            assert_eq!(table.name().parse::<Table>().unwrap(), table);
        }
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        let err = "users".parse::<Table>().unwrap_err();
        assert_eq!(err, UnknownTable("users".to_string()));
    }

    #[test]
    fn test_read_ordering_per_table() {
        assert_eq!(Table::Skills.order(), OrderBy::desc("proficiency"));
        assert_eq!(Table::Experiences.order(), OrderBy::desc("start_date"));
        assert_eq!(Table::Projects.order(), OrderBy::desc("created_at"));
        assert_eq!(Table::Certificates.order(), OrderBy::desc("issue_date"));
    }

    #[test]
    fn test_project_tolerates_null_optional_columns() {
        let row = json!({
            "id": "4f0c2a9e-1b7d-4c1e-9d53-6f8a3f0e2b11",
            "title": "Neon Portfolio",
            "summary": null,
            "tech_stack": null,
            "github_url": null,
            "live_url": null,
            "thumbnail_url": null,
            "featured": null,
            "created_at": "2024-01-01T00:00:00Z"
        });

        let project: Project = serde_json::from_value(row).unwrap();

        assert!(!project.is_featured());
        assert!(project.tech_stack.is_none());
    }

    #[test]
    fn test_experience_without_end_date_is_ongoing() {
        let row = json!({
            "id": "a2b1f7de-0c55-4c8e-8f3e-5f6d9c0b7a21",
            "role": "Engineer",
            "company": "Acme",
            "start_date": "2023-02-01",
            "end_date": null,
            "created_at": "2023-02-02T10:00:00Z"
        });

        let experience: Experience = serde_json::from_value(row).unwrap();

        assert!(experience.end_date.is_none());
        assert!(experience.achievements.is_none());
    }
}
