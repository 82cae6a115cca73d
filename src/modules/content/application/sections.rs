use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::modules::content::application::query::{Intent, QueryClient};
use crate::modules::content::domain::entities::{Certificate, Experience, Project, Skill};

//
// ──────────────────────────────────────────────────────────
// Section envelope
// ──────────────────────────────────────────────────────────
//

/// Outcome of rendering one public section. Sections load independently; a
/// failing one degrades to a message instead of failing the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Section<T> {
    Ready { data: T },
    Empty { message: String },
    Unavailable { message: String },
}

impl<T> Section<T> {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Section::Unavailable { .. })
    }
}

struct SectionCopy {
    name: &'static str,
    empty: &'static str,
    unavailable: &'static str,
}

const SKILLS_COPY: SectionCopy = SectionCopy {
    name: "skills",
    empty: "No skills added yet. Use the admin panel to create your first entries.",
    unavailable: "Unable to load skills right now.",
};

const EXPERIENCE_COPY: SectionCopy = SectionCopy {
    name: "experience",
    empty: "No experience entries yet. Add them via the admin panel to display your timeline.",
    unavailable: "Unable to load experience data.",
};

const PROJECTS_COPY: SectionCopy = SectionCopy {
    name: "projects",
    empty: "No projects yet. Add them in the admin dashboard to showcase your work.",
    unavailable: "Unable to load projects right now.",
};

const CERTIFICATES_COPY: SectionCopy = SectionCopy {
    name: "certificates",
    empty: "No certificates yet. Add them in the admin dashboard to showcase your achievements.",
    unavailable: "Unable to load certificates.",
};

fn build<R, T, E>(
    copy: &SectionCopy,
    result: Result<Vec<R>, E>,
    render: impl FnOnce(Vec<R>) -> T,
) -> Section<T>
where
    E: std::fmt::Display,
{
    match result {
        Ok(records) if records.is_empty() => Section::Empty {
            message: copy.empty.to_string(),
        },
        Ok(records) => Section::Ready {
            data: render(records),
        },
        Err(e) => {
            warn!(section = copy.name, error = %e, "section unavailable");
            Section::Unavailable {
                message: copy.unavailable.to_string(),
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

/// Categories shown first, in this order, with their display titles.
const KNOWN_CATEGORIES: [(&str, &str); 5] = [
    ("frontend", "Frontend Development"),
    ("backend", "Backend & Python"),
    ("security", "Ethical Hacking"),
    ("automation", "AI Automation"),
    ("design", "UI/UX Design"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillChip {
    pub name: String,
    pub proficiency: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub title: String,
    pub skills: Vec<SkillChip>,
}

/// Groups skills by lower-cased category. Known categories come first in
/// their fixed order; the rest follow in first-seen order.
pub fn group_skills(skills: Vec<Skill>) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();

    for skill in skills {
        let key = skill.category.trim().to_lowercase();
        let chip = SkillChip {
            name: skill.name,
            proficiency: skill.proficiency,
        };

        match groups.iter_mut().find(|g| g.category == key) {
            Some(group) => group.skills.push(chip),
            None => {
                let title = KNOWN_CATEGORIES
                    .iter()
                    .find(|(known, _)| *known == key)
                    .map(|(_, title)| title.to_string())
                    .unwrap_or_else(|| key.clone());
                groups.push(SkillGroup {
                    category: key,
                    title,
                    skills: vec![chip],
                });
            }
        }
    }

    let rank = |category: &str| {
        KNOWN_CATEGORIES
            .iter()
            .position(|(known, _)| *known == category)
            .unwrap_or(KNOWN_CATEGORIES.len())
    };
    // Stable: unknown categories keep first-seen order.
    groups.sort_by_key(|g| rank(&g.category));
    groups
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    pub id: Uuid,
    pub role: String,
    pub company: String,
    pub period: String,
    pub summary: Option<String>,
    pub achievements: Vec<String>,
}

fn month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

pub fn period_label(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let end = end.map(month_year).unwrap_or_else(|| "Present".to_string());
    format!("{} – {}", month_year(start), end)
}

pub fn experience_views(experiences: Vec<Experience>) -> Vec<ExperienceView> {
    experiences
        .into_iter()
        .map(|e| ExperienceView {
            id: e.id,
            period: period_label(e.start_date, e.end_date),
            role: e.role,
            company: e.company,
            summary: e.summary,
            achievements: e.achievements.unwrap_or_default(),
        })
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

/// Featured projects first; within equal status, newest first.
pub fn order_projects(mut projects: Vec<Project>) -> Vec<Project> {
    projects.sort_by(|a, b| {
        b.is_featured()
            .cmp(&a.is_featured())
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    projects
}

//
// ──────────────────────────────────────────────────────────
// Certificates
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateView {
    pub id: Uuid,
    pub title: String,
    pub issuer: String,
    pub issued: String,
    pub description: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub skills: Vec<String>,
    pub image_url: Option<String>,
}

pub fn certificate_views(certificates: Vec<Certificate>) -> Vec<CertificateView> {
    certificates
        .into_iter()
        .map(|c| CertificateView {
            id: c.id,
            issued: month_year(c.issue_date),
            title: c.title,
            issuer: c.issuer,
            description: c.description,
            credential_id: c.credential_id,
            credential_url: c.credential_url,
            skills: c.skills.unwrap_or_default(),
            image_url: c.image_url,
        })
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Loading
// ──────────────────────────────────────────────────────────
//

pub async fn skills_section(query: &QueryClient) -> Section<Vec<SkillGroup>> {
    build(
        &SKILLS_COPY,
        query.fetch::<Skill>(Intent::Public).await,
        group_skills,
    )
}

pub async fn experience_section(query: &QueryClient) -> Section<Vec<ExperienceView>> {
    build(
        &EXPERIENCE_COPY,
        query.fetch::<Experience>(Intent::Public).await,
        experience_views,
    )
}

pub async fn projects_section(query: &QueryClient) -> Section<Vec<Project>> {
    build(
        &PROJECTS_COPY,
        query.fetch::<Project>(Intent::Public).await,
        order_projects,
    )
}

pub async fn certificates_section(query: &QueryClient) -> Section<Vec<CertificateView>> {
    build(
        &CERTIFICATES_COPY,
        query.fetch::<Certificate>(Intent::Public).await,
        certificate_views,
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioView {
    pub skills: Section<Vec<SkillGroup>>,
    pub experience: Section<Vec<ExperienceView>>,
    pub projects: Section<Vec<Project>>,
    pub certificates: Section<Vec<CertificateView>>,
}

/// Loads all sections concurrently.
pub async fn load_portfolio(query: &QueryClient) -> PortfolioView {
    let (skills, experience, projects, certificates) = tokio::join!(
        skills_section(query),
        experience_section(query),
        projects_section(query),
        certificates_section(query),
    );

    PortfolioView {
        skills,
        experience,
        projects,
        certificates,
    }
}
