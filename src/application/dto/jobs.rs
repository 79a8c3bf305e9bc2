use crate::domain::job::{Job, JobKind, JobStatus, JobType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub type_label: String,
    pub kind: JobKind,
    pub status: JobStatus,
    pub sponsored: bool,
    pub verified: bool,
    pub company_id: i64,
    pub company_slug: String,
    pub canonical_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub apply_url: String,
    pub locations: Vec<String>,
    pub sectors: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub posted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for JobDto {
    fn from(job: Job) -> Self {
        let canonical_path = job.canonical_path();
        let details = job.details;
        Self {
            id: job.id.into(),
            title: details.title.into(),
            slug: job.slug.into(),
            job_type: details.job_type,
            type_label: details.job_type.label().to_string(),
            kind: details.kind,
            status: job.status,
            sponsored: details.sponsored,
            verified: details.verified,
            company_id: job.company.id.into(),
            company_slug: job.company.slug.into(),
            canonical_path,
            description: details.description,
            apply_url: details.apply_url,
            locations: details.locations,
            sectors: details.sectors,
            tags: details.tags,
            salary_min: details.salary_min,
            salary_max: details.salary_max,
            currency: details.currency,
            deadline: details.deadline,
            posted_at: job.posted_at,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

/// Result of a job mutation: the stored job (absent after deletes) and the
/// public paths whose cached render is now stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMutationDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<JobDto>,
    pub revalidate: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPageDto {
    pub job: JobDto,
    pub canonical_path: String,
    /// The requested path differs from the canonical one (case or alias).
    pub redirect: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugChangeDto {
    pub job_id: i64,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackfillReportDto {
    pub examined: usize,
    pub changes: Vec<SlugChangeDto>,
}

impl BackfillReportDto {
    pub fn updated(&self) -> usize {
        self.changes.len()
    }
}
