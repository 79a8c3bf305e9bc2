// src/domain/job/entity.rs
use crate::domain::company::{CompanyId, CompanySlug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::job::paths;
use crate::domain::job::repository::SlugScope;
use crate::domain::job::value_objects::{JobId, JobKind, JobSlug, JobStatus, JobTitle, JobType};
use chrono::{DateTime, Utc};

/// Editable listing content shared by inserts, updates and stored jobs.
#[derive(Debug, Clone)]
pub struct JobDetails {
    pub title: JobTitle,
    pub job_type: JobType,
    pub kind: JobKind,
    pub sponsored: bool,
    pub verified: bool,
    pub description: Option<String>,
    pub apply_url: String,
    pub locations: Vec<String>,
    pub sectors: Vec<String>,
    pub tags: Vec<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub currency: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
}

impl JobDetails {
    pub fn validate(&self) -> DomainResult<()> {
        if self.apply_url.trim().is_empty() {
            return Err(DomainError::Validation("apply url cannot be empty".into()));
        }
        if let (Some(min), Some(max)) = (self.salary_min, self.salary_max) {
            if min > max {
                return Err(DomainError::Validation(
                    "salary minimum cannot exceed maximum".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Owning company as joined onto a job row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRef {
    pub id: CompanyId,
    pub slug: CompanySlug,
}

#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub slug: JobSlug,
    pub status: JobStatus,
    pub company: CompanyRef,
    pub details: JobDetails,
    pub posted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    pub fn canonical_path(&self) -> String {
        paths::canonical_path(
            &self.slug,
            self.details.job_type,
            self.details.sponsored,
            Some(&self.company.slug),
        )
    }

    pub fn is_owned_by(&self, company_id: CompanyId) -> bool {
        self.company.id == company_id
    }
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub slug: JobSlug,
    pub status: JobStatus,
    pub company_id: CompanyId,
    pub details: JobDetails,
    pub posted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of a job's editable state; the slug is always recomputed.
#[derive(Debug, Clone)]
pub struct JobUpdate {
    pub id: JobId,
    pub slug: JobSlug,
    pub status: JobStatus,
    pub company_id: CompanyId,
    pub details: JobDetails,
    pub posted_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// A job's slug as persisted, read without validation so that malformed
/// legacy values can still be found and rewritten.
#[derive(Debug, Clone)]
pub struct StoredJobSlug {
    pub id: JobId,
    pub title: String,
    pub slug: String,
    pub job_type: JobType,
    pub sponsored: bool,
    pub company_id: CompanyId,
    pub created_at: DateTime<Utc>,
}

impl StoredJobSlug {
    /// Scope the slug must be unique in, ignoring the job itself.
    pub fn scope(&self) -> SlugScope {
        SlugScope::new(self.job_type, self.sponsored, self.company_id).excluding(self.id)
    }
}
