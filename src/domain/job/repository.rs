use crate::domain::company::CompanyId;
use crate::domain::errors::DomainResult;
use crate::domain::job::entity::{Job, JobUpdate, NewJob, StoredJobSlug};
use crate::domain::job::value_objects::{JobId, JobSlug, JobStatus, JobType};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Fields within which a job slug must be unique.
///
/// Sponsored jobs live in their company's namespace, so the company takes
/// part in the scope; organic jobs are scoped by type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugScope {
    pub job_type: JobType,
    pub sponsored: bool,
    pub company_id: Option<CompanyId>,
    pub exclude_id: Option<JobId>,
}

impl SlugScope {
    pub fn new(job_type: JobType, sponsored: bool, company_id: CompanyId) -> Self {
        Self {
            job_type,
            sponsored,
            company_id: sponsored.then_some(company_id),
            exclude_id: None,
        }
    }

    pub fn organic(job_type: JobType) -> Self {
        Self {
            job_type,
            sponsored: false,
            company_id: None,
            exclude_id: None,
        }
    }

    pub fn sponsored(job_type: JobType, company_id: CompanyId) -> Self {
        Self::new(job_type, true, company_id)
    }

    pub fn of(job: &Job) -> Self {
        Self::new(job.details.job_type, job.details.sponsored, job.company.id)
    }

    /// Ignore `id` when probing, so a job never collides with itself.
    pub fn excluding(mut self, id: JobId) -> Self {
        self.exclude_id = Some(id);
        self
    }

    /// Whether `job` would collide with `slug` inside this scope.
    pub fn matches(&self, job: &Job, slug: &JobSlug) -> bool {
        if job.slug != *slug
            || job.details.job_type != self.job_type
            || job.details.sponsored != self.sponsored
        {
            return false;
        }
        if self.sponsored {
            if let Some(company_id) = self.company_id {
                if job.company.id != company_id {
                    return false;
                }
            }
        }
        self.exclude_id != Some(job.id)
    }
}

/// Unit of work over the jobs table. Dropping it without `commit` rolls back.
#[async_trait]
pub trait JobTransaction: Send {
    async fn slug_exists(&mut self, slug: &JobSlug, scope: &SlugScope) -> DomainResult<bool>;
    async fn insert(&mut self, job: NewJob) -> DomainResult<Job>;
    async fn update(&mut self, update: JobUpdate) -> DomainResult<Job>;
    async fn set_slug(
        &mut self,
        id: JobId,
        slug: &JobSlug,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()>;
    async fn commit(self: Box<Self>) -> DomainResult<()>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn begin(&self) -> DomainResult<Box<dyn JobTransaction>>;
    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<Job>>;
    async fn find_in_scope(&self, slug: &JobSlug, scope: &SlugScope) -> DomainResult<Option<Job>>;
    /// Stored slug of every job, oldest job first. Slugs and titles are
    /// returned as persisted, valid or not.
    async fn list_stored_slugs(&self) -> DomainResult<Vec<StoredJobSlug>>;
    async fn set_status(
        &self,
        id: JobId,
        status: JobStatus,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Job>;
    async fn delete(&self, id: JobId) -> DomainResult<()>;
}
