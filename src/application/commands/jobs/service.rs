// src/application/commands/jobs/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::JobActor,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        company::CompanyRepository,
        job::{
            Job, JobId, JobRepository, JobSlug, JobUpdate, NewJob, SlugScope,
            services::JobSlugService,
            specifications::{CanManageJobSpec, JobSpecification},
        },
    },
};

pub const DEFAULT_MAX_SLUG_ATTEMPTS: u32 = 5;

pub struct JobCommandService {
    pub(super) repo: Arc<dyn JobRepository>,
    pub(super) companies: Arc<dyn CompanyRepository>,
    pub(super) slug_service: Arc<JobSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) max_slug_attempts: u32,
}

/// A write that still needs its final slug.
pub(super) enum PendingWrite {
    Insert(NewJob),
    Update(JobUpdate),
}

impl PendingWrite {
    fn slug(&self) -> &JobSlug {
        match self {
            PendingWrite::Insert(job) => &job.slug,
            PendingWrite::Update(update) => &update.slug,
        }
    }

    fn set_slug(&mut self, slug: JobSlug) {
        match self {
            PendingWrite::Insert(job) => job.slug = slug,
            PendingWrite::Update(update) => update.slug = slug,
        }
    }
}

impl JobCommandService {
    pub fn new(
        repo: Arc<dyn JobRepository>,
        companies: Arc<dyn CompanyRepository>,
        slug_service: Arc<JobSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            companies,
            slug_service,
            clock,
            max_slug_attempts: DEFAULT_MAX_SLUG_ATTEMPTS,
        }
    }

    pub fn with_max_slug_attempts(mut self, attempts: u32) -> Self {
        self.max_slug_attempts = attempts.max(1);
        self
    }

    pub(super) async fn load_managed_job(
        &self,
        actor: &JobActor,
        id: i64,
    ) -> ApplicationResult<Job> {
        let id = JobId::new(id)?;
        let job = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("job not found"))?;

        // Employers must not learn that other companies' jobs exist.
        if !CanManageJobSpec::new(&job, actor.company_scope()).is_satisfied() {
            return Err(ApplicationError::not_found("job not found"));
        }

        Ok(job)
    }

    /// Resolves a free slug for `write` (whose current slug is the base) and
    /// persists it in the same transaction.
    ///
    /// A unique-index violation means another writer claimed the slug between
    /// check and write; the transaction is dropped and resolution restarts.
    pub(super) async fn write_with_unique_slug(
        &self,
        mut write: PendingWrite,
        scope: SlugScope,
    ) -> ApplicationResult<Job> {
        let base = write.slug().clone();
        let mut attempt = 1u32;

        loop {
            let mut tx = self.repo.begin().await?;
            let slug = self.slug_service.unique_slug(&mut *tx, &base, &scope).await?;
            write.set_slug(slug);

            let result = match &write {
                PendingWrite::Insert(job) => tx.insert(job.clone()).await,
                PendingWrite::Update(update) => tx.update(update.clone()).await,
            };

            match result {
                Ok(job) => {
                    tx.commit().await?;
                    return Ok(job);
                }
                Err(err) if err.is_conflict() && attempt < self.max_slug_attempts => {
                    tracing::warn!(
                        attempt,
                        slug = %write.slug(),
                        error = %err,
                        "job slug claimed concurrently, retrying"
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
