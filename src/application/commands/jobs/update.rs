use chrono::{DateTime, Utc};

use super::{JobCommandService, JobInput, service::PendingWrite};
use crate::{
    application::{
        dto::{JobActor, JobDto, JobMutationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        company::CompanyId,
        job::{JobPaths, JobStatus, JobUpdate, SlugScope, paths::revalidation_paths},
    },
};

pub struct UpdateJobCommand {
    pub id: i64,
    /// Admin-only reassignment to another company.
    pub company_id: Option<i64>,
    pub status: Option<JobStatus>,
    pub posted_at: Option<DateTime<Utc>>,
    pub input: JobInput,
}

impl UpdateJobCommand {
    pub fn new(id: i64, input: JobInput) -> Self {
        Self {
            id,
            company_id: None,
            status: None,
            posted_at: None,
            input,
        }
    }
}

impl JobCommandService {
    /// Replaces a job's listing content. The slug is always recomputed from
    /// the submitted title; the job's own row never counts as a collision.
    pub async fn update_job(
        &self,
        actor: &JobActor,
        command: UpdateJobCommand,
    ) -> ApplicationResult<JobMutationDto> {
        let existing = self.load_managed_job(actor, command.id).await?;

        let company_id = match (actor, command.company_id) {
            (JobActor::Admin, Some(id)) => {
                let id = CompanyId::new(id)?;
                self.companies
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("company not found"))?
                    .id
            }
            (JobActor::Admin, None) => existing.company.id,
            (JobActor::Employer { company_id }, Some(id)) if i64::from(*company_id) != id => {
                return Err(ApplicationError::forbidden(
                    "employers cannot move jobs to another company",
                ));
            }
            (JobActor::Employer { company_id }, _) => *company_id,
        };

        let status = match actor {
            JobActor::Admin => command.status.unwrap_or(existing.status),
            JobActor::Employer { .. } => JobStatus::Draft,
        };

        let details = command.input.into_details()?;
        let scope = SlugScope::new(details.job_type, details.sponsored, company_id)
            .excluding(existing.id);
        let base = self.slug_service.base_slug(&details.title)?;

        let update = JobUpdate {
            id: existing.id,
            slug: base,
            status,
            company_id,
            details,
            posted_at: command.posted_at,
            updated_at: self.clock.now(),
        };

        let job = self
            .write_with_unique_slug(PendingWrite::Update(update), scope)
            .await?;
        if job.slug != existing.slug {
            tracing::info!(job_id = %job.id, from = %existing.slug, to = %job.slug, "job slug changed");
        }

        let previous = JobPaths::of(&existing);
        let revalidate =
            revalidation_paths(&JobPaths::of(&job), Some(&previous), actor.dashboard_path());
        Ok(JobMutationDto {
            job: Some(JobDto::from(job)),
            revalidate: revalidate.into_iter().collect(),
        })
    }
}
