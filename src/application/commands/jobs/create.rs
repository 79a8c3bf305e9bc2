// src/application/commands/jobs/create.rs
use chrono::{DateTime, Utc};

use super::{JobCommandService, JobInput, service::PendingWrite};
use crate::{
    application::{
        dto::{JobActor, JobDto, JobMutationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        company::CompanyId,
        job::{JobPaths, JobStatus, NewJob, SlugScope, paths::revalidation_paths},
    },
};

pub struct CreateJobCommand {
    /// Required for admins; employers may omit it or repeat their own.
    pub company_id: Option<i64>,
    /// Ignored for employers, whose jobs always start as drafts.
    pub status: Option<JobStatus>,
    pub posted_at: Option<DateTime<Utc>>,
    pub input: JobInput,
}

impl CreateJobCommand {
    pub fn new(input: JobInput) -> Self {
        Self {
            company_id: None,
            status: None,
            posted_at: None,
            input,
        }
    }

    pub fn for_company(mut self, company_id: i64) -> Self {
        self.company_id = Some(company_id);
        self
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl JobCommandService {
    pub async fn create_job(
        &self,
        actor: &JobActor,
        command: CreateJobCommand,
    ) -> ApplicationResult<JobMutationDto> {
        let company_id = owning_company(actor, command.company_id)?;
        let company = self
            .companies
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("company not found"))?;

        let details = command.input.into_details()?;
        let status = match actor {
            JobActor::Admin => command.status.unwrap_or(JobStatus::Published),
            JobActor::Employer { .. } => JobStatus::Draft,
        };
        let now = self.clock.now();
        let scope = SlugScope::new(details.job_type, details.sponsored, company.id);
        let base = self.slug_service.base_slug(&details.title)?;

        let new_job = NewJob {
            slug: base,
            status,
            company_id: company.id,
            details,
            posted_at: command.posted_at.unwrap_or(now),
            created_at: now,
        };

        let job = self
            .write_with_unique_slug(PendingWrite::Insert(new_job), scope)
            .await?;
        tracing::info!(job_id = %job.id, slug = %job.slug, company = %company.slug, "job created");

        let revalidate = revalidation_paths(&JobPaths::of(&job), None, actor.dashboard_path());
        Ok(JobMutationDto {
            job: Some(JobDto::from(job)),
            revalidate: revalidate.into_iter().collect(),
        })
    }
}

fn owning_company(actor: &JobActor, requested: Option<i64>) -> ApplicationResult<CompanyId> {
    match (actor, requested) {
        (JobActor::Admin, Some(id)) => Ok(CompanyId::new(id)?),
        (JobActor::Admin, None) => Err(ApplicationError::validation("company is required")),
        (JobActor::Employer { company_id }, None) => Ok(*company_id),
        (JobActor::Employer { company_id }, Some(id)) if i64::from(*company_id) == id => {
            Ok(*company_id)
        }
        (JobActor::Employer { .. }, Some(_)) => Err(ApplicationError::forbidden(
            "employers can only post jobs for their own company",
        )),
    }
}
