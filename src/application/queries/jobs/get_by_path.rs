// src/application/queries/jobs/get_by_path.rs
use super::JobQueryService;
use crate::{
    application::{
        dto::{JobDto, JobPageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::job::{Job, JobRoute, SlugScope},
};

pub struct GetJobByPathQuery {
    pub path: String,
}

impl JobQueryService {
    /// Resolves a public job URL to its published job.
    ///
    /// Sponsored jobs are only found under their company's namespace and
    /// organic ones only under the type namespace; anything else is not found.
    pub async fn get_published_by_path(
        &self,
        query: GetJobByPathQuery,
    ) -> ApplicationResult<JobPageDto> {
        let route = JobRoute::parse(&query.path)
            .ok_or_else(|| ApplicationError::not_found("no job at this path"))?;

        let job = match &route {
            JobRoute::Organic { job_type, slug } => {
                self.repo
                    .find_in_scope(slug, &SlugScope::organic(*job_type))
                    .await?
            }
            JobRoute::Sponsored {
                company,
                job_type,
                slug,
            } => match self.companies.find_by_slug(company).await? {
                Some(company) => {
                    self.repo
                        .find_in_scope(slug, &SlugScope::sponsored(*job_type, company.id))
                        .await?
                }
                None => None,
            },
            JobRoute::TypeListing(_) | JobRoute::CompanyPage(_) => None,
        };

        let job = job
            .filter(|job: &Job| job.status.is_public())
            .ok_or_else(|| ApplicationError::not_found("job not found"))?;

        let canonical_path = job.canonical_path();
        let redirect = !same_path(&query.path, &canonical_path);
        Ok(JobPageDto {
            job: JobDto::from(job),
            canonical_path,
            redirect,
        })
    }
}

fn same_path(requested: &str, canonical: &str) -> bool {
    let requested = requested.split(['?', '#']).next().unwrap_or_default();
    requested.trim_matches('/') == canonical.trim_matches('/')
}
