// src/application/commands/jobs/delete.rs
use super::JobCommandService;
use crate::{
    application::{
        dto::{JobActor, JobMutationDto},
        error::ApplicationResult,
    },
    domain::job::{JobPaths, paths::revalidation_paths},
};

pub struct DeleteJobCommand {
    pub id: i64,
}

impl JobCommandService {
    pub async fn delete_job(
        &self,
        actor: &JobActor,
        command: DeleteJobCommand,
    ) -> ApplicationResult<JobMutationDto> {
        let job = self.load_managed_job(actor, command.id).await?;
        self.repo.delete(job.id).await?;
        tracing::info!(job_id = %job.id, slug = %job.slug, "job deleted");

        let revalidate = revalidation_paths(&JobPaths::of(&job), None, actor.dashboard_path());
        Ok(JobMutationDto {
            job: None,
            revalidate: revalidate.into_iter().collect(),
        })
    }
}
