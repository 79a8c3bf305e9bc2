use super::JobCommandService;
use crate::{
    application::{
        dto::{JobActor, JobDto, JobMutationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::job::{JobPaths, JobStatus, paths::revalidation_paths},
};

pub struct SetJobStatusCommand {
    pub id: i64,
    pub status: JobStatus,
}

impl JobCommandService {
    pub async fn set_status(
        &self,
        actor: &JobActor,
        command: SetJobStatusCommand,
    ) -> ApplicationResult<JobMutationDto> {
        if !actor.is_admin() {
            return Err(ApplicationError::forbidden(
                "only admins can change job status",
            ));
        }

        let job = self.load_managed_job(actor, command.id).await?;
        let job = if job.status == command.status {
            job
        } else {
            let updated = self
                .repo
                .set_status(job.id, command.status, self.clock.now())
                .await?;
            tracing::info!(job_id = %updated.id, status = %updated.status, "job status changed");
            updated
        };

        let revalidate = revalidation_paths(&JobPaths::of(&job), None, actor.dashboard_path());
        Ok(JobMutationDto {
            job: Some(JobDto::from(job)),
            revalidate: revalidate.into_iter().collect(),
        })
    }
}
