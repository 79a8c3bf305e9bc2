// src/application/commands/jobs/backfill.rs
use super::JobCommandService;
use crate::application::{
    dto::{BackfillReportDto, SlugChangeDto},
    error::ApplicationResult,
};

impl JobCommandService {
    /// Recomputes every job's slug from its title, oldest job first, so older
    /// postings keep the unsuffixed slug. Each job runs in its own transaction.
    /// Stored slugs are compared as raw text, so malformed legacy values are
    /// rewritten rather than rejected.
    pub async fn backfill_slugs(&self) -> ApplicationResult<BackfillReportDto> {
        let stored = self.repo.list_stored_slugs().await?;
        let mut report = BackfillReportDto {
            examined: stored.len(),
            changes: Vec::new(),
        };

        for job in stored {
            let mut tx = self.repo.begin().await?;
            let target = self
                .slug_service
                .unique_slug_for_title(&mut *tx, &job.title, &job.scope())
                .await?;

            if target.as_str() != job.slug {
                tx.set_slug(job.id, &target, self.clock.now()).await?;
                tracing::info!(job_id = %job.id, from = %job.slug, to = %target, "job slug backfilled");
                report.changes.push(SlugChangeDto {
                    job_id: job.id.into(),
                    from: job.slug,
                    to: target.to_string(),
                });
            }
            tx.commit().await?;
        }

        tracing::info!(
            examined = report.examined,
            updated = report.updated(),
            "slug backfill complete"
        );
        Ok(report)
    }
}
