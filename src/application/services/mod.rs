// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{companies::CompanyCommandService, jobs::JobCommandService},
        ports::{time::Clock, util::SlugGenerator},
        queries::jobs::JobQueryService,
    },
    domain::{
        company::CompanyRepository,
        job::{JobRepository, services::JobSlugService},
    },
};

pub struct ApplicationServices {
    pub job_commands: Arc<JobCommandService>,
    pub job_queries: Arc<JobQueryService>,
    pub company_commands: Arc<CompanyCommandService>,
}

impl ApplicationServices {
    pub fn new(
        job_repo: Arc<dyn JobRepository>,
        company_repo: Arc<dyn CompanyRepository>,
        clock: Arc<dyn Clock>,
        job_slugger: Arc<dyn SlugGenerator>,
        company_slugger: Arc<dyn SlugGenerator>,
        max_slug_attempts: u32,
    ) -> Self {
        let slug_service = Arc::new(JobSlugService::new(Arc::clone(&job_slugger)));

        let job_commands = Arc::new(
            JobCommandService::new(
                Arc::clone(&job_repo),
                Arc::clone(&company_repo),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )
            .with_max_slug_attempts(max_slug_attempts),
        );

        let job_queries = Arc::new(JobQueryService::new(
            Arc::clone(&job_repo),
            Arc::clone(&company_repo),
        ));

        let company_commands = Arc::new(CompanyCommandService::new(
            Arc::clone(&company_repo),
            Arc::clone(&company_slugger),
            Arc::clone(&clock),
        ));

        Self {
            job_commands,
            job_queries,
            company_commands,
        }
    }
}
