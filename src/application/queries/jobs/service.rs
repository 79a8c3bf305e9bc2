use std::sync::Arc;

use crate::domain::{company::CompanyRepository, job::JobRepository};

pub struct JobQueryService {
    pub(super) repo: Arc<dyn JobRepository>,
    pub(super) companies: Arc<dyn CompanyRepository>,
}

impl JobQueryService {
    pub fn new(repo: Arc<dyn JobRepository>, companies: Arc<dyn CompanyRepository>) -> Self {
        Self { repo, companies }
    }
}
