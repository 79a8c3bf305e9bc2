use crate::domain::company::CompanyId;
use crate::domain::job::entity::Job;

pub trait JobSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Admins manage every job; employers only their own company's.
pub struct CanManageJobSpec<'a> {
    job: &'a Job,
    company_scope: Option<CompanyId>,
}

impl<'a> CanManageJobSpec<'a> {
    /// `company_scope` is `None` for unrestricted actors.
    pub fn new(job: &'a Job, company_scope: Option<CompanyId>) -> Self {
        Self { job, company_scope }
    }
}

impl JobSpecification for CanManageJobSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.company_scope
            .map(|company_id| self.job.is_owned_by(company_id))
            .unwrap_or(true)
    }
}
