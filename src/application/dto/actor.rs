use crate::domain::company::CompanyId;

pub const ADMIN_DASHBOARD_PATH: &str = "/admin/jobs";
pub const EMPLOYER_DASHBOARD_PATH: &str = "/employer/dashboard";

/// Who is mutating a job. Resolved by the portal layer before commands run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobActor {
    Admin,
    Employer { company_id: CompanyId },
}

impl JobActor {
    pub fn employer(company_id: CompanyId) -> Self {
        JobActor::Employer { company_id }
    }

    /// Company the actor is confined to; `None` for admins.
    pub fn company_scope(&self) -> Option<CompanyId> {
        match self {
            JobActor::Admin => None,
            JobActor::Employer { company_id } => Some(*company_id),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, JobActor::Admin)
    }

    pub fn dashboard_path(&self) -> &'static str {
        match self {
            JobActor::Admin => ADMIN_DASHBOARD_PATH,
            JobActor::Employer { .. } => EMPLOYER_DASHBOARD_PATH,
        }
    }
}
