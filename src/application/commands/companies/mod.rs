mod register;
mod service;

pub use register::RegisterCompanyCommand;
pub use service::CompanyCommandService;
