mod canonical;
mod get_by_path;
mod service;

pub use canonical::CanonicalPathQuery;
pub use get_by_path::GetJobByPathQuery;
pub use service::JobQueryService;
