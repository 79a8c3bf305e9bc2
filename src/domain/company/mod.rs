pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Company, NewCompany};
pub use repository::CompanyRepository;
pub use value_objects::{CompanyId, CompanyName, CompanySlug};
