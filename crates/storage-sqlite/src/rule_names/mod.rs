pub mod model;
pub mod repository;

pub use model::RuleNameDB;
pub use repository::RuleNameRepository;
