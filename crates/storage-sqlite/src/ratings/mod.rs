pub mod model;
pub mod repository;

pub use model::RatingDB;
pub use repository::RatingRepository;
