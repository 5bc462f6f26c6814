pub mod model;
pub mod repository;

pub use model::BidDB;
pub use repository::BidRepository;
