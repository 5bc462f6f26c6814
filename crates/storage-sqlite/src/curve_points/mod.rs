pub mod model;
pub mod repository;

pub use model::CurvePointDB;
pub use repository::CurvePointRepository;
