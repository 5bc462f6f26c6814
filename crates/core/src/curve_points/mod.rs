//! Curve points module - domain models, services, and traits.

mod curve_points_model;
mod curve_points_service;
mod curve_points_traits;

pub use curve_points_model::{CurvePoint, CurvePointUpdate, NewCurvePoint};
pub use curve_points_service::CurvePointService;
pub use curve_points_traits::{CurvePointRepositoryTrait, CurvePointServiceTrait};
