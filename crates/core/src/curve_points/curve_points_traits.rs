use crate::curve_points::curve_points_model::{CurvePoint, CurvePointUpdate, NewCurvePoint};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for curve point repository operations
#[async_trait]
pub trait CurvePointRepositoryTrait: Send + Sync {
    fn get_by_id(&self, point_id: &str) -> Result<CurvePoint>;
    fn list(&self) -> Result<Vec<CurvePoint>>;
    async fn create(&self, new_point: NewCurvePoint) -> Result<CurvePoint>;
    async fn update(&self, point_id: &str, update: CurvePointUpdate) -> Result<CurvePoint>;
    async fn delete(&self, point_id: &str) -> Result<usize>;
}

/// Trait for curve point service operations
#[async_trait]
pub trait CurvePointServiceTrait: Send + Sync {
    fn get_curve_point(&self, point_id: &str) -> Result<CurvePoint>;
    fn get_curve_points(&self) -> Result<Vec<CurvePoint>>;
    async fn create_curve_point(&self, new_point: NewCurvePoint) -> Result<CurvePoint>;
    async fn update_curve_point(
        &self,
        point_id: &str,
        update: CurvePointUpdate,
    ) -> Result<CurvePoint>;
    async fn delete_curve_point(&self, point_id: &str) -> Result<()>;
}
