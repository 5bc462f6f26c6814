use log::debug;
use std::sync::Arc;

use super::curve_points_model::{CurvePoint, CurvePointUpdate, NewCurvePoint};
use super::curve_points_traits::{CurvePointRepositoryTrait, CurvePointServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use async_trait::async_trait;

/// Service for managing curve points.
pub struct CurvePointService {
    repository: Arc<dyn CurvePointRepositoryTrait>,
}

impl CurvePointService {
    pub fn new(repository: Arc<dyn CurvePointRepositoryTrait>) -> Self {
        CurvePointService { repository }
    }
}

#[async_trait]
impl CurvePointServiceTrait for CurvePointService {
    fn get_curve_point(&self, point_id: &str) -> Result<CurvePoint> {
        self.repository.get_by_id(point_id)
    }

    fn get_curve_points(&self) -> Result<Vec<CurvePoint>> {
        self.repository.list()
    }

    async fn create_curve_point(&self, new_point: NewCurvePoint) -> Result<CurvePoint> {
        new_point.validate()?;
        debug!("Creating curve point for curve {}", new_point.curve_id);
        self.repository.create(new_point).await
    }

    async fn update_curve_point(
        &self,
        point_id: &str,
        update: CurvePointUpdate,
    ) -> Result<CurvePoint> {
        update.validate()?;
        self.repository.update(point_id, update).await
    }

    async fn delete_curve_point(&self, point_id: &str) -> Result<()> {
        let affected = self.repository.delete(point_id).await?;
        if affected == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Curve point {} not found",
                point_id
            ))));
        }
        Ok(())
    }
}
