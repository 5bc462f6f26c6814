use poseidon_core::curve_points::{
    CurvePoint, CurvePointRepositoryTrait, CurvePointUpdate, NewCurvePoint,
};
use poseidon_core::Result;

use super::model::{CurvePointChangesetDB, CurvePointDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::curve_points;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct CurvePointRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CurvePointRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CurvePointRepository { pool, writer }
    }
}

#[async_trait]
impl CurvePointRepositoryTrait for CurvePointRepository {
    fn get_by_id(&self, point_id: &str) -> Result<CurvePoint> {
        let mut conn = get_connection(&self.pool)?;
        let row = curve_points::table
            .find(point_id)
            .first::<CurvePointDB>(&mut conn)
            .into_core()?;
        Ok(CurvePoint::from(row))
    }

    fn list(&self) -> Result<Vec<CurvePoint>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = curve_points::table
            .load::<CurvePointDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(CurvePoint::from).collect())
    }

    async fn create(&self, new_point: NewCurvePoint) -> Result<CurvePoint> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CurvePoint> {
                let row = CurvePointDB::from_new(
                    new_point,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );
                let result = diesel::insert_into(curve_points::table)
                    .values(&row)
                    .returning(CurvePointDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(CurvePoint::from(result))
            })
            .await
    }

    async fn update(&self, point_id: &str, update: CurvePointUpdate) -> Result<CurvePoint> {
        let id_owned = point_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<CurvePoint> {
                let changes = CurvePointChangesetDB::from(update);
                diesel::update(curve_points::table.find(id_owned.clone()))
                    .set(&changes)
                    .execute(conn)
                    .into_core()?;
                let row = curve_points::table
                    .find(id_owned)
                    .first::<CurvePointDB>(conn)
                    .into_core()?;
                Ok(CurvePoint::from(row))
            })
            .await
    }

    async fn delete(&self, point_id: &str) -> Result<usize> {
        let id_owned = point_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(curve_points::table.find(id_owned))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
