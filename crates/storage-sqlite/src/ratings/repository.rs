use poseidon_core::ratings::{NewRating, Rating, RatingRepositoryTrait, RatingUpdate};
use poseidon_core::Result;

use super::model::{RatingChangesetDB, RatingDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::ratings;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct RatingRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RatingRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RatingRepository { pool, writer }
    }
}

#[async_trait]
impl RatingRepositoryTrait for RatingRepository {
    fn get_by_id(&self, rating_id: &str) -> Result<Rating> {
        let mut conn = get_connection(&self.pool)?;
        let row = ratings::table
            .find(rating_id)
            .first::<RatingDB>(&mut conn)
            .into_core()?;
        Ok(Rating::from(row))
    }

    fn list(&self) -> Result<Vec<Rating>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = ratings::table.load::<RatingDB>(&mut conn).into_core()?;
        Ok(rows.into_iter().map(Rating::from).collect())
    }

    async fn create(&self, new_rating: NewRating) -> Result<Rating> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Rating> {
                let row = RatingDB::from_new(new_rating, Uuid::new_v4().to_string());
                let result = diesel::insert_into(ratings::table)
                    .values(&row)
                    .returning(RatingDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Rating::from(result))
            })
            .await
    }

    async fn update(&self, rating_id: &str, update: RatingUpdate) -> Result<Rating> {
        let id_owned = rating_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Rating> {
                let changes = RatingChangesetDB::from(update);
                diesel::update(ratings::table.find(id_owned.clone()))
                    .set(&changes)
                    .execute(conn)
                    .into_core()?;
                let row = ratings::table
                    .find(id_owned)
                    .first::<RatingDB>(conn)
                    .into_core()?;
                Ok(Rating::from(row))
            })
            .await
    }

    async fn delete(&self, rating_id: &str) -> Result<usize> {
        let id_owned = rating_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(ratings::table.find(id_owned))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
