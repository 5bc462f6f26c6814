use poseidon_core::bids::{Bid, BidRepositoryTrait, BidUpdate, NewBid};
use poseidon_core::Result;

use super::model::{BidChangesetDB, BidDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::bids;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct BidRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BidRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BidRepository { pool, writer }
    }
}

#[async_trait]
impl BidRepositoryTrait for BidRepository {
    fn get_by_id(&self, bid_id: &str) -> Result<Bid> {
        let mut conn = get_connection(&self.pool)?;
        let row = bids::table
            .find(bid_id)
            .first::<BidDB>(&mut conn)
            .into_core()?;
        Ok(Bid::from(row))
    }

    fn list(&self) -> Result<Vec<Bid>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = bids::table.load::<BidDB>(&mut conn).into_core()?;
        Ok(rows.into_iter().map(Bid::from).collect())
    }

    async fn create(&self, new_bid: NewBid) -> Result<Bid> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Bid> {
                let row = BidDB::from_new(
                    new_bid,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );
                let result = diesel::insert_into(bids::table)
                    .values(&row)
                    .returning(BidDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Bid::from(result))
            })
            .await
    }

    async fn update(&self, bid_id: &str, update: BidUpdate) -> Result<Bid> {
        let id_owned = bid_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Bid> {
                let changes = BidChangesetDB::from_update(update, Utc::now().naive_utc());
                diesel::update(bids::table.find(id_owned.clone()))
                    .set(&changes)
                    .execute(conn)
                    .into_core()?;
                // An absent id surfaces here as NotFound.
                let row = bids::table
                    .find(id_owned)
                    .first::<BidDB>(conn)
                    .into_core()?;
                Ok(Bid::from(row))
            })
            .await
    }

    async fn delete(&self, bid_id: &str) -> Result<usize> {
        let id_owned = bid_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(bids::table.find(id_owned))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
