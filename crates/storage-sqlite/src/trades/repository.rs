use poseidon_core::trades::{NewTrade, Trade, TradeRepositoryTrait, TradeUpdate};
use poseidon_core::Result;

use super::model::{TradeChangesetDB, TradeDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::trades;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct TradeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TradeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        TradeRepository { pool, writer }
    }
}

#[async_trait]
impl TradeRepositoryTrait for TradeRepository {
    fn get_by_id(&self, trade_id: &str) -> Result<Trade> {
        let mut conn = get_connection(&self.pool)?;
        let row = trades::table
            .find(trade_id)
            .first::<TradeDB>(&mut conn)
            .into_core()?;
        Ok(Trade::from(row))
    }

    fn list(&self) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = trades::table.load::<TradeDB>(&mut conn).into_core()?;
        Ok(rows.into_iter().map(Trade::from).collect())
    }

    async fn create(&self, new_trade: NewTrade) -> Result<Trade> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Trade> {
                let row = TradeDB::from_new(
                    new_trade,
                    Uuid::new_v4().to_string(),
                    Utc::now().naive_utc(),
                );
                let result = diesel::insert_into(trades::table)
                    .values(&row)
                    .returning(TradeDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(Trade::from(result))
            })
            .await
    }

    async fn update(&self, trade_id: &str, update: TradeUpdate) -> Result<Trade> {
        let id_owned = trade_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Trade> {
                let changes = TradeChangesetDB::from_update(update, Utc::now().naive_utc());
                diesel::update(trades::table.find(id_owned.clone()))
                    .set(&changes)
                    .execute(conn)
                    .into_core()?;
                let row = trades::table
                    .find(id_owned)
                    .first::<TradeDB>(conn)
                    .into_core()?;
                Ok(Trade::from(row))
            })
            .await
    }

    async fn delete(&self, trade_id: &str) -> Result<usize> {
        let id_owned = trade_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(trades::table.find(id_owned))
                    .execute(conn)
                    .into_core()
            })
            .await
    }
}
