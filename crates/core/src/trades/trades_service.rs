use log::debug;
use std::sync::Arc;

use super::trades_model::{NewTrade, Trade, TradeUpdate};
use super::trades_traits::{TradeRepositoryTrait, TradeServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use async_trait::async_trait;

/// Service for managing trades.
pub struct TradeService {
    repository: Arc<dyn TradeRepositoryTrait>,
}

impl TradeService {
    pub fn new(repository: Arc<dyn TradeRepositoryTrait>) -> Self {
        TradeService { repository }
    }
}

#[async_trait]
impl TradeServiceTrait for TradeService {
    fn get_trade(&self, trade_id: &str) -> Result<Trade> {
        self.repository.get_by_id(trade_id)
    }

    fn get_trades(&self) -> Result<Vec<Trade>> {
        self.repository.list()
    }

    async fn create_trade(&self, new_trade: NewTrade) -> Result<Trade> {
        new_trade.validate()?;
        debug!("Creating trade for account {}", new_trade.account);
        self.repository.create(new_trade).await
    }

    async fn update_trade(&self, trade_id: &str, update: TradeUpdate) -> Result<Trade> {
        update.validate()?;
        self.repository.update(trade_id, update).await
    }

    async fn delete_trade(&self, trade_id: &str) -> Result<()> {
        let affected = self.repository.delete(trade_id).await?;
        if affected == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Trade {} not found",
                trade_id
            ))));
        }
        Ok(())
    }
}
