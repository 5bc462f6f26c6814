use crate::errors::Result;
use crate::trades::trades_model::{NewTrade, Trade, TradeUpdate};
use async_trait::async_trait;

/// Trait for trade repository operations
#[async_trait]
pub trait TradeRepositoryTrait: Send + Sync {
    fn get_by_id(&self, trade_id: &str) -> Result<Trade>;
    fn list(&self) -> Result<Vec<Trade>>;
    async fn create(&self, new_trade: NewTrade) -> Result<Trade>;
    async fn update(&self, trade_id: &str, update: TradeUpdate) -> Result<Trade>;
    async fn delete(&self, trade_id: &str) -> Result<usize>;
}

/// Trait for trade service operations
#[async_trait]
pub trait TradeServiceTrait: Send + Sync {
    fn get_trade(&self, trade_id: &str) -> Result<Trade>;
    fn get_trades(&self) -> Result<Vec<Trade>>;
    async fn create_trade(&self, new_trade: NewTrade) -> Result<Trade>;
    async fn update_trade(&self, trade_id: &str, update: TradeUpdate) -> Result<Trade>;
    async fn delete_trade(&self, trade_id: &str) -> Result<()>;
}
