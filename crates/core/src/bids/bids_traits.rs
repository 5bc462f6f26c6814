use crate::bids::bids_model::{Bid, BidUpdate, NewBid};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for bid repository operations
#[async_trait]
pub trait BidRepositoryTrait: Send + Sync {
    fn get_by_id(&self, bid_id: &str) -> Result<Bid>;
    fn list(&self) -> Result<Vec<Bid>>;
    async fn create(&self, new_bid: NewBid) -> Result<Bid>;
    async fn update(&self, bid_id: &str, update: BidUpdate) -> Result<Bid>;
    async fn delete(&self, bid_id: &str) -> Result<usize>;
}

/// Trait for bid service operations
#[async_trait]
pub trait BidServiceTrait: Send + Sync {
    fn get_bid(&self, bid_id: &str) -> Result<Bid>;
    fn get_bids(&self) -> Result<Vec<Bid>>;
    async fn create_bid(&self, new_bid: NewBid) -> Result<Bid>;
    async fn update_bid(&self, bid_id: &str, update: BidUpdate) -> Result<Bid>;
    async fn delete_bid(&self, bid_id: &str) -> Result<()>;
}
