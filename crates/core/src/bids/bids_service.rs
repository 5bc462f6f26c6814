use log::debug;
use std::sync::Arc;

use super::bids_model::{Bid, BidUpdate, NewBid};
use super::bids_traits::{BidRepositoryTrait, BidServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use async_trait::async_trait;

/// Service for managing bids.
pub struct BidService {
    repository: Arc<dyn BidRepositoryTrait>,
}

impl BidService {
    pub fn new(repository: Arc<dyn BidRepositoryTrait>) -> Self {
        BidService { repository }
    }
}

#[async_trait]
impl BidServiceTrait for BidService {
    fn get_bid(&self, bid_id: &str) -> Result<Bid> {
        self.repository.get_by_id(bid_id)
    }

    fn get_bids(&self) -> Result<Vec<Bid>> {
        self.repository.list()
    }

    async fn create_bid(&self, new_bid: NewBid) -> Result<Bid> {
        new_bid.validate()?;
        debug!("Creating bid for account {}", new_bid.account);
        self.repository.create(new_bid).await
    }

    async fn update_bid(&self, bid_id: &str, update: BidUpdate) -> Result<Bid> {
        update.validate()?;
        self.repository.update(bid_id, update).await
    }

    async fn delete_bid(&self, bid_id: &str) -> Result<()> {
        let affected = self.repository.delete(bid_id).await?;
        if affected == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Bid {} not found",
                bid_id
            ))));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::RwLock;

    struct MockBidRepository {
        bids: RwLock<Vec<Bid>>,
        write_calls: AtomicUsize,
    }

    impl MockBidRepository {
        fn new() -> Self {
            Self {
                bids: RwLock::new(Vec::new()),
                write_calls: AtomicUsize::new(0),
            }
        }
    }

    fn stamp() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[async_trait]
    impl BidRepositoryTrait for MockBidRepository {
        fn get_by_id(&self, bid_id: &str) -> Result<Bid> {
            self.bids
                .read()
                .unwrap()
                .iter()
                .find(|b| b.id == bid_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound("Record not found".to_string()))
                })
        }

        fn list(&self) -> Result<Vec<Bid>> {
            Ok(self.bids.read().unwrap().clone())
        }

        async fn create(&self, new_bid: NewBid) -> Result<Bid> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            let mut bids = self.bids.write().unwrap();
            let bid = Bid {
                id: format!("bid-{}", bids.len() + 1),
                account: new_bid.account,
                bid_type: new_bid.bid_type,
                bid_quantity: new_bid.bid_quantity,
                ask_quantity: new_bid.ask_quantity,
                bid: new_bid.bid,
                ask: new_bid.ask,
                benchmark: new_bid.benchmark,
                commentary: new_bid.commentary,
                creation_date: stamp(),
                revision_date: None,
            };
            bids.push(bid.clone());
            Ok(bid)
        }

        async fn update(&self, bid_id: &str, update: BidUpdate) -> Result<Bid> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            let mut bids = self.bids.write().unwrap();
            let bid = bids.iter_mut().find(|b| b.id == bid_id).ok_or_else(|| {
                Error::Database(DatabaseError::NotFound("Record not found".to_string()))
            })?;
            bid.account = update.account;
            bid.bid_type = update.bid_type;
            bid.bid_quantity = update.bid_quantity;
            bid.ask_quantity = update.ask_quantity;
            bid.bid = update.bid;
            bid.ask = update.ask;
            bid.benchmark = update.benchmark;
            bid.commentary = update.commentary;
            bid.revision_date = Some(stamp());
            Ok(bid.clone())
        }

        async fn delete(&self, bid_id: &str) -> Result<usize> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            let mut bids = self.bids.write().unwrap();
            let before = bids.len();
            bids.retain(|b| b.id != bid_id);
            Ok(before - bids.len())
        }
    }

    fn new_bid(account: &str, quantity: Option<rust_decimal::Decimal>) -> NewBid {
        NewBid {
            account: account.to_string(),
            bid_type: "Buy".to_string(),
            bid_quantity: quantity,
            ask_quantity: None,
            bid: None,
            ask: None,
            benchmark: None,
            commentary: None,
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_equal_record() {
        let repo = Arc::new(MockBidRepository::new());
        let service = BidService::new(repo.clone());

        let created = service
            .create_bid(new_bid("ACC1", Some(dec!(10.5))))
            .await
            .unwrap();
        let fetched = service.get_bid(&created.id).unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.account, "ACC1");
        assert_eq!(fetched.bid_quantity, Some(dec!(10.5)));
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_repository() {
        let repo = Arc::new(MockBidRepository::new());
        let service = BidService::new(repo.clone());

        let result = service.create_bid(new_bid("", None)).await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(repo.write_calls.load(Ordering::SeqCst), 0);

        let result = service.create_bid(new_bid("ACC1", Some(dec!(-1)))).await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(repo.write_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_stamps_revision() {
        let repo = Arc::new(MockBidRepository::new());
        let service = BidService::new(repo.clone());

        let created = service
            .create_bid(new_bid("ACC1", Some(dec!(10.5))))
            .await
            .unwrap();

        let update = BidUpdate {
            account: "ACC2".to_string(),
            bid_type: "Sell".to_string(),
            bid_quantity: Some(dec!(3)),
            ask_quantity: None,
            bid: None,
            ask: None,
            benchmark: None,
            commentary: Some("revised".to_string()),
        };
        let updated = service.update_bid(&created.id, update).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.account, "ACC2");
        assert_eq!(updated.bid_quantity, Some(dec!(3)));
        assert_eq!(updated.creation_date, created.creation_date);
        assert!(updated.revision_date.is_some());
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let repo = Arc::new(MockBidRepository::new());
        let service = BidService::new(repo);

        let update = BidUpdate {
            account: "ACC1".to_string(),
            bid_type: "Buy".to_string(),
            bid_quantity: None,
            ask_quantity: None,
            bid: None,
            ask: None,
            benchmark: None,
            commentary: None,
        };
        let result = service.update_bid("missing", update).await;
        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let repo = Arc::new(MockBidRepository::new());
        let service = BidService::new(repo);

        let created = service.create_bid(new_bid("ACC1", None)).await.unwrap();
        service.delete_bid(&created.id).await.unwrap();

        let result = service.get_bid(&created.id);
        assert!(matches!(result, Err(ref e) if e.is_not_found()));
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found_and_store_unchanged() {
        let repo = Arc::new(MockBidRepository::new());
        let service = BidService::new(repo.clone());

        service.create_bid(new_bid("ACC1", None)).await.unwrap();
        let result = service.delete_bid("missing").await;

        assert!(matches!(result, Err(ref e) if e.is_not_found()));
        assert_eq!(service.get_bids().unwrap().len(), 1);
    }
}
