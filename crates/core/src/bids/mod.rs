//! Bids module - domain models, services, and traits.

mod bids_model;
mod bids_service;
mod bids_traits;

pub use bids_model::{Bid, BidUpdate, NewBid};
pub use bids_service::BidService;
pub use bids_traits::{BidRepositoryTrait, BidServiceTrait};
