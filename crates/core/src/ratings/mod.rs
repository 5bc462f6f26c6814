//! Ratings module - domain models, services, and traits.

mod ratings_model;
mod ratings_service;
mod ratings_traits;

pub use ratings_model::{NewRating, Rating, RatingUpdate};
pub use ratings_service::RatingService;
pub use ratings_traits::{RatingRepositoryTrait, RatingServiceTrait};
