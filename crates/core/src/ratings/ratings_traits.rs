use crate::errors::Result;
use crate::ratings::ratings_model::{NewRating, Rating, RatingUpdate};
use async_trait::async_trait;

/// Trait for rating repository operations
#[async_trait]
pub trait RatingRepositoryTrait: Send + Sync {
    fn get_by_id(&self, rating_id: &str) -> Result<Rating>;
    fn list(&self) -> Result<Vec<Rating>>;
    async fn create(&self, new_rating: NewRating) -> Result<Rating>;
    async fn update(&self, rating_id: &str, update: RatingUpdate) -> Result<Rating>;
    async fn delete(&self, rating_id: &str) -> Result<usize>;
}

/// Trait for rating service operations
#[async_trait]
pub trait RatingServiceTrait: Send + Sync {
    fn get_rating(&self, rating_id: &str) -> Result<Rating>;
    fn get_ratings(&self) -> Result<Vec<Rating>>;
    async fn create_rating(&self, new_rating: NewRating) -> Result<Rating>;
    async fn update_rating(&self, rating_id: &str, update: RatingUpdate) -> Result<Rating>;
    async fn delete_rating(&self, rating_id: &str) -> Result<()>;
}
