use std::sync::Arc;

use super::ratings_model::{NewRating, Rating, RatingUpdate};
use super::ratings_traits::{RatingRepositoryTrait, RatingServiceTrait};
use crate::errors::{DatabaseError, Error, Result};
use async_trait::async_trait;

/// Service for managing ratings.
pub struct RatingService {
    repository: Arc<dyn RatingRepositoryTrait>,
}

impl RatingService {
    pub fn new(repository: Arc<dyn RatingRepositoryTrait>) -> Self {
        RatingService { repository }
    }
}

#[async_trait]
impl RatingServiceTrait for RatingService {
    fn get_rating(&self, rating_id: &str) -> Result<Rating> {
        self.repository.get_by_id(rating_id)
    }

    fn get_ratings(&self) -> Result<Vec<Rating>> {
        self.repository.list()
    }

    async fn create_rating(&self, new_rating: NewRating) -> Result<Rating> {
        new_rating.validate()?;
        self.repository.create(new_rating).await
    }

    async fn update_rating(&self, rating_id: &str, update: RatingUpdate) -> Result<Rating> {
        update.validate()?;
        self.repository.update(rating_id, update).await
    }

    async fn delete_rating(&self, rating_id: &str) -> Result<()> {
        let affected = self.repository.delete(rating_id).await?;
        if affected == 0 {
            return Err(Error::Database(DatabaseError::NotFound(format!(
                "Rating {} not found",
                rating_id
            ))));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::RwLock;

    struct MockRatingRepository {
        ratings: RwLock<Vec<Rating>>,
    }

    impl MockRatingRepository {
        fn new() -> Self {
            Self {
                ratings: RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RatingRepositoryTrait for MockRatingRepository {
        fn get_by_id(&self, rating_id: &str) -> Result<Rating> {
            self.ratings
                .read()
                .unwrap()
                .iter()
                .find(|r| r.id == rating_id)
                .cloned()
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound("Record not found".to_string()))
                })
        }

        fn list(&self) -> Result<Vec<Rating>> {
            Ok(self.ratings.read().unwrap().clone())
        }

        async fn create(&self, new_rating: NewRating) -> Result<Rating> {
            let mut ratings = self.ratings.write().unwrap();
            let rating = Rating {
                id: format!("rating-{}", ratings.len() + 1),
                moodys_rating: new_rating.moodys_rating,
                sandp_rating: new_rating.sandp_rating,
                fitch_rating: new_rating.fitch_rating,
                order_number: new_rating.order_number,
            };
            ratings.push(rating.clone());
            Ok(rating)
        }

        async fn update(&self, rating_id: &str, update: RatingUpdate) -> Result<Rating> {
            let mut ratings = self.ratings.write().unwrap();
            let rating = ratings
                .iter_mut()
                .find(|r| r.id == rating_id)
                .ok_or_else(|| {
                    Error::Database(DatabaseError::NotFound("Record not found".to_string()))
                })?;
            rating.moodys_rating = update.moodys_rating;
            rating.sandp_rating = update.sandp_rating;
            rating.fitch_rating = update.fitch_rating;
            rating.order_number = update.order_number;
            Ok(rating.clone())
        }

        async fn delete(&self, rating_id: &str) -> Result<usize> {
            let mut ratings = self.ratings.write().unwrap();
            let before = ratings.len();
            ratings.retain(|r| r.id != rating_id);
            Ok(before - ratings.len())
        }
    }

    fn new_rating(order_number: i32) -> NewRating {
        NewRating {
            moodys_rating: "Aa1".to_string(),
            sandp_rating: "AA+".to_string(),
            fitch_rating: "AA+".to_string(),
            order_number,
        }
    }

    #[tokio::test]
    async fn update_order_number_leaves_labels_unchanged() {
        let repo = Arc::new(MockRatingRepository::new());
        let service = RatingService::new(repo);

        let created = service.create_rating(new_rating(5)).await.unwrap();
        let update = RatingUpdate {
            moodys_rating: created.moodys_rating.clone(),
            sandp_rating: created.sandp_rating.clone(),
            fitch_rating: created.fitch_rating.clone(),
            order_number: 3,
        };
        service.update_rating(&created.id, update).await.unwrap();

        let fetched = service.get_rating(&created.id).unwrap();
        assert_eq!(fetched.order_number, 3);
        assert_eq!(fetched.moodys_rating, "Aa1");
        assert_eq!(fetched.sandp_rating, "AA+");
        assert_eq!(fetched.fitch_rating, "AA+");
    }

    #[tokio::test]
    async fn blank_label_and_negative_order_rejected() {
        let repo = Arc::new(MockRatingRepository::new());
        let service = RatingService::new(repo);

        let mut rating = new_rating(1);
        rating.fitch_rating = "  ".to_string();
        assert!(matches!(
            service.create_rating(rating).await,
            Err(Error::Validation(_))
        ));

        assert!(matches!(
            service.create_rating(new_rating(-1)).await,
            Err(Error::Validation(_))
        ));
        assert!(service.get_ratings().unwrap().is_empty());
    }
}
