//! Database models for ratings.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use poseidon_core::ratings::{NewRating, Rating, RatingUpdate};

/// Database model for ratings
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::ratings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct RatingDB {
    pub id: String,
    pub moodys_rating: String,
    pub sandp_rating: String,
    pub fitch_rating: String,
    pub order_number: i32,
}

/// Changeset applied on update.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::ratings)]
pub struct RatingChangesetDB {
    pub moodys_rating: String,
    pub sandp_rating: String,
    pub fitch_rating: String,
    pub order_number: i32,
}

impl RatingDB {
    pub fn from_new(new_rating: NewRating, id: String) -> Self {
        Self {
            id,
            moodys_rating: new_rating.moodys_rating,
            sandp_rating: new_rating.sandp_rating,
            fitch_rating: new_rating.fitch_rating,
            order_number: new_rating.order_number,
        }
    }
}

impl From<RatingUpdate> for RatingChangesetDB {
    fn from(update: RatingUpdate) -> Self {
        Self {
            moodys_rating: update.moodys_rating,
            sandp_rating: update.sandp_rating,
            fitch_rating: update.fitch_rating,
            order_number: update.order_number,
        }
    }
}

// Conversion to the domain model
impl From<RatingDB> for Rating {
    fn from(db: RatingDB) -> Self {
        Self {
            id: db.id,
            moodys_rating: db.moodys_rating,
            sandp_rating: db.sandp_rating,
            fitch_rating: db.fitch_rating,
            order_number: db.order_number,
        }
    }
}
