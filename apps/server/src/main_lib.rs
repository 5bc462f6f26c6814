use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use poseidon_core::bids::{BidService, BidServiceTrait};
use poseidon_core::curve_points::{CurvePointService, CurvePointServiceTrait};
use poseidon_core::ratings::{RatingService, RatingServiceTrait};
use poseidon_core::rule_names::{RuleNameService, RuleNameServiceTrait};
use poseidon_core::trades::{TradeService, TradeServiceTrait};
use poseidon_storage_sqlite::bids::BidRepository;
use poseidon_storage_sqlite::curve_points::CurvePointRepository;
use poseidon_storage_sqlite::db::{self, write_actor};
use poseidon_storage_sqlite::ratings::RatingRepository;
use poseidon_storage_sqlite::rule_names::RuleNameRepository;
use poseidon_storage_sqlite::trades::TradeRepository;

use crate::config::Config;
use crate::session::SessionStore;

pub struct AppState {
    pub bid_service: Arc<dyn BidServiceTrait + Send + Sync>,
    pub curve_point_service: Arc<dyn CurvePointServiceTrait + Send + Sync>,
    pub rating_service: Arc<dyn RatingServiceTrait + Send + Sync>,
    pub trade_service: Arc<dyn TradeServiceTrait + Send + Sync>,
    pub rule_name_service: Arc<dyn RuleNameServiceTrait + Send + Sync>,
    pub sessions: SessionStore,
    /// Argon2 PHC hash of the UI password; None leaves the login gate open.
    pub password_hash: Option<String>,
}

impl AppState {
    pub fn auth_enabled(&self) -> bool {
        self.password_hash.is_some()
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("POSEIDON_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let bid_repository = Arc::new(BidRepository::new(pool.clone(), writer.clone()));
    let bid_service: Arc<dyn BidServiceTrait + Send + Sync> =
        Arc::new(BidService::new(bid_repository));

    let curve_point_repository = Arc::new(CurvePointRepository::new(pool.clone(), writer.clone()));
    let curve_point_service: Arc<dyn CurvePointServiceTrait + Send + Sync> =
        Arc::new(CurvePointService::new(curve_point_repository));

    let rating_repository = Arc::new(RatingRepository::new(pool.clone(), writer.clone()));
    let rating_service: Arc<dyn RatingServiceTrait + Send + Sync> =
        Arc::new(RatingService::new(rating_repository));

    let trade_repository = Arc::new(TradeRepository::new(pool.clone(), writer.clone()));
    let trade_service: Arc<dyn TradeServiceTrait + Send + Sync> =
        Arc::new(TradeService::new(trade_repository));

    let rule_name_repository = Arc::new(RuleNameRepository::new(pool.clone(), writer.clone()));
    let rule_name_service: Arc<dyn RuleNameServiceTrait + Send + Sync> =
        Arc::new(RuleNameService::new(rule_name_repository));

    Ok(Arc::new(AppState {
        bid_service,
        curve_point_service,
        rating_service,
        trade_service,
        rule_name_service,
        sessions: SessionStore::new(),
        password_hash: config.password_hash.clone(),
    }))
}
