//! # Match engine public API
//!
//! * [`match_flow_api`] runs a matching pass for a buyer or a seller: load, score, rank, persist, notify.
//! * [`history_api`] reads back recorded matches and notifications for a user.
//!
//! Both APIs are created by handing them a storage backend that implements the traits in [`crate::traits`]:
//!
//! ```rust,ignore
//! use sneaker_match_engine::{events::EventProducers, MatchFlowApi, SqliteDatabase};
//! let db = SqliteDatabase::new_with_url("sqlite://data/sneaker_matches.db", 5).await?;
//! let api = MatchFlowApi::new(db, EventProducers::default());
//! let candidates = api.find_matches_for_buyer(buyer_id).await?;
//! ```

pub mod errors;
pub mod history_api;
pub mod match_flow_api;
pub mod match_objects;
