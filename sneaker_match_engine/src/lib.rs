//! Sneaker Match Engine
//!
//! Sellers list what they have (want-to-sell, WTS) and buyers list what they are after (want-to-buy, WTB). This
//! library pairs the two sides: it scores every counterparty by how much of a requester's list they can fill, keeps
//! the best few, records them as pending matches and tells the requester about them.
//!
//! The library is divided into three main sections:
//! 1. The matching policy ([`mod@matching`]). Pure functions for overlap, scoring, ranking and risk labelling. No I/O.
//! 2. Storage ([`mod@traits`] and the SQLite backend). The engine only talks to storage through the traits, so any
//!    backend that implements them can be used. The record types live in [`mod@db_types`].
//! 3. The public API ([`MatchFlowApi`] and [`MatchHistoryApi`]). This is what the surrounding web layer calls.
//!
//! The engine also emits events. Every recorded match publishes a `MatchCreatedEvent` to any hooks registered
//! through [`events::EventHooks`], which is where side effects such as emails belong.
mod db;

pub mod db_types;
pub mod events;
pub mod matching;
mod mx_api;

#[cfg(feature = "sqlite")]
pub use db::sqlite::{SqliteDatabase, SqliteDatabaseError};
pub use db::traits;
pub use db::traits::{Counterparty, MatchManagement, MatchingDatabase, NotificationManagement, WantListManagement};
pub use mx_api::{
    errors::{MatchFlowError, MatchHistoryError},
    history_api::MatchHistoryApi,
    match_flow_api::{match_message, MatchFlowApi},
    match_objects::MatchDirection,
};
