//! # Matching policy
//!
//! The pure, storage-agnostic half of the engine. Nothing in here touches the database; the
//! [`MatchFlowApi`](crate::MatchFlowApi) feeds want-lists in and persists what comes out.
//!
//! * [`overlap`] finds the ask-list entries a counterparty can satisfy (same SKU and size).
//! * [`scorer`] turns an overlap into a [`MatchCandidate`] with a normalised score.
//! * [`ranker`] orders candidates by score, then credibility, and keeps the best [`TOP_N`].
//! * [`risk`] maps a credibility score to the label shown in notifications.
pub mod overlap;
pub mod ranker;
pub mod risk;
pub mod scorer;

pub use overlap::calculate_overlap;
pub use ranker::{rank, TOP_N};
pub use risk::RiskLevel;
pub use scorer::{score_counterparty, MatchCandidate};
