//! #  Storage contracts for the match engine.
//!
//! The matcher never talks to a database directly. It consumes want-lists and produces match and notification
//! records through the traits in this module, and any backend that implements them can drive a
//! [`MatchFlowApi`](crate::MatchFlowApi).
//!
//! * [`MatchingDatabase`] is the root trait. It carries the backend's error type and connection housekeeping.
//! * [`WantListManagement`] reads users and their WTB/WTS lists, and offers the thin write side used to seed them.
//! * [`MatchManagement`] persists batches of matches atomically and reads them back.
//! * [`NotificationManagement`] creates and queries user notifications.
mod data_objects;
mod match_management;
mod matching_database;
mod notification_management;
mod want_list_management;

pub use data_objects::Counterparty;
pub use match_management::MatchManagement;
pub use matching_database::MatchingDatabase;
pub use notification_management::NotificationManagement;
pub use want_list_management::WantListManagement;
