use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("Conversion error: {0}")]
pub struct ConversionError(String);

//--------------------------------------        User        ---------------------------------------------------------
/// The narrow view of a marketplace user that the matcher needs.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    /// Reputation signal maintained by the review subsystem. `None` ranks as zero.
    pub credibility_score: Option<i64>,
}

/// The credibility value used for ranking and risk labelling. A user without a score counts as zero.
pub fn effective_credibility(credibility_score: Option<i64>) -> i64 {
    credibility_score.unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub credibility_score: Option<i64>,
}

impl NewUser {
    pub fn new<S: Into<String>>(username: S) -> Self {
        Self { username: username.into(), credibility_score: None }
    }

    pub fn with_credibility(mut self, score: i64) -> Self {
        self.credibility_score = Some(score);
        self
    }
}

//--------------------------------------     WantListKind     ---------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
pub enum WantListKind {
    /// Want-to-buy. What a buyer is looking for.
    Wtb,
    /// Want-to-sell. What a seller has on offer.
    Wts,
}

impl WantListKind {
    /// The list on the other side of the market.
    pub fn opposite(&self) -> Self {
        match self {
            WantListKind::Wtb => WantListKind::Wts,
            WantListKind::Wts => WantListKind::Wtb,
        }
    }
}

impl Display for WantListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WantListKind::Wtb => write!(f, "WTB"),
            WantListKind::Wts => write!(f, "WTS"),
        }
    }
}

impl FromStr for WantListKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wtb" | "buy" => Ok(Self::Wtb),
            "wts" | "sell" => Ok(Self::Wts),
            s => Err(ConversionError(format!("Invalid want list kind: {s}"))),
        }
    }
}

//--------------------------------------      WantEntry       ---------------------------------------------------------
/// A single WTB or WTS line item. Read-only from the matcher's point of view.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct WantEntry {
    pub id: i64,
    pub owner_user_id: i64,
    pub product_sku: String,
    pub size: String,
    pub quantity: i64,
}

impl WantEntry {
    /// Entries with equal keys refer to the same item. Quantity is not part of the key.
    pub fn item_key(&self) -> (&str, &str) {
        (self.product_sku.as_str(), self.size.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NewWantEntry {
    pub owner_user_id: i64,
    pub product_sku: String,
    pub size: String,
    pub quantity: i64,
}

impl NewWantEntry {
    pub fn new<S: Into<String>, Z: Into<String>>(owner_user_id: i64, product_sku: S, size: Z) -> Self {
        Self { owner_user_id, product_sku: product_sku.into(), size: size.into(), quantity: 1 }
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }
}

//--------------------------------------     MatchStatus      ---------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
pub enum MatchStatus {
    /// Freshly recorded by a matching run.
    Pending,
    /// Both parties agreed to trade.
    Confirmed,
    /// Either party walked away.
    Cancelled,
}

impl Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Pending => write!(f, "Pending"),
            MatchStatus::Confirmed => write!(f, "Confirmed"),
            MatchStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl FromStr for MatchStatus {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            s => Err(ConversionError(format!("Invalid match status: {s}"))),
        }
    }
}

//--------------------------------------        Match         ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub buyer_id: i64,
    pub seller_id: i64,
    pub match_score: f64,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Returns the id of the other party, from `user_id`'s point of view.
    pub fn counterparty_of(&self, user_id: i64) -> i64 {
        if self.buyer_id == user_id {
            self.seller_id
        } else {
            self.buyer_id
        }
    }
}

//--------------------------------------       NewMatch       ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq)]
pub struct NewMatch {
    pub buyer_id: i64,
    pub seller_id: i64,
    pub match_score: f64,
    pub status: MatchStatus,
}

impl NewMatch {
    pub fn pending(buyer_id: i64, seller_id: i64, match_score: f64) -> Self {
        Self { buyer_id, seller_id, match_score, status: MatchStatus::Pending }
    }
}

//--------------------------------------   NotificationType   ---------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
pub enum NotificationType {
    Match,
}

impl Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::Match => write!(f, "Match"),
        }
    }
}

//--------------------------------------     Notification     ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub notification_type: NotificationType,
    pub message: String,
    pub match_id: Option<i64>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    /// The user that receives the notification
    pub user_id: i64,
    pub notification_type: NotificationType,
    pub message: String,
    /// The persisted match this notification refers to
    pub match_id: Option<i64>,
}

impl NewNotification {
    pub fn for_match(user_id: i64, match_id: i64, message: String) -> Self {
        Self { user_id, notification_type: NotificationType::Match, message, match_id: Some(match_id) }
    }
}
