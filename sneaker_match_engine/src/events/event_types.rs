use serde::Serialize;

use crate::{
    db_types::{Match, Notification, User},
    matching::RiskLevel,
};

/// Published once for every match that has been persisted and had its notification created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCreatedEvent {
    pub match_record: Match,
    pub notification: Notification,
    /// The other party, as it was read at the start of the matching run
    pub counterparty: User,
    pub risk: RiskLevel,
}

impl MatchCreatedEvent {
    pub fn new(match_record: Match, notification: Notification, counterparty: User) -> Self {
        let risk = RiskLevel::from(counterparty.credibility_score);
        Self { match_record, notification, counterparty, risk }
    }

    /// The user that the notification was addressed to.
    pub fn recipient_id(&self) -> i64 {
        self.notification.user_id
    }
}
