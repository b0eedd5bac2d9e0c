use std::fmt::Debug;

use log::*;

use crate::{
    db::traits::{MatchManagement, NotificationManagement, WantListManagement},
    db_types::{Match, NewMatch, NewNotification, User},
    events::{EventProducers, MatchCreatedEvent},
    matching::{rank, score_counterparty, MatchCandidate, RiskLevel},
    mx_api::{errors::MatchFlowError, match_objects::MatchDirection},
};

/// `MatchFlowApi` pairs a buyer with sellers (or a seller with buyers) who can fill their want-list.
///
/// A run walks through these steps, stopping early with an empty result wherever there is nothing left to do:
///
/// 1. Load the requester and their ask-list. An unknown requester or an empty ask-list ends the run.
/// 2. Load every other user with their offer-list. No other users ends the run.
/// 3. Score each counterparty by overlap and rank them, keeping the top [`TOP_N`](crate::matching::TOP_N).
/// 4. Persist the ranked matches as a single atomic batch. A failure here is the only error a run can return.
/// 5. Create one notification per stored match for the requester, then publish a [`MatchCreatedEvent`].
///
/// Notifications are only created after the batch has been committed, so they never point at a match that does not
/// exist. A failed notification is logged and skipped; it does not undo the stored matches.
pub struct MatchFlowApi<B> {
    db: B,
    producers: EventProducers,
}

impl<B> Debug for MatchFlowApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MatchFlowApi")
    }
}

impl<B> MatchFlowApi<B> {
    pub fn new(db: B, producers: EventProducers) -> Self {
        Self { db, producers }
    }

    pub fn db(&self) -> &B {
        &self.db
    }
}

impl<B> MatchFlowApi<B>
where B: WantListManagement + MatchManagement + NotificationManagement
{
    /// Finds sellers whose WTS list overlaps the buyer's WTB list.
    pub async fn find_matches_for_buyer(&self, buyer_id: i64) -> Result<Vec<MatchCandidate>, MatchFlowError> {
        self.find_matches(buyer_id, MatchDirection::BuyerSeeksSellers).await
    }

    /// Finds buyers whose WTB list overlaps the seller's WTS list.
    pub async fn find_matches_for_seller(&self, seller_id: i64) -> Result<Vec<MatchCandidate>, MatchFlowError> {
        self.find_matches(seller_id, MatchDirection::SellerSeeksBuyers).await
    }

    /// Runs a full matching pass for `requester_id` in the given direction and returns the ranked candidates.
    pub async fn find_matches(
        &self,
        requester_id: i64,
        direction: MatchDirection,
    ) -> Result<Vec<MatchCandidate>, MatchFlowError> {
        let role = direction.requester_role();
        let (requester, ask_list) = tokio::try_join!(
            self.db.fetch_user(requester_id),
            self.db.fetch_want_list(requester_id, direction.ask_kind())
        )
        .map_err(db_error)?;
        let Some(requester) = requester else {
            info!("🔄️ No user with id #{requester_id} exists. There is nothing to match for this {role}.");
            return Ok(Vec::new());
        };
        if ask_list.is_empty() {
            debug!("🔄️ {role} #{requester_id} has an empty {} list. Skipping match run.", direction.ask_kind());
            return Ok(Vec::new());
        }
        let counterparties = self.db.fetch_counterparties(requester_id, direction.offer_kind()).await.map_err(db_error)?;
        if counterparties.is_empty() {
            debug!("🔄️ There are no counterparties for {role} #{requester_id}.");
            return Ok(Vec::new());
        }
        trace!(
            "🔄️ Scoring {} counterparties against {} {} entries for {role} #{requester_id}",
            counterparties.len(),
            ask_list.len(),
            direction.ask_kind()
        );
        let candidates = counterparties
            .iter()
            .filter_map(|c| score_counterparty(&ask_list, &c.user, &c.offer_list))
            .collect::<Vec<_>>();
        let ranked = rank(candidates);
        if ranked.is_empty() {
            debug!("🔄️ No counterparty overlaps the {} list of {role} #{requester_id}.", direction.ask_kind());
            return Ok(Vec::new());
        }
        let saved = self.record_matches(&requester, direction, &ranked).await?;
        self.notify_requester(&requester, &ranked, saved).await;
        info!("🔄️ Matching run for {role} #{requester_id} complete. {} matches recorded.", ranked.len());
        Ok(ranked)
    }

    async fn record_matches(
        &self,
        requester: &User,
        direction: MatchDirection,
        ranked: &[MatchCandidate],
    ) -> Result<Vec<Match>, MatchFlowError> {
        let new_matches = ranked
            .iter()
            .map(|c| direction.new_match(requester.id, c.counterparty.id, c.match_score))
            .collect::<Vec<NewMatch>>();
        let saved = self.db.save_matches(&new_matches).await.map_err(|e| {
            error!("🔄️ Could not record {} matches for user #{}: {e}", new_matches.len(), requester.id);
            MatchFlowError::PersistenceFailure { user_id: requester.id, reason: e.to_string() }
        })?;
        if saved.len() != new_matches.len() {
            error!(
                "🔄️ The database stored {} matches, but {} were submitted for user #{}.",
                saved.len(),
                new_matches.len(),
                requester.id
            );
            return Err(MatchFlowError::PersistenceFailure {
                user_id: requester.id,
                reason: format!("expected {} stored matches, got {}", new_matches.len(), saved.len()),
            });
        }
        debug!("🔄️ {} matches recorded for user #{}", saved.len(), requester.id);
        Ok(saved)
    }

    async fn notify_requester(&self, requester: &User, ranked: &[MatchCandidate], saved: Vec<Match>) {
        for (candidate, match_record) in ranked.iter().zip(saved) {
            let risk = RiskLevel::from(candidate.credibility_score);
            let message = match_message(&candidate.counterparty.username, risk, candidate.match_score);
            let new_notification = NewNotification::for_match(requester.id, match_record.id, message);
            match self.db.create_notification(new_notification).await {
                Ok(notification) => {
                    trace!("🔄️ Notification #{} sent to user #{} for match #{}", notification.id, requester.id, match_record.id);
                    let event = MatchCreatedEvent::new(match_record, notification, candidate.counterparty.clone());
                    self.call_match_created_hook(event).await;
                },
                Err(e) => {
                    error!(
                        "🔄️ Could not create a notification for match #{} (user #{}): {e}. The match itself is kept.",
                        match_record.id, requester.id
                    );
                },
            }
        }
    }

    async fn call_match_created_hook(&self, event: MatchCreatedEvent) {
        for emitter in &self.producers.match_created_producer {
            debug!("🔄️ Notifying match created hook subscribers");
            emitter.publish_event(event.clone()).await;
        }
    }
}

/// The text shown to the requester for a new match.
pub fn match_message(counterparty: &str, risk: RiskLevel, match_score: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let percent = (match_score * 100.0).round() as i64;
    format!("New match found with {counterparty} ({risk}). Match score: {percent}%")
}

fn db_error<E: std::error::Error>(e: E) -> MatchFlowError {
    error!("🔄️ Could not load want-lists for matching: {e}");
    MatchFlowError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn message_format() {
        let msg = match_message("sneakerhead", RiskLevel::from_credibility(95), 2.0 / 3.0);
        assert_eq!(msg, "New match found with sneakerhead (Low Risk). Match score: 67%");
        let msg = match_message("flipper", RiskLevel::from_credibility(-5), 1.0);
        assert_eq!(msg, "New match found with flipper (High Risk). Match score: 100%");
    }
}
