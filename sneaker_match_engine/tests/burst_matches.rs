use log::*;
use sneaker_match_engine::{
    db_types::WantListKind,
    events::EventProducers,
    matching::TOP_N,
    MatchFlowApi,
    MatchManagement,
    NotificationManagement,
};
use tokio::{runtime::Builder, task::JoinSet};

use crate::support::prepare_env::{prepare_test_env, seed_user, tear_down};

mod support;

const NUM_BUYERS: usize = 10;
const NUM_SELLERS: usize = 8;
const ITEMS: [(&str, &str); 4] = [("SKU001", "9"), ("SKU002", "9.5"), ("SKU003", "10"), ("SKU004", "11")];

#[test]
fn burst_matches() {
    info!("🚀️ Starting concurrent matching test");

    let sys = Builder::new_multi_thread().worker_threads(8).enable_all().build().unwrap();

    sys.block_on(async move {
        let db = prepare_test_env().await;
        let mut buyers = Vec::with_capacity(NUM_BUYERS);
        for i in 0..NUM_BUYERS {
            let buyer = seed_user(&db, &format!("buyer{i}"), Some(i as i64), WantListKind::Wtb, &ITEMS).await;
            buyers.push(buyer);
        }
        for i in 0..NUM_SELLERS {
            let offer = &ITEMS[..=(i % ITEMS.len())];
            seed_user(&db, &format!("seller{i}"), Some(3 * i as i64), WantListKind::Wts, offer).await;
        }

        info!("🚀️ Running {NUM_BUYERS} matching runs at once");
        let mut runs = JoinSet::new();
        for buyer in &buyers {
            let api = MatchFlowApi::new(db.clone(), EventProducers::default());
            let buyer_id = buyer.id;
            runs.spawn(async move { (buyer_id, api.find_matches_for_buyer(buyer_id).await) });
        }
        let mut errors = 0;
        while let Some(joined) = runs.join_next().await {
            let (buyer_id, result) = joined.expect("Matching task panicked");
            match result {
                Ok(ranked) => assert_eq!(ranked.len(), TOP_N, "buyer #{buyer_id}"),
                Err(e) => {
                    error!("🚀️ Matching run for buyer #{buyer_id} failed: {e}");
                    errors += 1;
                },
            }
        }
        assert_eq!(errors, 0);

        for buyer in &buyers {
            let matches = db.fetch_matches_for_user(buyer.id).await.unwrap();
            assert_eq!(matches.len(), TOP_N, "matches for buyer #{}", buyer.id);
            assert!(matches.iter().all(|m| m.buyer_id == buyer.id));
            let notifications = db.fetch_notifications_for_user(buyer.id).await.unwrap();
            assert_eq!(notifications.len(), TOP_N, "notifications for buyer #{}", buyer.id);
            let match_ids = matches.iter().map(|m| m.id).collect::<Vec<_>>();
            assert!(notifications.iter().all(|n| n.match_id.map(|id| match_ids.contains(&id)).unwrap_or(false)));
        }
        tear_down(db).await;
    });
    info!("🚀️ test complete");
}
