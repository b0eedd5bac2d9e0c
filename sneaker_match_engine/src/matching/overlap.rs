use std::collections::HashSet;

use crate::db_types::WantEntry;

/// Returns the entries of `ask_list` that have at least one counterpart in `offer_list` with the same SKU and size.
///
/// Quantity plays no part in the comparison, so a request for three pairs matches an offer of one. The result keeps
/// the order of `ask_list`. Either list being empty yields an empty result.
pub fn calculate_overlap(ask_list: &[WantEntry], offer_list: &[WantEntry]) -> Vec<WantEntry> {
    if ask_list.is_empty() || offer_list.is_empty() {
        return Vec::new();
    }
    let offered = offer_list.iter().map(WantEntry::item_key).collect::<HashSet<_>>();
    ask_list.iter().filter(|e| offered.contains(&e.item_key())).cloned().collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(id: i64, sku: &str, size: &str) -> WantEntry {
        WantEntry { id, owner_user_id: 1, product_sku: sku.into(), size: size.into(), quantity: 1 }
    }

    #[test]
    fn matches_on_sku_and_size() {
        let ask = vec![entry(1, "SKU001", "M"), entry(2, "SKU002", "L"), entry(3, "SKU003", "XL")];
        let offer = vec![entry(10, "SKU003", "XL"), entry(11, "SKU001", "M")];
        let overlap = calculate_overlap(&ask, &offer);
        let ids = overlap.iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn size_or_sku_alone_is_not_enough() {
        let ask = vec![entry(1, "SKU001", "M"), entry(2, "SKU002", "L")];
        let offer = vec![entry(10, "SKU001", "L"), entry(11, "SKU009", "L")];
        assert!(calculate_overlap(&ask, &offer).is_empty());
    }

    #[test]
    fn quantity_is_ignored() {
        let mut wanted = entry(1, "SKU001", "M");
        wanted.quantity = 3;
        let offer = vec![entry(10, "SKU001", "M")];
        assert_eq!(calculate_overlap(&[wanted.clone()], &offer), vec![wanted]);
    }

    #[test]
    fn empty_inputs() {
        let some = vec![entry(1, "SKU001", "M")];
        assert!(calculate_overlap(&[], &some).is_empty());
        assert!(calculate_overlap(&some, &[]).is_empty());
        assert!(calculate_overlap(&[], &[]).is_empty());
    }

    #[test]
    fn duplicate_offers_do_not_duplicate_output() {
        let ask = vec![entry(1, "SKU001", "M")];
        let offer = vec![entry(10, "SKU001", "M"), entry(11, "SKU001", "M")];
        assert_eq!(calculate_overlap(&ask, &offer).len(), 1);
    }
}
