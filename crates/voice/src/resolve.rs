//! Fuzzy matching of a spoken item phrase against known inventory names.
//!
//! The scoring formula and the acceptance threshold are fixed: changing either
//! changes which phrases create new items.

use pantry_inventory::InventoryItem;

use crate::normalize::{normalize, normalize_name};

/// Minimum score for a phrase to resolve to an existing item.
pub const MATCH_THRESHOLD: f64 = 0.45;

/// Score assigned when one name contains the other.
const SUBSTRING_SCORE: f64 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub struct ItemMatch<'a> {
    pub item: &'a InventoryItem,
    pub score: f64,
}

/// Similarity in `[0, 1]` between a query and a target name.
///
/// - `1.0` when equal after normalization
/// - `0.9` when either contains the other
/// - otherwise matched query tokens / max(token counts), where a query token
///   matches a target token if either contains the other
pub fn token_score(query: &str, target: &str) -> f64 {
    let query = normalize(query);
    let target = normalize(target);
    if query.is_empty() || target.is_empty() {
        return 0.0;
    }
    if query == target {
        return 1.0;
    }
    if query.contains(target.as_str()) || target.contains(query.as_str()) {
        return SUBSTRING_SCORE;
    }

    let query_tokens: Vec<&str> = query.split(' ').collect();
    let target_tokens: Vec<&str> = target.split(' ').collect();
    let matched = query_tokens
        .iter()
        .filter(|q| {
            target_tokens
                .iter()
                .any(|t| q == &t || q.contains(*t) || t.contains(**q))
        })
        .count();

    matched as f64 / query_tokens.len().max(target_tokens.len()) as f64
}

/// Best-scoring inventory item for `candidate`, if it clears `threshold`.
///
/// Ties keep the earliest item in `inventory`.
pub fn resolve_item_match_with<'a>(
    candidate: &str,
    inventory: &'a [InventoryItem],
    threshold: f64,
) -> Option<ItemMatch<'a>> {
    let query = normalize_name(candidate);

    let mut best: Option<ItemMatch<'a>> = None;
    for item in inventory {
        let score = token_score(&query, &normalize_name(&item.name));
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(ItemMatch { item, score });
        }
    }

    let best = best?;
    tracing::debug!(candidate, item = %best.item.name, score = best.score, "best inventory match");
    (best.score >= threshold).then_some(best)
}

/// [`resolve_item_match_with`] at [`MATCH_THRESHOLD`].
pub fn resolve_item_match<'a>(
    candidate: &str,
    inventory: &'a [InventoryItem],
) -> Option<ItemMatch<'a>> {
    resolve_item_match_with(candidate, inventory, MATCH_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::{IdGenerator, SequentialIds};
    use pantry_inventory::CanonicalUnit;

    fn inventory(names: &[&str]) -> Vec<InventoryItem> {
        let mut ids = SequentialIds::default();
        names
            .iter()
            .map(|name| InventoryItem {
                id: ids.next_id(),
                name: name.to_string(),
                category: "Pantry".to_string(),
                unit_type: CanonicalUnit::Pcs,
                quantity: 1.0,
                low_stock_threshold: 1.0,
            })
            .collect()
    }

    #[test]
    fn equal_names_score_one() {
        assert_eq!(token_score("tomato", "tomato"), 1.0);
        assert_eq!(token_score("Tomato!", "tomato"), 1.0);
    }

    #[test]
    fn substring_scores_point_nine() {
        assert_eq!(token_score("tom", "tomato"), 0.9);
        assert_eq!(token_score("olive oil extra", "oil"), 0.9);
    }

    #[test]
    fn token_overlap_is_matched_over_max_count() {
        // "red" matches nothing, "onion" matches "onion": 1 / max(2, 3).
        assert_eq!(token_score("red onion", "spring onion bulb"), 1.0 / 3.0);
        // Both query tokens match: 2 / max(2, 3).
        assert_eq!(token_score("green chilli", "chilli hot green"), 2.0 / 3.0);
        assert_eq!(token_score("apple", "banana"), 0.0);
    }

    #[test]
    fn empty_query_scores_zero() {
        assert_eq!(token_score("", "tomato"), 0.0);
        assert_eq!(token_score("!!", "tomato"), 0.0);
    }

    #[test]
    fn resolves_plural_to_stored_singular() {
        let items = inventory(&["Onion", "Tomato"]);
        let m = resolve_item_match("tomatoes", &items).unwrap();
        assert_eq!(m.item.name, "Tomato");
        assert_eq!(m.score, 1.0);
    }

    #[test]
    fn first_seen_wins_ties() {
        let items = inventory(&["Olive Oil", "Sunflower Oil"]);
        let m = resolve_item_match("oil", &items).unwrap();
        assert_eq!(m.item.name, "Olive Oil");
    }

    #[test]
    fn best_score_wins_over_order() {
        let items = inventory(&["Olive Oil", "Oil"]);
        let m = resolve_item_match("oil", &items).unwrap();
        assert_eq!(m.item.name, "Oil");
    }

    #[test]
    fn below_threshold_is_none() {
        let items = inventory(&["Spring Onion Bulb"]);
        assert!(resolve_item_match("red onion", &items).is_none());
    }

    #[test]
    fn threshold_is_inclusive() {
        // 1 of max(2, 2) tokens: 0.5 clears 0.45.
        let items = inventory(&["Basmati Rice"]);
        let m = resolve_item_match("brown rice", &items).unwrap();
        assert_eq!(m.score, 0.5);
        assert!(resolve_item_match_with("brown rice", &items, 0.5).is_some());
        assert!(resolve_item_match_with("brown rice", &items, 0.51).is_none());
    }

    #[test]
    fn empty_inventory_is_none() {
        assert!(resolve_item_match("ginger", &[]).is_none());
    }
}
