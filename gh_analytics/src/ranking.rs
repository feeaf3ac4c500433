use std::collections::HashMap;

use derive_more::Constructor;
use log::debug;

use crate::api::Entity;

/// Activity count of a single group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Constructor)]
pub struct RankedCount {
    pub key: u64,
    pub count: usize,
}

/// Entity placed in a ranking together with the activity it was ranked by.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct Ranked<E> {
    pub entity: E,
    pub count: usize,
}

/// Orders `counts` by count descending, ties broken by ascending key.
pub fn ranked_counts(counts: &HashMap<u64, usize>) -> Vec<RankedCount> {
    let mut ranked: Vec<RankedCount> = counts
        .iter()
        .map(|(key, count)| RankedCount::new(*key, *count))
        .collect();
    // Map iteration order is arbitrary, start from ascending keys so the stable sort keeps them for ties.
    ranked.sort_by_key(|ranked| ranked.key);
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Ranks `counts`, resolves every key through `resolve` and keeps at most `limit` entities.
///
/// Keys `resolve` knows nothing about are skipped, so the result may be shorter than `limit`.
pub fn rank<E, F>(counts: &HashMap<u64, usize>, limit: usize, mut resolve: F) -> Vec<Ranked<E>>
where
    F: FnMut(u64) -> Option<E>,
{
    let resolved: Vec<Ranked<E>> = ranked_counts(counts)
        .into_iter()
        .filter_map(|ranked| match resolve(ranked.key) {
            Some(entity) => Some(Ranked::new(entity, ranked.count)),
            None => {
                debug!("No entity found for key {}, skipping", ranked.key);
                None
            }
        })
        .collect();
    if resolved.len() < limit {
        debug!("Only {} of requested {} entities available", resolved.len(), limit);
    }
    take_first_n(resolved, limit)
}

/// Indexes `entities` by id. The first entity seen for an id wins.
pub fn index_by_id<E: Entity>(entities: Vec<E>) -> HashMap<u64, E> {
    let mut index = HashMap::with_capacity(entities.len());
    for entity in entities {
        index.entry(entity.id()).or_insert(entity);
    }
    index
}

fn take_first_n<T>(v: Vec<T>, n: usize) -> Vec<T> {
    v.into_iter().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Actor;

    fn counts() -> HashMap<u64, usize> {
        HashMap::from([(5, 1), (3, 4), (9, 1), (1, 1), (7, 4), (2, 2)])
    }

    #[test]
    fn ranked_counts_tie_break_test() {
        let keys: Vec<u64> = ranked_counts(&counts()).iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![3, 7, 2, 1, 5, 9]);
    }

    #[test]
    fn ranked_counts_non_increasing_test() {
        let ranked = ranked_counts(&counts());
        assert!(ranked.windows(2).all(|pair| pair[0].count >= pair[1].count));
    }

    #[test]
    fn rank_truncates_test() {
        let ranked = rank(&counts(), 3, Some);
        assert_eq!(
            ranked,
            vec![Ranked::new(3_u64, 4), Ranked::new(7, 4), Ranked::new(2, 2)]
        );
    }

    #[test]
    fn rank_clamps_test() {
        let ranked = rank(&counts(), 100, Some);
        assert_eq!(ranked.len(), 6);
        assert!(rank(&HashMap::new(), 10, Some).is_empty());
    }

    #[test]
    fn rank_zero_limit_test() {
        assert!(rank(&counts(), 0, Some).is_empty());
    }

    #[test]
    fn rank_skips_unresolved_test() {
        let ranked = rank(&counts(), 3, |key| if key == 7 { None } else { Some(key) });
        assert_eq!(
            ranked,
            vec![Ranked::new(3_u64, 4), Ranked::new(2, 2), Ranked::new(1, 1)]
        );
    }

    #[test]
    fn index_by_id_first_wins_test() {
        let index = index_by_id(vec![
            Actor::new(1, "first".to_string()),
            Actor::new(2, "other".to_string()),
            Actor::new(1, "second".to_string()),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index[&1].username, "first");
    }
}
