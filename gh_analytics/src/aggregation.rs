use std::collections::{HashMap, HashSet};

use log::debug;

use crate::api::{Event, EventType};
use crate::grouping::group_by;

/// Counts the `events` of a qualifying type per `key_of` key.
///
/// An empty `qualifying` set matches nothing.
pub fn aggregate<'a, F>(
    events: impl IntoIterator<Item = &'a Event>,
    qualifying: &HashSet<EventType>,
    key_of: F,
) -> HashMap<u64, usize>
where
    F: Fn(&Event) -> u64,
{
    let matching = events.into_iter().filter(|event| qualifying.contains(&event.kind));
    let counts: HashMap<u64, usize> = group_by(matching, |event| key_of(*event))
        .into_iter()
        .map(|(key, group)| (key, group.len()))
        .collect();
    debug!("Aggregated {} activity groups", counts.len());
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Dimension;
    use rand::seq::SliceRandom;

    fn events() -> Vec<Event> {
        vec![
            Event::new(1, EventType::PushEvent, 1, 10),
            Event::new(2, EventType::PushEvent, 1, 11),
            Event::new(3, EventType::PushEvent, 2, 10),
            Event::new(4, EventType::PullRequestEvent, 3, 10),
            Event::new(5, EventType::WatchEvent, 3, 12),
        ]
    }

    #[test]
    fn aggregate_by_actor_test() {
        let qualifying = HashSet::from([EventType::PushEvent, EventType::PullRequestEvent]);
        let counts = aggregate(&events(), &qualifying, |e| Dimension::Actor.key_of(e));
        assert_eq!(counts, HashMap::from([(1, 2), (2, 1), (3, 1)]));
    }

    #[test]
    fn aggregate_by_repo_test() {
        let qualifying = HashSet::from([EventType::PushEvent]);
        let counts = aggregate(&events(), &qualifying, |e| Dimension::Repo.key_of(e));
        assert_eq!(counts, HashMap::from([(10, 2), (11, 1)]));
    }

    #[test]
    fn aggregate_empty_qualifying_test() {
        let counts = aggregate(&events(), &HashSet::new(), |e| e.actor_id);
        assert!(counts.is_empty());
    }

    #[test]
    fn aggregate_empty_events_test() {
        let qualifying = HashSet::from([EventType::PushEvent]);
        let counts = aggregate(&Vec::new(), &qualifying, |e| e.actor_id);
        assert!(counts.is_empty());
    }

    #[test]
    fn aggregate_input_order_test() {
        let qualifying = HashSet::from([EventType::PushEvent, EventType::WatchEvent]);
        let expected = aggregate(&events(), &qualifying, |e| e.repo_id);
        let mut shuffled = events();
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            shuffled.shuffle(&mut rng);
            assert_eq!(aggregate(&shuffled, &qualifying, |e| e.repo_id), expected);
        }
    }
}
