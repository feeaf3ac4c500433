use std::collections::HashMap;
use std::hash::Hash;

/// Groups `items` by `key_of`, keeping first-seen order inside every group.
pub fn group_by<T, K, F>(items: impl IntoIterator<Item = T>, mut key_of: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut grouped: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        grouped.entry(key_of(&item)).or_default().push(item);
    }
    grouped
}

#[test]
fn group_by_order_test() {
    let words = vec!["apple", "bee", "avocado", "bear", "cat", "apricot"];
    let grouped = group_by(words, |word| word.chars().next());
    assert_eq!(grouped.len(), 3);
    assert_eq!(grouped[&Some('a')], vec!["apple", "avocado", "apricot"]);
    assert_eq!(grouped[&Some('b')], vec!["bee", "bear"]);
    assert_eq!(grouped[&Some('c')], vec!["cat"]);
}

#[test]
fn group_by_empty_test() {
    let grouped = group_by(Vec::<u64>::new(), |n| *n);
    assert!(grouped.is_empty());
}
