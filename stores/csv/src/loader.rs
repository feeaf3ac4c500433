use std::collections::HashSet;
use std::hash::Hash;
use std::io::Read;

use log::debug;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Reads every row of a headed CSV export and converts it into `T`.
pub(crate) fn load_rows<ROW, T>(reader: impl Read, file: &'static str) -> Result<Vec<T>>
where
    ROW: DeserializeOwned,
    T: From<ROW>,
{
    let mut reader = csv::Reader::from_reader(reader);
    let rows = reader
        .deserialize::<ROW>()
        .map(|row| row.map(T::from))
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(|source| Error::Csv { file, source })?;
    debug!("Read {} rows from {}", rows.len(), file);
    Ok(rows)
}

/// Keeps the first item for every key, preserving order.
pub(crate) fn dedup_by_key<T, K, F>(items: Vec<T>, key_of: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|item| seen.insert(key_of(item))).collect()
}

#[test]
fn dedup_by_key_test() {
    let deduped = dedup_by_key(vec![(1, "a"), (2, "b"), (1, "c"), (3, "d"), (2, "e")], |pair| pair.0);
    assert_eq!(deduped, vec![(1, "a"), (2, "b"), (3, "d")]);
}
