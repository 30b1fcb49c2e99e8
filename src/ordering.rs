//! Ordering policy for requests: method priority first, then name.

use crate::source::HttpMethod;
use std::cmp::Ordering;

/// Method priority, highest first
pub const METHOD_ORDER: [&str; 11] = [
    "GET", "POST", "PUT", "PATCH", "DELETE", "COPY", "HEAD", "OPTIONS", "LINK", "UNLINK", "PURGE",
];

/// Priority of any method missing from [`METHOD_ORDER`]
pub const UNKNOWN_PRIORITY: usize = METHOD_ORDER.len();

/// Position of `method` in [`METHOD_ORDER`], or [`UNKNOWN_PRIORITY`].
pub fn priority(method: &HttpMethod) -> usize {
    match method {
        HttpMethod::Get => 0,
        HttpMethod::Post => 1,
        HttpMethod::Put => 2,
        HttpMethod::Patch => 3,
        HttpMethod::Delete => 4,
        HttpMethod::Copy => 5,
        HttpMethod::Head => 6,
        HttpMethod::Options => 7,
        HttpMethod::Link => 8,
        HttpMethod::Unlink => 9,
        HttpMethod::Purge => 10,
        HttpMethod::Other(_) => UNKNOWN_PRIORITY,
    }
}

/// Sort key of a request. Field order matters: the derived `Ord` compares priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey<'a> {
    pub priority: usize,
    pub name: &'a str,
}

impl<'a> SortKey<'a> {
    pub fn new(method: &HttpMethod, name: &'a str) -> Self {
        Self {
            priority: priority(method),
            name,
        }
    }
}

/// Inserts `item` into the already ordered `list`, keeping it ordered.
///
/// The item goes after every element with an equal key, so the result is the same as
/// appending and running a stable sort.
pub fn insert_sorted<'k, T, F>(list: &mut Vec<T>, item: T, key: F)
where
    F: Fn(&T) -> SortKey<'k>,
{
    let new_key = key(&item);
    let position = list.partition_point(|existing| key(existing) <= new_key);
    list.insert(position, item);
}

/// Whether `keys` is already in policy order
pub fn is_ordered<'k>(keys: impl IntoIterator<Item = SortKey<'k>>) -> bool {
    let mut previous: Option<SortKey<'k>> = None;
    for key in keys {
        if let Some(prev) = previous {
            if prev.cmp(&key) == Ordering::Greater {
                return false;
            }
        }
        previous = Some(key);
    }
    true
}
