//! Per-street demand counted from vehicle paths.
//!
//! Every occurrence of a street name in every path adds one to that street's
//! counter, including repeats inside a single path.  Names are taken as they
//! come: a path may mention a street the network has never heard of, and it
//! is counted like any other.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use ts_network::StreetNetwork;

/// Street name → number of path occurrences.
///
/// Only names seen at least once have an entry; [`get`](Self::get) reports 0
/// for everything else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsageMap {
    counts: HashMap<String, u64>,
}

impl UsageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Usage of `street`, 0 if it never appeared.
    #[inline]
    pub fn get(&self, street: &str) -> u64 {
        self.counts.get(street).copied().unwrap_or(0)
    }

    pub fn contains(&self, street: &str) -> bool {
        self.counts.contains_key(street)
    }

    /// Number of distinct street names seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counters, i.e. the total number of path-street occurrences.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(name, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }

    /// Names counted here that `network` does not define, sorted.
    ///
    /// Their counts are never read by the schedule builder.
    pub fn unknown_streets<'a>(&'a self, network: &StreetNetwork) -> Vec<&'a str> {
        let mut unknown: Vec<&str> = self
            .counts
            .keys()
            .map(String::as_str)
            .filter(|name| network.street_id(name).is_none())
            .collect();
        unknown.sort_unstable();
        unknown
    }

    fn record(&mut self, street: &str) {
        match self.counts.get_mut(street) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(street.to_owned(), 1);
            }
        }
    }
}

/// Count street usage over all `paths`.
///
/// Accepts anything that yields paths of street names, e.g.
/// `&[VehiclePath]` or `Vec<Vec<&str>>`.
///
/// ```
/// use ts_schedule::aggregate;
///
/// let usage = aggregate([vec!["a", "b"], vec!["a"]]);
/// assert_eq!(usage.get("a"), 2);
/// assert_eq!(usage.get("b"), 1);
/// assert_eq!(usage.get("c"), 0);
/// ```
pub fn aggregate<P, S>(paths: P) -> UsageMap
where
    P: IntoIterator,
    P::Item: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut usage = UsageMap::new();
    for path in paths {
        for street in path {
            usage.record(street.as_ref());
        }
    }
    usage
}
