use std::collections::HashMap;
use std::hash::Hash;

/// Counts the distinct values that occur more than once, using only vectors.
///
/// `seen` and `duplicates` are plain `Vec`s, so every membership check is a
/// linear scan and the whole pass is O(n²).
pub fn count_duplicates_list<T>(data: &[T]) -> usize
where
    T: PartialEq,
{
    let mut seen: Vec<&T> = Vec::new();
    let mut duplicates: Vec<&T> = Vec::new();
    let mut count = 0;

    for item in data {
        if seen.contains(&item) {
            // only the first repeat of a value is counted
            if !duplicates.contains(&item) {
                duplicates.push(item);
                count += 1;
            }
        } else {
            seen.push(item);
        }
    }
    count
}

/// Counts the distinct values that occur more than once, using an occurrence tally.
///
/// One pass to build the `HashMap`, one pass over its values: O(n).
pub fn count_duplicates_dict<T>(data: &[T]) -> usize
where
    T: Eq + Hash,
{
    let mut counts: HashMap<&T, usize> = HashMap::with_capacity(data.len());
    for item in data {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts.values().filter(|&&n| n > 1).count()
}

/// Which duplicate counter to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    List,
    Dict,
}

impl AsRef<Self> for Strategy {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl Strategy {
    pub fn create_counter(strategy: impl AsRef<Self>) -> Box<dyn DuplicateCounter> {
        match strategy.as_ref() {
            Self::List => Box::new(ListCounter),
            Self::Dict => Box::new(DictCounter),
        }
    }
}

pub trait DuplicateCounter {
    /// Name shown in the benchmark report.
    fn label(&self) -> &'static str;

    /// Big-O label, e.g. `O(n)`.
    fn complexity(&self) -> &'static str;

    fn count(&self, data: &[i64]) -> usize;
}

/// Quadratic counter backed by [`count_duplicates_list`].
pub struct ListCounter;

impl DuplicateCounter for ListCounter {
    fn label(&self) -> &'static str {
        "List Version"
    }

    fn complexity(&self) -> &'static str {
        "O(n²)"
    }

    fn count(&self, data: &[i64]) -> usize {
        count_duplicates_list(data)
    }
}

/// Linear counter backed by [`count_duplicates_dict`].
pub struct DictCounter;

impl DuplicateCounter for DictCounter {
    fn label(&self) -> &'static str {
        "Dict Version"
    }

    fn complexity(&self) -> &'static str {
        "O(n)"
    }

    fn count(&self, data: &[i64]) -> usize {
        count_duplicates_dict(data)
    }
}
