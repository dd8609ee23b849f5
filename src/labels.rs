//! Exact-membership counts for every combination of sets.
//!
//! An element lands in pattern `P` iff it is a member of every set marked
//! `1` in `P` and of none marked `0`, so the patterns partition the union.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::VennError;
use crate::pattern::{Pattern, check_set_count};

/// Label text per membership pattern.
pub type Labels = BTreeMap<Pattern, String>;

/// Separator between the pattern and the rest of a label in logic mode.
pub const LOGIC_SEPARATOR: &str = ": ";

/// A component a label can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    /// The pattern itself, e.g. `"101: "`.
    Logic,
    /// Number of elements in the pattern.
    Number,
    /// Share of the union, e.g. `"(12.5%)"`.
    Percent,
}

impl std::str::FromStr for Fill {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "logic" => Ok(Fill::Logic),
            "number" => Ok(Fill::Number),
            "percent" => Ok(Fill::Percent),
            other => Err(format!(
                "Unknown fill '{}'. Available: logic, number, percent",
                other
            )),
        }
    }
}

/// Elements of each pattern, keyed by pattern.
pub fn partition<T, C>(collections: &[C]) -> Result<BTreeMap<Pattern, HashSet<T>>, VennError>
where
    T: Eq + Hash + Clone,
    C: AsRef<[T]>,
{
    let n = collections.len();
    check_set_count(n)?;

    let sets: Vec<HashSet<&T>> = collections
        .iter()
        .map(|c| c.as_ref().iter().collect())
        .collect();
    let union: HashSet<&T> = sets.iter().flatten().copied().collect();
    debug!(sets = n, union = union.len(), "partitioning sets");

    let mut out = BTreeMap::new();
    for pattern in Pattern::all(n)? {
        let mut value = union.clone();
        for i in pattern.included() {
            value.retain(|e| sets[i].contains(e));
        }
        for i in pattern.excluded() {
            value.retain(|e| !sets[i].contains(e));
        }
        out.insert(pattern, value.into_iter().cloned().collect());
    }
    Ok(out)
}

/// Number of elements of each pattern.
pub fn counts<T, C>(collections: &[C]) -> Result<BTreeMap<Pattern, usize>, VennError>
where
    T: Eq + Hash + Clone,
    C: AsRef<[T]>,
{
    Ok(partition(collections)?
        .into_iter()
        .map(|(pattern, set)| (pattern, set.len()))
        .collect())
}

/// Label text for every non-empty pattern of `collections`.
///
/// Components are appended in a fixed order regardless of their order in
/// `fill`: logic prefix, count, percentage.
pub fn compute_labels<T, C>(collections: &[C], fill: &[Fill]) -> Result<Labels, VennError>
where
    T: Eq + Hash + Clone,
    C: AsRef<[T]>,
{
    let counts = counts(collections)?;
    let total: usize = counts.values().sum();

    let want = |f: Fill| fill.contains(&f);
    if want(Fill::Percent) && total == 0 {
        return Err(VennError::EmptyUnion);
    }

    let labels = counts
        .into_iter()
        .map(|(pattern, count)| {
            let mut text = String::new();
            if want(Fill::Logic) {
                text.push_str(&pattern.to_string());
                text.push_str(LOGIC_SEPARATOR);
            }
            if want(Fill::Number) {
                text.push_str(&count.to_string());
            }
            if want(Fill::Percent) {
                text.push_str(&format!("({:.1}%)", 100.0 * count as f64 / total as f64));
            }
            (pattern, text)
        })
        .collect();
    Ok(labels)
}
