//! Per-node outcome tables

use std::{collections::BTreeMap, fmt};

use serde::{Serialize, Serializer};

use crate::tictactoe::GameOutcome;

/// How many terminal leaves of each outcome are reachable beneath a node.
///
/// Behaves like a map from [`GameOutcome`] to a positive count: an outcome
/// with count zero is simply absent from [`iter`](Self::iter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OutcomeCounts {
    counts: [u64; 3],
}

impl OutcomeCounts {
    /// An empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The table of a terminal node: `{outcome: 1}`
    pub fn singleton(outcome: GameOutcome) -> Self {
        let mut table = Self::new();
        table.counts[outcome.index()] = 1;
        table
    }

    /// Count for one outcome (zero when absent)
    pub fn get(&self, outcome: GameOutcome) -> u64 {
        self.counts[outcome.index()]
    }

    /// Outcomes with a positive count, in table order
    pub fn iter(&self) -> impl Iterator<Item = (GameOutcome, u64)> + '_ {
        GameOutcome::ALL
            .into_iter()
            .map(|outcome| (outcome, self.get(outcome)))
            .filter(|&(_, count)| count > 0)
    }

    /// Sum over all outcomes
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of outcomes with a positive count
    pub fn distinct(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The outcome, when exactly one has a positive count
    pub fn sole_outcome(&self) -> Option<GameOutcome> {
        let mut positive = self.iter();
        let (outcome, _) = positive.next()?;
        positive.next().is_none().then_some(outcome)
    }

    /// Element-wise addition
    pub fn add(&mut self, other: &OutcomeCounts) {
        for (slot, amount) in self.counts.iter_mut().zip(other.counts) {
            *slot += amount;
        }
    }

    /// Element-wise subtraction.
    ///
    /// # Panics
    ///
    /// Panics if any entry of `other` exceeds the count present here. That only
    /// happens when a caller removes the same subtree twice or edits the tree
    /// without going through the aggregator, and continuing would corrupt every
    /// ancestor's table.
    pub fn subtract(&mut self, other: &OutcomeCounts) {
        for outcome in GameOutcome::ALL {
            let present = self.counts[outcome.index()];
            let amount = other.counts[outcome.index()];
            self.counts[outcome.index()] = present.checked_sub(amount).unwrap_or_else(|| {
                panic!("outcome table underflow: cannot subtract {amount} {outcome} from {present}")
            });
        }
    }
}

impl FromIterator<(GameOutcome, u64)> for OutcomeCounts {
    fn from_iter<I: IntoIterator<Item = (GameOutcome, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (outcome, count) in iter {
            table.counts[outcome.index()] += count;
        }
        table
    }
}

impl fmt::Display for OutcomeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (outcome, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{outcome}: {count}")?;
        }
        f.write_str("}")
    }
}

impl Serialize for OutcomeCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<&str, u64> = self
            .iter()
            .map(|(outcome, count)| (outcome.as_str(), count))
            .collect();
        map.serialize(serializer)
    }
}
