/// Probability, as a percentage, of every sum in a contiguous range
///
/// Sums are kept in ascending order, each present exactly once. Tables coming out of the
/// enumerator or the estimator cover every sum from `count` to `count * faces`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeTable {
    min_sum: u32,
    percentages: Vec<f64>,
}

impl OutcomeTable {
    // the first entry is min_sum followed by consecutive sums, the last of which has to fit a u32
    pub(crate) fn from_percentages(min_sum: u32, percentages: Vec<f64>) -> Self {
        debug_assert!(u64::from(min_sum) + percentages.len() as u64 <= u64::from(u32::MAX) + 1);
        Self {
            min_sum,
            percentages,
        }
    }

    // counts[i] is the number of outcomes summing to min_sum + i
    pub(crate) fn from_counts(min_sum: u32, counts: &[u64], total: u64) -> Self {
        debug_assert!(total > 0);
        let total = total as f64;
        let percentages = counts
            .iter()
            .map(|&count| count as f64 / total * 100.)
            .collect();
        Self::from_percentages(min_sum, percentages)
    }

    pub fn len(&self) -> usize {
        self.percentages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.percentages.is_empty()
    }

    pub fn min_sum(&self) -> Option<u32> {
        (!self.is_empty()).then_some(self.min_sum)
    }

    pub fn max_sum(&self) -> Option<u32> {
        (!self.is_empty()).then(|| self.min_sum + (self.len() as u32 - 1))
    }

    pub fn get(&self, sum: u32) -> Option<f64> {
        let idx = sum.checked_sub(self.min_sum)?;
        self.percentages.get(idx as usize).copied()
    }

    /// (sum, percentage) pairs in ascending order of sum
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (u32, f64)> + '_ {
        self.percentages
            .iter()
            .enumerate()
            .map(|(idx, &pct)| (self.min_sum + idx as u32, pct))
    }

    pub fn sums(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.iter().map(|(sum, _)| sum)
    }

    /// Sum of every percentage, ~100 for a complete table
    pub fn total(&self) -> f64 {
        self.percentages.iter().sum()
    }

    /// A copy holding only the sums within lower..=upper
    pub fn pruned(&self, lower: u32, upper: u32) -> OutcomeTable {
        let (Some(min), Some(max)) = (self.min_sum(), self.max_sum()) else {
            return self.clone();
        };
        let lo = lower.max(min);
        let hi = upper.min(max);
        if lo > hi {
            return OutcomeTable::from_percentages(lo, vec![]);
        }
        let start = (lo - min) as usize;
        let end = (hi - min) as usize;
        OutcomeTable::from_percentages(lo, self.percentages[start..=end].to_vec())
    }
}

/// Probability, as a percentage, of rolling a sum within lower..=upper
///
/// Sums outside of the range are dropped before adding up what remains, an empty range
/// (lower > upper) has a probability of 0.
pub fn range_probability(table: &OutcomeTable, lower: u32, upper: u32) -> f64 {
    table.pruned(lower, upper).total()
}

/// The mean sum, weighting every sum by its probability
pub fn expected_value(table: &OutcomeTable) -> f64 {
    table
        .iter()
        .map(|(sum, pct)| f64::from(sum) * (pct / 100.))
        .sum()
}
