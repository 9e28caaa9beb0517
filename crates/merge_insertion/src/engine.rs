use log::{debug, trace};

use crate::chain::Chain;
use crate::jacobsthal::insert_span_counts;
use crate::search::insertion_point;

/// Counters collected over one sort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStats {
    /// Element-vs-element comparisons, pairing and binary search probes together.
    pub comparisons: usize,
    /// Units peeled into pending groups and inserted back, over all levels.
    pub reinserted_units: usize,
    /// Span sizes at which the pairing pass ran.
    pub levels: usize,
}

/// Sorts `chain` in place with Ford–Johnson merge-insertion.
///
/// Elements are expected to be distinct; equal elements still end up sorted but their
/// relative order is unspecified.
pub fn merge_insertion_sort<C: Chain>(chain: &mut C) -> SortStats {
    let schedule = insert_span_counts(chain.len());
    let mut engine = Engine {
        chain,
        schedule,
        stats: SortStats::default(),
    };
    engine.sort_level(2);
    engine.stats
}

struct Engine<'a, C: Chain> {
    chain: &'a mut C,
    schedule: Vec<usize>,
    stats: SortStats,
}

impl<C: Chain> Engine<'_, C> {
    fn sort_level(&mut self, span: usize) {
        if self.chain.len() < span {
            return;
        }

        self.pair_units(span);
        debug!(
            "span={span}: paired {} units, recursing",
            self.chain.len() / (span / 2)
        );
        self.sort_level(span * 2);
        self.reinsert_pending(span);
    }

    /// Orders the two halves of every complete `span` block by their last element.
    fn pair_units(&mut self, span: usize) {
        let half = span / 2;
        let mut cursor = self.chain.front();
        let mut remaining = self.chain.len();
        while remaining >= span {
            let left_last = self.chain.advance(cursor, half - 1);
            let right_last = self.chain.advance(left_last, half);

            self.stats.comparisons += 1;
            cursor = if self.chain.value(right_last) < self.chain.value(left_last) {
                self.chain.swap_halves(cursor, left_last, right_last)
            } else {
                self.chain.advance(right_last, 1)
            };
            remaining -= span;
        }
        self.stats.levels += 1;
    }

    fn reinsert_pending(&mut self, span: usize) {
        let half = span / 2;
        let len = self.chain.len();
        let mut span_count = len / span;
        if len % span >= half {
            span_count += 1;
        }
        if span_count < 2 {
            return;
        }

        let groups = self.peel_pending(span);

        // The seed pair counts as a single unit of the grouping.
        let mut range_units = 1;
        let mut previous_group = 0;
        for group in groups {
            range_units += previous_group + group.len();
            previous_group = group.len();

            for unit in group.into_iter().rev() {
                let target = self.chain.representative(&unit);
                let at = insertion_point(
                    &*self.chain,
                    range_units,
                    half,
                    target,
                    &mut self.stats.comparisons,
                );
                trace!("span={span}: inserting unit ending in {target} (range {range_units})");
                self.chain.attach(at, unit);
                self.stats.reinserted_units += 1;
            }
        }
    }

    /// Detaches the smaller unit of every pair after the seed, plus a trailing unpaired
    /// unit, and buckets them by the insertion schedule.
    fn peel_pending(&mut self, span: usize) -> Vec<Vec<C::Unit>> {
        let half = span / 2;
        let mut groups: Vec<Vec<C::Unit>> = Vec::new();
        let mut cursor = self.chain.advance(self.chain.front(), span);
        let mut remaining = self.chain.len() - span;
        loop {
            let is_full = match groups.last() {
                None => true,
                Some(group) => group.len() == self.group_capacity(groups.len() - 1),
            };
            if is_full {
                groups.push(Vec::new());
            }

            let (unit, next) = self.chain.detach(cursor, half);
            remaining -= half;
            if let Some(group) = groups.last_mut() {
                group.push(unit);
            }
            if remaining < span {
                break;
            }
            cursor = self.chain.advance(next, half);
            remaining -= half;
        }

        debug!(
            "span={span}: {} pending groups, chain shrunk to {}",
            groups.len(),
            self.chain.len()
        );
        groups
    }

    fn group_capacity(&self, group: usize) -> usize {
        self.schedule.get(group).copied().unwrap_or(usize::MAX)
    }
}
