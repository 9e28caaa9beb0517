use crate::chain::Chain;

/// Finds where a unit with representative `target` belongs among the first `range_units`
/// units of `chain`, each `unit_size` elements long.
///
/// Returns the cursor right after the last unit whose representative is below `target`,
/// which is directly usable by [`Chain::attach`]. The searched prefix must already be
/// ordered by representative. Every probe is counted in `comparisons`.
pub fn insertion_point<C: Chain>(
    chain: &C,
    range_units: usize,
    unit_size: usize,
    target: u64,
    comparisons: &mut usize,
) -> C::Cursor {
    debug_assert!(unit_size > 0);
    debug_assert!(range_units * unit_size <= chain.len());

    let mut top = chain.front();
    let mut remaining = range_units;
    while remaining > 0 {
        let half = remaining / 2;
        let center = chain.advance(top, half * unit_size);
        let center_last = chain.advance(center, unit_size - 1);

        *comparisons += 1;
        if chain.value(center_last) < target {
            top = chain.advance(center_last, 1);
            remaining -= half + 1;
        } else {
            remaining = half;
        }
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{LinkedChain, VecChain};

    fn position<C: Chain>(chain: &C, cursor: C::Cursor) -> usize {
        let mut probe = chain.front();
        for index in 0..=chain.len() {
            if probe == cursor {
                return index;
            }
            if index < chain.len() {
                probe = chain.advance(probe, 1);
            }
        }
        panic!("cursor {cursor:?} is not in the chain");
    }

    fn check_both(values: &[u64], range_units: usize, unit_size: usize, target: u64) -> usize {
        let vec_chain = VecChain::from(values.to_vec());
        let linked_chain = LinkedChain::from(values);
        let mut vec_comparisons = 0;
        let mut linked_comparisons = 0;

        let at = insertion_point(&vec_chain, range_units, unit_size, target, &mut vec_comparisons);
        let linked_at = insertion_point(
            &linked_chain,
            range_units,
            unit_size,
            target,
            &mut linked_comparisons,
        );

        assert_eq!(position(&linked_chain, linked_at), at);
        assert_eq!(vec_comparisons, linked_comparisons);
        at
    }

    #[test]
    fn empty_range_returns_front() {
        assert_eq!(check_both(&[5, 6], 0, 1, 9), 0);
        assert_eq!(check_both(&[], 0, 1, 9), 0);
    }

    #[test]
    fn single_element_units() {
        let values = [10, 20, 30, 40, 50];
        assert_eq!(check_both(&values, 5, 1, 5), 0);
        assert_eq!(check_both(&values, 5, 1, 25), 2);
        assert_eq!(check_both(&values, 5, 1, 45), 4);
        assert_eq!(check_both(&values, 5, 1, 55), 5);
    }

    #[test]
    fn range_limits_the_search() {
        // The tail beyond the first three units is never probed, even when out of order.
        let values = [10, 20, 30, 1, 2];
        assert_eq!(check_both(&values, 3, 1, 99), 3);
    }

    #[test]
    fn multi_element_units_compare_by_last() {
        // Units: [1, 4] [2, 8] [3, 12]; a partial tail of one element follows.
        let values = [1, 4, 2, 8, 3, 12, 0];
        assert_eq!(check_both(&values, 3, 2, 3), 0);
        assert_eq!(check_both(&values, 3, 2, 6), 2);
        assert_eq!(check_both(&values, 3, 2, 10), 4);
        assert_eq!(check_both(&values, 3, 2, 13), 6);
    }

    #[test]
    fn probe_count_is_logarithmic() {
        let values: Vec<u64> = (0..255).map(|v| v * 2).collect();
        for target in [0, 1, 77, 255, 509, 600] {
            let chain = VecChain::from(values.clone());
            let mut comparisons = 0;
            insertion_point(&chain, values.len(), 1, target, &mut comparisons);
            assert!(comparisons <= 8, "target={target} comparisons={comparisons}");
        }
    }
}
