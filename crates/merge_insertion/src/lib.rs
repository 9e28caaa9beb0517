mod chain;
mod engine;
mod jacobsthal;
mod search;

pub use chain::{Chain, LinkedChain, VecChain};
pub use engine::{SortStats, merge_insertion_sort};
pub use jacobsthal::insert_span_counts;
pub use search::insertion_point;

/// Sequence realizations the engine is instantiated with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Representation {
    Contiguous,
    Linked,
}

pub const ALL_REPRESENTATIONS: [Representation; 2] =
    [Representation::Contiguous, Representation::Linked];

pub fn all_representations() -> &'static [Representation] {
    &ALL_REPRESENTATIONS
}

pub fn representation_name(repr: Representation) -> &'static str {
    match repr {
        Representation::Contiguous => "std::vec::Vec<u64>",
        Representation::Linked => "merge_insertion::LinkedChain",
    }
}

/// Sorts `data` through the chosen realization and writes the result back.
///
/// For [`Representation::Linked`] this includes building the linked chain and reading it
/// back; use [`merge_insertion_sort`] on a prepared chain to time the sort alone.
pub fn sort_u64(repr: Representation, data: &mut Vec<u64>) -> SortStats {
    match repr {
        Representation::Contiguous => {
            let mut chain = VecChain::from(std::mem::take(data));
            let stats = merge_insertion_sort(&mut chain);
            *data = chain.into_vec();
            stats
        }
        Representation::Linked => {
            let mut chain = LinkedChain::from(&data[..]);
            let stats = merge_insertion_sort(&mut chain);
            data.clear();
            data.extend(chain.iter());
            stats
        }
    }
}
