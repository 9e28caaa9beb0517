use super::Chain;

/// Contiguous realization: cursors are indices, moving a run shifts the tail.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VecChain {
    data: Vec<u64>,
}

impl VecChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.data
    }
}

impl From<Vec<u64>> for VecChain {
    fn from(data: Vec<u64>) -> Self {
        Self { data }
    }
}

impl FromIterator<u64> for VecChain {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl Chain for VecChain {
    type Cursor = usize;
    type Unit = Vec<u64>;

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn front(&self) -> usize {
        0
    }

    #[inline]
    fn advance(&self, cursor: usize, steps: usize) -> usize {
        debug_assert!(cursor + steps <= self.data.len());
        cursor + steps
    }

    #[inline]
    fn value(&self, cursor: usize) -> u64 {
        self.data[cursor]
    }

    fn swap_halves(&mut self, first: usize, left_last: usize, right_last: usize) -> usize {
        let half = left_last + 1 - first;
        debug_assert_eq!(right_last - left_last, half);
        self.data[first..=right_last].rotate_left(half);
        right_last + 1
    }

    fn detach(&mut self, at: usize, count: usize) -> (Vec<u64>, usize) {
        let unit = self.data.drain(at..at + count).collect();
        (unit, at)
    }

    fn attach(&mut self, at: usize, unit: Vec<u64>) {
        self.data.splice(at..at, unit);
    }

    #[inline]
    fn representative(&self, unit: &Vec<u64>) -> u64 {
        unit[unit.len() - 1]
    }
}
