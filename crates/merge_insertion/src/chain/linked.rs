use super::Chain;

// Slot 0 is the circular list's sentinel; the end cursor is the sentinel itself.
const SENTINEL: usize = 0;

#[derive(Clone, Copy, Debug)]
struct Node {
    value: u64,
    prev: usize,
    next: usize,
}

/// Doubly linked realization backed by an index arena.
///
/// Runs are spliced in and out by relinking their end nodes, so `detach`, `attach` and
/// `swap_halves` are O(1) once the cursors are known. There is no indexed access: reaching
/// the k-th element from a cursor walks k links.
#[derive(Clone, Debug)]
pub struct LinkedChain {
    nodes: Vec<Node>,
    len: usize,
}

/// A run detached from a [`LinkedChain`]. Its nodes stay in the arena of the chain they
/// came from and may only be attached back to that chain.
#[derive(Debug)]
pub struct LinkedUnit {
    first: usize,
    last: usize,
    len: usize,
}

impl LinkedChain {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity + 1);
        nodes.push(Node {
            value: 0,
            prev: SENTINEL,
            next: SENTINEL,
        });
        Self { nodes, len: 0 }
    }

    pub fn push_back(&mut self, value: u64) {
        let id = self.nodes.len();
        let tail = self.nodes[SENTINEL].prev;
        self.nodes.push(Node {
            value,
            prev: tail,
            next: SENTINEL,
        });
        self.nodes[tail].next = id;
        self.nodes[SENTINEL].prev = id;
        self.len += 1;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            chain: self,
            cursor: self.nodes[SENTINEL].next,
            remaining: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }
}

impl Default for LinkedChain {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<u64> for LinkedChain {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut chain = Self::with_capacity(iter.size_hint().0);
        chain.extend(iter);
        chain
    }
}

impl Extend<u64> for LinkedChain {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl From<&[u64]> for LinkedChain {
    fn from(values: &[u64]) -> Self {
        values.iter().copied().collect()
    }
}

pub struct Iter<'a> {
    chain: &'a LinkedChain,
    cursor: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.chain.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a LinkedChain {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Chain for LinkedChain {
    type Cursor = usize;
    type Unit = LinkedUnit;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn front(&self) -> usize {
        self.nodes[SENTINEL].next
    }

    fn advance(&self, mut cursor: usize, steps: usize) -> usize {
        for _ in 0..steps {
            debug_assert_ne!(cursor, SENTINEL, "advanced past the end of the chain");
            cursor = self.nodes[cursor].next;
        }
        cursor
    }

    #[inline]
    fn value(&self, cursor: usize) -> u64 {
        debug_assert_ne!(cursor, SENTINEL);
        self.nodes[cursor].value
    }

    fn swap_halves(&mut self, first: usize, left_last: usize, right_last: usize) -> usize {
        let prev = self.nodes[first].prev;
        let right_first = self.nodes[left_last].next;
        let next = self.nodes[right_last].next;

        self.nodes[prev].next = right_first;
        self.nodes[right_first].prev = prev;
        self.nodes[right_last].next = first;
        self.nodes[first].prev = right_last;
        self.nodes[left_last].next = next;
        self.nodes[next].prev = left_last;
        next
    }

    fn detach(&mut self, at: usize, count: usize) -> (LinkedUnit, usize) {
        debug_assert!(count > 0);
        let last = self.advance(at, count - 1);
        let prev = self.nodes[at].prev;
        let next = self.nodes[last].next;

        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.len -= count;

        let unit = LinkedUnit {
            first: at,
            last,
            len: count,
        };
        (unit, next)
    }

    fn attach(&mut self, at: usize, unit: LinkedUnit) {
        let prev = self.nodes[at].prev;

        self.nodes[prev].next = unit.first;
        self.nodes[unit.first].prev = prev;
        self.nodes[unit.last].next = at;
        self.nodes[at].prev = unit.last;
        self.len += unit.len;
    }

    #[inline]
    fn representative(&self, unit: &LinkedUnit) -> u64 {
        self.nodes[unit.last].value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_links(chain: &LinkedChain) {
        let mut cursor = SENTINEL;
        for _ in 0..=chain.len() {
            let next = chain.nodes[cursor].next;
            assert_eq!(chain.nodes[next].prev, cursor);
            cursor = next;
        }
        assert_eq!(cursor, SENTINEL);
    }

    #[test]
    fn empty_chain() {
        let chain = LinkedChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.front(), SENTINEL);
        assert_eq!(chain.iter().next(), None);
        check_links(&chain);
    }

    #[test]
    fn swap_halves_at_both_ends() {
        let mut chain = LinkedChain::from(&[1, 2, 3, 4][..]);
        let first = chain.front();
        let left_last = chain.advance(first, 1);
        let right_last = chain.advance(left_last, 2);
        let next = chain.swap_halves(first, left_last, right_last);

        assert_eq!(next, SENTINEL);
        assert_eq!(chain.to_vec(), vec![3, 4, 1, 2]);
        check_links(&chain);
    }

    #[test]
    fn detach_keeps_cursor_live() {
        let mut chain: LinkedChain = (1..=6).collect();
        let at = chain.advance(chain.front(), 2);
        let (unit, next) = chain.detach(at, 2);

        assert_eq!(chain.value(next), 5);
        assert_eq!(chain.representative(&unit), 4);
        assert_eq!(chain.len(), 4);
        assert_eq!(chain.to_vec(), vec![1, 2, 5, 6]);
        check_links(&chain);

        let front = chain.front();
        chain.attach(front, unit);
        assert_eq!(chain.to_vec(), vec![3, 4, 1, 2, 5, 6]);
        check_links(&chain);
    }

    #[test]
    fn attach_at_end() {
        let mut chain: LinkedChain = [7, 8, 9].into_iter().collect();
        let (unit, _) = chain.detach(chain.front(), 1);
        let end = chain.advance(chain.front(), chain.len());
        chain.attach(end, unit);

        assert_eq!(chain.to_vec(), vec![8, 9, 7]);
        assert_eq!(chain.iter().len(), 3);
        check_links(&chain);
    }
}
