/// Pending-group capacities for one sort call, in units: 2, 2, 6, 10, 22, 42, ...
///
/// Raw values follow the Jacobsthal recurrence `j_k = 2 * j_{k-1} + (-1)^k` starting from
/// `1, 1`; each is doubled on output. Generation stops once twice the raw sum reaches
/// `required_units`, which is enough to cover every pending unit of an input of that length.
pub fn insert_span_counts(required_units: usize) -> Vec<usize> {
    if required_units <= 1 {
        return Vec::new();
    }

    let mut counts = vec![1_usize];
    let mut last = 1_usize;
    let mut sum = last;
    let mut k = 1_usize;
    while sum * 2 < required_units {
        let next = if k % 2 == 1 { 2 * last - 1 } else { 2 * last + 1 };
        counts.push(next);
        last = next;
        sum += next;
        k += 1;
    }

    for count in &mut counts {
        *count *= 2;
    }
    counts
}
