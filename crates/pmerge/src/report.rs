use std::fmt::Write as _;
use std::time::Duration;

/// `header` followed by every value, each preceded by one space.
pub fn values_line(header: &str, values: &[u64]) -> String {
    let mut line = String::with_capacity(header.len() + values.len() * 4);
    line.push_str(header);
    for value in values {
        let _ = write!(line, " {value}");
    }
    line
}

/// One timing line: element count right-aligned to width 4, microseconds with the
/// nanosecond remainder as three fractional digits.
pub fn timing_line(len: usize, name: &str, elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    format!(
        "Time to process a range of {len:>4} elements with {name} : {}.{:03} us",
        nanos / 1000,
        nanos % 1000
    )
}

pub fn comparisons_line(name: &str, comparisons: usize) -> String {
    format!("Comparisons with {name} : {comparisons}")
}
