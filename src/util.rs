/// Asserts that a numerical value is in the provided interval `[a,b]` and panics
/// with a helpful message if not
///
/// ### Example
/// ```
/// # use ucb::assert_interval;
/// let p = 0.5;
/// assert_interval!(p, 0.0, 1.0);
/// ```
/// A value of `2.0` would panic with the message "Invalid value for \`p\`. Must be in the interval \[0.0, 1.0\]."
#[macro_export]
macro_rules! assert_interval {
    ($var:expr, $a:expr, $b:expr) => {
        assert!(
            $var >= $a && $var <= $b,
            "Invalid value for `{}`. Must be in the interval [{}, {}].",
            stringify!($var),
            $a,
            $b,
        );
    };
}

/// Index of the first maximum, skipping `NaN`
///
/// Returns `0` if `values` is empty or entirely `NaN`. Played arms score `NaN` when a square root
/// gets a negative argument: a Metric-UCB arm with negative average reward, or UCB-Tuned fed squared
/// sums inconsistent with the reward sums. Unplayed arms are always `+inf`.
pub fn argmax_first(values: &[f64]) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, b)| v > b) {
            best = Some((i, v));
        }
    }
    best.map_or(0, |(i, _)| i)
}
