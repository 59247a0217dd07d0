use num_traits::Float;

/// Number of discrete steps a spectrum index is quantized to within one turn.
pub const INDEX_GRANULARITY: f64 = 65535.0;

/// Maps `x` from `[in_min, in_max]` onto `[out_min, out_max]`, clamping the
/// result to the output range. The output range may be descending.
///
/// A zero-width input range does not divide: the offset `x - in_min` is used
/// as the fraction directly, and when that is zero too the midpoint of the
/// output range is returned.
///
/// ```
/// use spectrum_tools::map_range;
///
/// assert_eq!(map_range(0.25, 0.0, 1.0, 0.0, 200.0), 50.0);
/// assert_eq!(map_range(0.25, 0.0, 1.0, 200.0, 0.0), 150.0);
/// assert_eq!(map_range(2.0, 0.0, 1.0, 0.0, 200.0), 200.0);
/// assert_eq!(map_range(3.0, 3.0, 3.0, 0.0, 10.0), 5.0);
/// ```
pub fn map_range<T: Float>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    let in_range = in_max - in_min;
    let in_delta = x - in_min;

    let fraction = if in_range != T::zero() {
        in_delta / in_range
    } else if in_delta != T::zero() {
        in_delta
    } else {
        T::one() / (T::one() + T::one())
    };

    let mapped = fraction * (out_max - out_min) + out_min;

    if out_min <= out_max {
        mapped.min(out_max).max(out_min)
    } else {
        mapped.max(out_max).min(out_min)
    }
}

/// Folds any index onto `[0, 1)` as `|index| mod 1`, quantized down to
/// [`INDEX_GRANULARITY`] steps. Non-finite input folds to `0.0`.
pub fn normalize_index(index: f64) -> f64 {
    let steps = (index.abs() * INDEX_GRANULARITY).floor() % INDEX_GRANULARITY;
    if steps.is_finite() { steps / INDEX_GRANULARITY } else { 0.0 }
}

/// Like [`normalize_index`], except that a non-zero index landing exactly on a
/// whole turn folds to `1.0` instead of `0.0`, so the top of a two-point
/// range stays reachable.
pub(crate) fn normalize_index_closed(index: f64) -> f64 {
    let folded = normalize_index(index);
    // an overflowed step count folds to the start in both folds
    let steps = index.abs() * INDEX_GRANULARITY;
    if folded == 0.0 && steps.is_finite() && index.abs() >= 1.0 {
        1.0
    } else {
        folded
    }
}
