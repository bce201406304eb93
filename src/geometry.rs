//! Pure geometry helpers.

/// Bound `value` to the closed range `[low, high]`.
///
/// Total over its inputs:
/// - an inverted range (`low > high`) resolves to `low`
/// - a value that does not order against `low` (e.g. `f64::NAN`) resolves to `low`
///
/// # Examples
///
/// ```
/// use pullup_console::geometry::clamp;
///
/// assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
/// assert_eq!(clamp(-3.0, 0.0, 10.0), 0.0);
/// assert_eq!(clamp(42.0, 0.0, 10.0), 10.0);
/// assert_eq!(clamp(5.0, 10.0, 0.0), 10.0);
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn clamp<T>(value: T, low: T, high: T) -> T
where
    T: PartialOrd + Copy,
{
    if !(low <= high) {
        return low;
    }

    if !(value >= low) {
        low
    } else if value > high {
        high
    } else {
        value
    }
}
