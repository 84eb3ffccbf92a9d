/// Compute the minimum and maximum of the present values, skipping missing
/// entries and NaN.
///
/// Returns `None` when no value remains, rather than an inverted
/// `(+inf, -inf)` extent.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
