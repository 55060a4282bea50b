/// Min-max normalization of `values` into the range [0, 1].
///
/// If all values are equal every element maps to `0.0`. Empty input and
/// non-finite values are rejected.
pub fn normalize(values: &[f64]) -> anyhow::Result<Vec<f64>> {
    anyhow::ensure!(!values.is_empty(), "Cannot normalize an empty sequence");
    if let Some(value) = values.iter().find(|v| !v.is_finite()) {
        anyhow::bail!("Cannot normalize non-finite value {}", value);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max == min {
        return Ok(vec![0.0; values.len()]);
    }

    let range = max - min;
    if range.is_finite() {
        return Ok(values.iter().map(|value| (value - min) / range).collect());
    }

    // Span exceeds f64::MAX, work on halved values instead
    let half_min = min / 2.0;
    let half_range = max / 2.0 - half_min;
    Ok(values
        .iter()
        .map(|value| (value / 2.0 - half_min) / half_range)
        .collect())
}
