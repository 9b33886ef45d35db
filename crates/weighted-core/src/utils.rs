//! Utility functions for working with data slices

/// Indices that sort `data` ascending
///
/// Uses IEEE total ordering, so the result is deterministic for every input.
/// Validated samples never contain NaN, where the orderings coincide.
///
/// # Examples
///
/// ```rust
/// use weighted_core::utils::argsort;
///
/// assert_eq!(argsort(&[3.0, 1.0, 2.0]), vec![1, 2, 0]);
/// ```
pub fn argsort(data: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    order.sort_by(|&a, &b| data[a].total_cmp(&data[b]));
    order
}

/// Running sums `C[i] = data[0] + ... + data[i]`, without a leading zero
///
/// # Examples
///
/// ```rust
/// use weighted_core::utils::cumulative_sum;
///
/// assert_eq!(cumulative_sum(&[0.5, 0.25, 0.25]), vec![0.5, 0.75, 1.0]);
/// ```
pub fn cumulative_sum(data: &[f64]) -> Vec<f64> {
    data.iter()
        .scan(0.0, |acc, &x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

/// Running sums with a leading zero: `P[0] = 0`, `P[i] = P[i-1] + data[i-1]`
///
/// The result has `data.len() + 1` entries.
pub fn cumulative_grid(data: &[f64]) -> Vec<f64> {
    let mut grid = Vec::with_capacity(data.len() + 1);
    grid.push(0.0);
    grid.extend(cumulative_sum(data));
    grid
}
