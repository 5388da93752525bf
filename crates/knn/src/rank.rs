//! Neighbor ranking by ascending distance.

use std::cmp::Ordering;

/// Ranks the `k_eff` nearest neighbors from squared distances.
///
/// Uses a full sort on (distance, index) pairs — efficient and cache-friendly
/// for the typical few-hundred-sample reference sets this system sees. Equal
/// distances order by ascending original index, so the ranking is fully
/// deterministic.
///
/// Writes results into caller-provided buffers:
/// - `pairs`: scratch buffer for (distance, index) pairs
/// - `nn_indices`: indices of the k nearest neighbors (ascending distance)
/// - `nn_dists`: Euclidean distances (sqrt of squared distances) of the k
///   nearest neighbors
///
/// # Panics
///
/// Debug-asserts that `k_eff >= 1` and `k_eff <= d_sq.len()`.
pub(crate) fn rank_neighbors(
    d_sq: &[f64],
    k_eff: usize,
    pairs: &mut Vec<(f64, usize)>,
    nn_indices: &mut Vec<usize>,
    nn_dists: &mut Vec<f64>,
) {
    debug_assert!(k_eff >= 1);
    debug_assert!(k_eff <= d_sq.len());

    pairs.clear();
    pairs.extend(d_sq.iter().copied().enumerate().map(|(i, d)| (d, i)));

    // NaN-safe via Ordering::Equal fallback; index comparison settles distance ties.
    pairs.sort_unstable_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });
    pairs.truncate(k_eff);

    nn_indices.clear();
    nn_dists.clear();
    for &(d2, idx) in pairs.iter() {
        nn_indices.push(idx);
        nn_dists.push(d2.sqrt());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Helper to avoid repeating buffer setup in every test.
    fn run(d_sq: &[f64], k_eff: usize) -> (Vec<usize>, Vec<f64>) {
        let mut pairs = Vec::new();
        let mut nn_indices = Vec::new();
        let mut nn_dists = Vec::new();
        rank_neighbors(d_sq, k_eff, &mut pairs, &mut nn_indices, &mut nn_dists);
        (nn_indices, nn_dists)
    }

    #[test]
    fn test_k1_closest() {
        let (indices, dists) = run(&[9.0, 1.0, 4.0], 1);
        assert_eq!(indices, vec![1]);
        assert_abs_diff_eq!(dists[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_k_equals_n_all_sorted() {
        let (indices, dists) = run(&[4.0, 1.0, 9.0, 0.0], 4);
        assert_eq!(indices, vec![3, 1, 0, 2]);
        let expected = [0.0, 1.0, 2.0, 3.0];
        for (got, want) in dists.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ties_order_by_index() {
        let (indices, dists) = run(&[4.0, 4.0, 1.0], 3);
        assert_eq!(indices, vec![2, 0, 1]);
        assert_abs_diff_eq!(dists[1], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dists[2], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_all_equal_distances() {
        let (indices, _) = run(&[7.0, 7.0, 7.0, 7.0], 4);
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_sqrt_correctness() {
        let (indices, dists) = run(&[16.0, 25.0], 2);
        assert_eq!(indices, vec![0, 1]);
        assert_abs_diff_eq!(dists[0], 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dists[1], 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_sample() {
        let (indices, dists) = run(&[7.0], 1);
        assert_eq!(indices, vec![0]);
        assert_abs_diff_eq!(dists[0], 7.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_buffer_clearing() {
        let mut pairs = Vec::new();
        let mut nn_indices = Vec::new();
        let mut nn_dists = Vec::new();

        rank_neighbors(
            &[9.0, 1.0, 4.0],
            2,
            &mut pairs,
            &mut nn_indices,
            &mut nn_dists,
        );
        assert_eq!(nn_indices.len(), 2);

        // Second call with different data — buffers must be cleared internally
        rank_neighbors(&[25.0, 16.0], 1, &mut pairs, &mut nn_indices, &mut nn_dists);
        assert_eq!(nn_indices, vec![1]);
        assert_abs_diff_eq!(nn_dists[0], 4.0, epsilon = 1e-12);
        assert_eq!(nn_dists.len(), 1);
    }
}
