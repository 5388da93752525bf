//! Majority vote with neighborhood contraction.
//!
//! A ballot over the `k` nearest neighbors either determines a unique
//! majority label or is ambiguous; an ambiguous ballot contracts to `k - 1`
//! and retries. A single-neighbor ballot has exactly one vote, so the
//! contraction always terminates with a determined label when at least one
//! neighbor exists.

/// State of the contracting vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VoteState {
    /// A ballot at neighborhood size `k` is pending.
    Voting(usize),
    /// A unique majority label was found.
    Determined(usize),
    /// No neighborhood size down to 1 produced a unique majority.
    ///
    /// Unreachable through [`contract_vote`] with a non-empty ranking (a
    /// one-neighbor ballot is structurally unique); kept as an explicit
    /// terminal state rather than a panic.
    Undetermined,
}

/// Casts one ballot over the first `k` ranked labels.
///
/// Builds a histogram across all `num_classes` labels (zero counts
/// included), tracks the maximum with strict `>` so the recorded argmax is
/// order-independent, then checks uniqueness in a separate counting pass.
///
/// # Panics
///
/// Debug-asserts `1 <= k <= ranked_labels.len()` and that every label is
/// below `num_classes`.
pub(crate) fn vote_round(
    ranked_labels: &[usize],
    num_classes: usize,
    k: usize,
    counts: &mut Vec<usize>,
) -> VoteState {
    debug_assert!(k >= 1);
    debug_assert!(k <= ranked_labels.len());

    counts.clear();
    counts.resize(num_classes, 0);
    for &label in &ranked_labels[..k] {
        debug_assert!(label < num_classes);
        counts[label] += 1;
    }

    let mut max_count = 0;
    let mut max_label = 0;
    for (label, &count) in counts.iter().enumerate() {
        if count > max_count {
            max_count = count;
            max_label = label;
        }
    }

    let n_at_max = counts.iter().filter(|&&c| c == max_count).count();
    if n_at_max == 1 {
        VoteState::Determined(max_label)
    } else if k > 1 {
        VoteState::Voting(k - 1)
    } else {
        VoteState::Undetermined
    }
}

/// Runs ballots from the full ranking down to a single neighbor.
///
/// Terminates on the first unique majority, which favors the closest
/// neighbors on ties instead of breaking them arbitrarily.
pub(crate) fn contract_vote(
    ranked_labels: &[usize],
    num_classes: usize,
    counts: &mut Vec<usize>,
) -> VoteState {
    debug_assert!(!ranked_labels.is_empty());

    let mut state = VoteState::Voting(ranked_labels.len());
    while let VoteState::Voting(k) = state {
        state = vote_round(ranked_labels, num_classes, k, counts);
    }
    state
}
