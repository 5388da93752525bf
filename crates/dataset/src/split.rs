//! Train/test partitioning.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::DatasetError;
use crate::sample::LabeledDataset;

/// Splits a dataset into train and test portions.
///
/// Sample indices are shuffled with a seeded RNG, then the first
/// `floor(len × train_pct / 100)` samples form the train set and the rest
/// the test set. Deterministic for a fixed seed. A 0 or 100 percentage
/// leaves one side empty, which downstream consumers accept.
///
/// # Errors
///
/// Returns an error if `train_pct` is not a finite value within `0..=100`.
pub fn split(
    dataset: &LabeledDataset,
    train_pct: f64,
    seed: u64,
) -> Result<(LabeledDataset, LabeledDataset), DatasetError> {
    if !train_pct.is_finite() || !(0.0..=100.0).contains(&train_pct) {
        return Err(DatasetError::InvalidTrainPct { train_pct });
    }

    let total = dataset.len();
    let n_train = ((total as f64) * train_pct / 100.0).floor() as usize;

    let mut indices: Vec<usize> = (0..total).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let mut train = LabeledDataset::empty(dataset.n_features());
    let mut test = LabeledDataset::empty(dataset.n_features());
    for (rank, &i) in indices.iter().enumerate() {
        let side = if rank < n_train { &mut train } else { &mut test };
        side.push(dataset.vector(i), dataset.label(i))?;
    }
    Ok((train, test))
}
