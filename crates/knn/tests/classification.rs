//! Integration tests for the classification contract.

use locus_knn::{ClassifierConfig, Prediction, classify, euclidean};

/// A reference set containing the query itself is classified as itself:
/// the distance-0 self-match dominates the vote at max_k = 1.
#[test]
fn self_match_returns_own_label() {
    let references = [
        67.0, 120.0, 89.0, //
        120.0, 55.0, 91.0, //
        70.0, 120.0, 85.0,
    ];
    let labels = [0, 1, 0];
    let config = ClassifierConfig::new(1, 2);

    for (i, &label) in labels.iter().enumerate() {
        let query = &references[i * 3..(i + 1) * 3];
        let result = classify(&references, 3, &labels, query, &config).unwrap();
        assert_eq!(result.label(), Some(label), "sample {i}");
        assert_eq!(result.nn_distances()[0], 0.0);
    }
}

/// max_k = 1 never yields an undetermined prediction.
#[test]
fn k1_always_determined() {
    let references: Vec<f64> = (0..30).map(|i| i as f64).collect();
    let labels: Vec<usize> = (0..30).map(|i| i % 5).collect();
    let config = ClassifierConfig::new(1, 5);

    for q in 0..40 {
        let result = classify(&references, 1, &labels, &[q as f64 + 0.3], &config).unwrap();
        assert!(matches!(result.prediction(), Prediction::Determined(_)));
    }
}

/// Two classes with one representative each among the 2 nearest neighbors:
/// the vote at k=2 is ambiguous and contracts to k=1, returning the label of
/// the single nearest neighbor.
#[test]
fn tie_at_k2_falls_back_to_nearest() {
    let references = [
        0.0, 0.0, // class 0, distance 1 from query
        2.0, 0.0, // class 1, distance 1 from query
        50.0, 50.0, // class 1, far away
    ];
    let labels = [0, 1, 1];
    let config = ClassifierConfig::new(2, 2);

    let result = classify(&references, 2, &labels, &[1.0, 0.0], &config).unwrap();
    // Equal distances rank by reference index, so sample 0 is nearest.
    assert_eq!(result.label(), Some(0));
}

/// Majority wins over proximity: the closest neighbor's class loses a 2-1
/// vote, so no contraction happens.
#[test]
fn majority_beats_proximity() {
    let references = [
        0.0, 0.0, // class 0, distance 1
        10.0, 10.0, // class 1, distance ~12.7
        10.0, 10.0, // class 1, distance ~12.7
    ];
    let labels = [0, 1, 1];
    let config = ClassifierConfig::new(3, 2);

    let result = classify(&references, 2, &labels, &[0.0, 1.0], &config).unwrap();
    assert_eq!(result.label(), Some(1));
}

/// Ranked distances are ascending and are true Euclidean distances.
#[test]
fn nn_distances_ascending_euclidean() {
    let references = [0.0, 0.0, 3.0, 4.0, 6.0, 8.0, 30.0, 40.0];
    let labels = [0, 0, 1, 1];
    let query = [0.0, 0.0];
    let config = ClassifierConfig::new(4, 2);

    let result = classify(&references, 2, &labels, &query, &config).unwrap();
    let dists = result.nn_distances();
    assert_eq!(dists.len(), 4);
    for w in dists.windows(2) {
        assert!(w[0] <= w[1]);
    }
    for (i, &d) in dists.iter().enumerate() {
        let row = &references[i * 2..(i + 1) * 2];
        assert!((d - euclidean(row, &query)).abs() < 1e-12);
    }
}

/// With a single class, every query maps to it.
#[test]
fn single_class_always_wins() {
    let references = [1.0, 2.0, 3.0, 4.0];
    let labels = [0, 0, 0, 0];
    let config = ClassifierConfig::new(3, 1);

    let result = classify(&references, 1, &labels, &[2.5], &config).unwrap();
    assert_eq!(result.label(), Some(0));
}

/// Classes absent from the reference set never win the vote even though the
/// histogram spans all of them.
#[test]
fn absent_class_cannot_win() {
    let references = [1.0, 2.0, 9.0];
    let labels = [0, 0, 2];
    // num_classes = 4: classes 1 and 3 have no representatives.
    let config = ClassifierConfig::new(3, 4);

    let result = classify(&references, 1, &labels, &[1.5], &config).unwrap();
    assert_eq!(result.label(), Some(0));
}
