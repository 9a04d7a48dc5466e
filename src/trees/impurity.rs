//! Entropy and information gain over categorical splits
use crate::data::record::{Feature, Label, Record};
use crate::data::roster::split_by_feature;
use std::borrow::Borrow;
use std::error::Error;

/// Counts each label in the order it first appears in `subset`.
pub fn label_counts<R: Borrow<Record>>(subset: &[R]) -> Vec<(Label, usize)> {
    let mut counts: Vec<(Label, usize)> = Vec::new();
    for item in subset {
        let label = item.borrow().label;
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
}

/// Shannon entropy of the labels in `subset`, in bits.
///
/// Labels absent from the subset contribute nothing.
///
/// # Errors
///
/// Returns an error if `subset` is empty.
pub fn entropy<R: Borrow<Record>>(subset: &[R]) -> Result<f64, Box<dyn Error>> {
    if subset.is_empty() {
        return Err("Cannot compute the entropy of an empty subset.".into());
    }
    let total = subset.len() as f64;
    let entropy: f64 = label_counts(subset)
        .into_iter()
        .map(|(_, count)| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();
    Ok(entropy)
}

/// Entropy of `dataset` minus the size-weighted entropy of its groups on `feature`.
///
/// # Errors
///
/// Returns an error if `dataset` is empty.
pub fn information_gain<R: Borrow<Record>>(
    dataset: &[R],
    feature: Feature,
) -> Result<f64, Box<dyn Error>> {
    let total_entropy = entropy(dataset)?;
    let split = split_by_feature(dataset, feature);

    let num_samples = dataset.len() as f64;
    let mut weighted_entropy = 0.0;
    for (_, group) in split.groups() {
        weighted_entropy += (group.len() as f64 / num_samples) * entropy(group)?;
    }

    Ok(total_entropy - weighted_entropy)
}
