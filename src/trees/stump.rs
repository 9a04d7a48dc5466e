//! Decision Stump Classifier
use crate::data::record::{Feature, Label, Record};
use crate::data::roster::{split_by_feature, Roster};
use crate::trees::impurity::{information_gain, label_counts};
use std::borrow::Borrow;
use std::error::Error;
use tracing::{debug, info};

/// Most frequent label in `group`.
///
/// When labels tie on count, the one met first while scanning `group` wins,
/// so the result depends on record order and nothing else.
///
/// # Errors
///
/// Returns an error if `group` is empty.
pub fn majority_label<R: Borrow<Record>>(group: &[R]) -> Result<Label, Box<dyn Error>> {
    let mut best: Option<(Label, usize)> = None;
    for (label, count) in label_counts(group) {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
        .ok_or("Cannot take the majority label of an empty group.".into())
}

/// Information gain of every candidate feature, in candidate order.
pub fn feature_gains(
    roster: &Roster,
    features: &[Feature],
) -> Result<Vec<(Feature, f64)>, Box<dyn Error>> {
    let mut gains = Vec::with_capacity(features.len());
    for &feature in features {
        gains.push((feature, information_gain(roster.records(), feature)?));
    }
    Ok(gains)
}

/// Feature with the highest information gain; the earliest candidate wins ties.
///
/// # Errors
///
/// Returns an error if `features` is empty.
pub fn best_feature(roster: &Roster, features: &[Feature]) -> Result<Feature, Box<dyn Error>> {
    select_best(&feature_gains(roster, features)?)
}

fn select_best(gains: &[(Feature, f64)]) -> Result<Feature, Box<dyn Error>> {
    let mut best: Option<(Feature, f64)> = None;
    for &(feature, gain) in gains {
        if best.map_or(true, |(_, best_gain)| gain > best_gain) {
            best = Some((feature, gain));
        }
    }
    best.map(|(feature, _)| feature)
        .ok_or("At least one candidate feature is required.".into())
}

/// A depth one decision tree over a single categorical feature.
///
/// Each value of the chosen feature maps to the majority label of the roster
/// records sharing that value.
#[derive(Clone, Debug, Default)]
pub struct DecisionStump {
    feature: Option<Feature>,
    gains: Vec<(Feature, f64)>,
    leaves: Vec<(String, Label)>,
}

impl DecisionStump {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks the feature with maximal information gain over `roster` and builds its leaves.
    ///
    /// # Arguments
    ///
    /// * `roster` - The labelled records to learn from.
    /// * `features` - Candidate features, in tie-break order.
    ///
    /// # Errors
    ///
    /// This method will return an error if there are no candidate features.
    pub fn fit(&mut self, roster: &Roster, features: &[Feature]) -> Result<Feature, Box<dyn Error>> {
        let gains = feature_gains(roster, features)?;
        for (feature, gain) in &gains {
            debug!(%feature, gain, "computed information gain");
        }
        let feature = select_best(&gains)?;
        self.fit_feature(roster, feature)?;
        self.gains = gains;
        info!(%feature, "selected stump feature");
        Ok(feature)
    }

    /// Builds the leaves for a given feature without comparing gains.
    pub fn fit_feature(&mut self, roster: &Roster, feature: Feature) -> Result<(), Box<dyn Error>> {
        let split = split_by_feature(roster.records(), feature);
        let mut leaves = Vec::with_capacity(split.len());
        for (value, group) in split.groups() {
            leaves.push((value.to_string(), majority_label(group)?));
        }
        self.feature = Some(feature);
        self.leaves = leaves;
        self.gains.clear();
        Ok(())
    }

    /// Predicts the label of `record` from its value of the stump's feature.
    ///
    /// # Errors
    ///
    /// This method will return an error if the stump wasn't fitted yet or if the
    /// record's value never occurred in the fitted roster.
    pub fn predict(&self, record: &Record) -> Result<Label, Box<dyn Error>> {
        let feature = self.feature.ok_or("Stump wasn't fitted yet.")?;
        let value = record.value(feature);
        self.leaves
            .iter()
            .find(|(leaf_value, _)| leaf_value == value)
            .map(|&(_, label)| label)
            .ok_or(format!("No records with {} '{}' were seen during fitting.", feature, value).into())
    }

    /// Fraction of `roster` records the stump labels correctly.
    pub fn accuracy(&self, roster: &Roster) -> Result<f64, Box<dyn Error>> {
        if roster.is_empty() {
            return Err("Cannot measure accuracy on an empty roster.".into());
        }
        let mut correct = 0;
        for record in roster.records() {
            if self.predict(record)? == record.label {
                correct += 1;
            }
        }
        Ok(correct as f64 / roster.len() as f64)
    }

    pub fn feature(&self) -> Option<Feature> {
        self.feature
    }

    pub fn gains(&self) -> &[(Feature, f64)] {
        &self.gains
    }

    pub fn leaves(&self) -> &[(String, Label)] {
        &self.leaves
    }
}
