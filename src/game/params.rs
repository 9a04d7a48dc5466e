use crate::data::record::Feature;
use std::collections::HashSet;
use std::error::Error;

#[derive(Clone, Debug)]
pub struct GameParams {
    pub seed: Option<u64>,
    pub features: Vec<Feature>,
    pub reprompt_invalid_guess: bool,
}

impl Default for GameParams {
    fn default() -> Self {
        Self::new()
    }
}

impl GameParams {
    pub fn new() -> Self {
        Self {
            seed: None,
            features: Feature::ALL.to_vec(),
            reprompt_invalid_guess: true,
        }
    }

    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Sets the features both the stump and the player may use, in tie-break order.
    ///
    /// # Errors
    ///
    /// Returns an error if `features` is empty or names a feature twice.
    pub fn set_features(&mut self, features: Vec<Feature>) -> Result<(), Box<dyn Error>> {
        if features.is_empty() {
            return Err("At least one feature must be available.".into());
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = features.iter().find(|&&feature| !seen.insert(feature)) {
            return Err(format!("The feature '{}' is listed twice.", duplicate).into());
        }
        self.features = features;
        Ok(())
    }

    pub fn set_reprompt_invalid_guess(&mut self, reprompt: bool) {
        self.reprompt_invalid_guess = reprompt;
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn reprompt_invalid_guess(&self) -> bool {
        self.reprompt_invalid_guess
    }
}
