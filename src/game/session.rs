//! Question and guess state machine for one play session
use crate::data::record::{Feature, Label, Record};
use crate::trees::stump::DecisionStump;
use std::error::Error;

/// Word the player types to stop asking and make a guess.
pub const GUESS_COMMAND: &str = "guess";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Asking,
    Reveal,
}

/// Outcome of one line of player input while asking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Answer { feature: Feature, value: String },
    Guess,
    /// Unknown input, or a feature that was already asked about.
    Invalid,
}

/// Result of a finished session.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal {
    pub name: String,
    pub truth: Label,
    pub guess: Label,
    pub stump_feature: Feature,
    pub stump_prediction: Label,
}

impl Reveal {
    pub fn player_correct(&self) -> bool {
        self.guess == self.truth
    }

    pub fn stump_correct(&self) -> bool {
        self.stump_prediction == self.truth
    }
}

#[derive(Debug)]
pub struct Session<'a> {
    mystery: &'a Record,
    available: Vec<Feature>,
    phase: Phase,
}

impl<'a> Session<'a> {
    pub fn new(mystery: &'a Record, features: &[Feature]) -> Self {
        Self {
            mystery,
            available: features.to_vec(),
            phase: Phase::Asking,
        }
    }

    pub fn mystery(&self) -> &'a Record {
        self.mystery
    }

    /// Features not asked about yet, in their original order.
    pub fn available(&self) -> &[Feature] {
        &self.available
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Handles one line of player input.
    ///
    /// Input is trimmed and compared case-insensitively. Once the guess command
    /// has been given, every further line is invalid.
    pub fn ask(&mut self, input: &str) -> Turn {
        if self.phase != Phase::Asking {
            return Turn::Invalid;
        }
        let choice = input.trim().to_lowercase();
        if choice == GUESS_COMMAND {
            self.phase = Phase::Reveal;
            return Turn::Guess;
        }
        let position = choice
            .parse::<Feature>()
            .ok()
            .and_then(|feature| self.available.iter().position(|&f| f == feature));
        match position {
            Some(index) => {
                let feature = self.available.remove(index);
                Turn::Answer {
                    feature,
                    value: self.mystery.value(feature).to_string(),
                }
            }
            None => Turn::Invalid,
        }
    }

    /// Scores the player's guess and the stump's prediction against the mystery.
    ///
    /// # Errors
    ///
    /// Returns an error if the guess command was not given yet, or if the stump
    /// cannot predict the mystery record.
    pub fn reveal(&self, guess: Label, stump: &DecisionStump) -> Result<Reveal, Box<dyn Error>> {
        if self.phase != Phase::Reveal {
            return Err("The player has not asked to guess yet.".into());
        }
        let stump_feature = stump.feature().ok_or("Stump wasn't fitted yet.")?;
        Ok(Reveal {
            name: self.mystery.name.clone(),
            truth: self.mystery.label,
            guess,
            stump_feature,
            stump_prediction: stump.predict(self.mystery)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::roster::Roster;

    #[test]
    fn test_ask_reveals_and_removes_feature() {
        let roster = Roster::celebrities();
        let jordan = roster.find("Michael Jordan").unwrap();
        let mut session = Session::new(jordan, &Feature::ALL);

        assert_eq!(
            session.ask("  Profession \n"),
            Turn::Answer {
                feature: Feature::Profession,
                value: "athlete".to_string()
            }
        );
        assert_eq!(session.available(), &[Feature::Fame, Feature::Era]);
        assert_eq!(session.phase(), Phase::Asking);
    }

    #[test]
    fn test_asked_feature_is_invalid_like_unknown_input() {
        let roster = Roster::celebrities();
        let jordan = roster.find("Michael Jordan").unwrap();
        let mut session = Session::new(jordan, &Feature::ALL);

        session.ask("fame");
        assert_eq!(session.ask("fame"), Turn::Invalid);
        assert_eq!(session.ask("height"), Turn::Invalid);
        assert_eq!(session.ask(""), Turn::Invalid);
        assert_eq!(session.available(), &[Feature::Profession, Feature::Era]);
    }

    #[test]
    fn test_features_outside_params_are_invalid() {
        let roster = Roster::celebrities();
        let mut session = Session::new(&roster.records()[0], &[Feature::Era]);
        assert_eq!(session.ask("profession"), Turn::Invalid);
    }

    #[test]
    fn test_exhausted_questions_still_need_guess() {
        let roster = Roster::celebrities();
        let mut session = Session::new(&roster.records()[0], &Feature::ALL);
        for feature in Feature::ALL {
            assert!(matches!(session.ask(feature.as_str()), Turn::Answer { .. }));
        }
        assert!(session.available().is_empty());
        assert_eq!(session.phase(), Phase::Asking);
        assert_eq!(session.ask("GUESS"), Turn::Guess);
        assert_eq!(session.phase(), Phase::Reveal);
        assert_eq!(session.ask("era"), Turn::Invalid);
    }

    #[test]
    fn test_reveal_requires_guess_command() {
        let roster = Roster::celebrities();
        let mut stump = DecisionStump::new();
        stump.fit(&roster, &Feature::ALL).unwrap();

        let mut session = Session::new(&roster.records()[0], &Feature::ALL);
        assert!(session.reveal(Label::Sports, &stump).is_err());

        session.ask("guess");
        let reveal = session.reveal(Label::Sports, &stump).unwrap();
        assert_eq!(reveal.name, "Beyoncé");
        assert_eq!(reveal.truth, Label::Entertainment);
        assert!(!reveal.player_correct());
        assert_eq!(reveal.stump_feature, Feature::Profession);
        assert!(reveal.stump_correct());
    }
}
