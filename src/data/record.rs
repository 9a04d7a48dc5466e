use serde::Deserialize;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Binary category of a celebrity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub enum Label {
    Entertainment,
    Sports,
}

impl Label {
    pub fn code(&self) -> u8 {
        match self {
            Label::Entertainment => 0,
            Label::Sports => 1,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Label::Entertainment => "entertainment",
            Label::Sports => "sports",
        }
    }

    /// Parses a player's guess line.
    ///
    /// Only the integers `0` and `1` are accepted, surrounding whitespace ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not an integer or is outside `{0, 1}`.
    pub fn parse_guess(line: &str) -> Result<Self, Box<dyn Error>> {
        let trimmed = line.trim();
        let code = trimmed
            .parse::<i64>()
            .map_err(|_| format!("'{}' is not a number", trimmed))?;
        match code {
            0 => Ok(Label::Entertainment),
            1 => Ok(Label::Sports),
            _ => Err(format!("{} is neither 0 nor 1", code).into()),
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Label::Entertainment),
            1 => Ok(Label::Sports),
            _ => Err(format!("Label must be 0 or 1, got {}.", code)),
        }
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.category())
    }
}

/// Categorical attribute a record can be split on or asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    Profession,
    Fame,
    Era,
}

impl Feature {
    /// Every feature, in tie-break order.
    pub const ALL: [Feature; 3] = [Feature::Profession, Feature::Fame, Feature::Era];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Profession => "profession",
            Feature::Fame => "fame",
            Feature::Era => "era",
        }
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Feature::ALL
            .into_iter()
            .find(|feature| feature.as_str() == normalized)
            .ok_or(format!("Unknown feature '{}'.", s.trim()))
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labelled celebrity.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub name: String,
    pub profession: String,
    pub fame: String,
    pub era: String,
    pub label: Label,
}

impl Record {
    pub fn new(name: &str, profession: &str, fame: &str, era: &str, label: Label) -> Self {
        Self {
            name: name.to_string(),
            profession: profession.to_string(),
            fame: fame.to_string(),
            era: era.to_string(),
            label,
        }
    }

    pub fn value(&self, feature: Feature) -> &str {
        match feature {
            Feature::Profession => &self.profession,
            Feature::Fame => &self.fame,
            Feature::Era => &self.era,
        }
    }
}
