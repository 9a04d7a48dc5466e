//! # Celebrity Detective
//!
//! `celebrity-detective` is a small text game: a mystery celebrity is drawn from a roster and the
//! player asks about their profession, fame and era before guessing whether they belong to
//! entertainment (0) or sports (1). A decision stump, built on the feature with the highest
//! information gain over the roster, makes its own guess for comparison.
//!
//! ## Example Usage
//!
//! ```rust
//! use celebrity_detective::data::record::Feature;
//! use celebrity_detective::data::roster::Roster;
//! use celebrity_detective::trees::stump::DecisionStump;
//!
//! let roster = Roster::celebrities();
//!
//! let mut stump = DecisionStump::new();
//! let feature = stump.fit(&roster, &Feature::ALL).unwrap();
//! assert_eq!(feature, Feature::Profession);
//!
//! let jordan = roster.find("Michael Jordan").unwrap();
//! let prediction = stump.predict(jordan).unwrap();
//! assert_eq!(prediction, jordan.label);
//! ```

/// Records, features and the celebrity roster
pub mod data;
/// Interactive game session
pub mod game;
/// Tracing subscriber setup
pub mod logging;
/// Entropy, information gain and the decision stump
pub mod trees;
