/// Entropy and information gain
pub mod impurity;
/// Single-feature decision stump
pub mod stump;
