/// Records, labels and features
pub mod record;
/// Roster of celebrities and feature splits
pub mod roster;
