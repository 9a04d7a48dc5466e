/// Game parameters
pub mod params;
/// Console runner
pub mod runner;
/// Question and guess state machine
pub mod session;
