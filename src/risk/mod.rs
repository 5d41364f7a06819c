// Financial risk scoring core
// Converts a snapshot into factor risks, a composite score, a tier and a summary

pub mod engine;
pub mod errors;
pub mod factors;
pub mod narrative;
pub mod rules;

// Re-export main types
pub use engine::*;
pub use errors::*;
pub use rules::*;

// Module version
pub const VERSION: &str = "1.0.0";

// Composite score bounds
pub const MAX_RISK_SCORE: u8 = 100;
pub const MIN_RISK_SCORE: u8 = 0;
