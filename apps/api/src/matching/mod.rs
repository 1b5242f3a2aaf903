// Candidate ↔ vacancy compatibility.
// Pure scoring lives in config/fields/scorer/ranking; handlers is the only HTTP-aware module.

pub mod config;
pub mod fields;
pub mod handlers;
pub mod ranking;
pub mod scorer;
pub mod skills;
