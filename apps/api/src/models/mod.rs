pub mod candidate;
pub mod lenient;
pub mod preferences;
pub mod vacancy;
