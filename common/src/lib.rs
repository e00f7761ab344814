pub mod config;
pub mod games;
pub mod high_score;
pub mod identifiers;
pub mod logger;

pub use identifiers::*;
