//! Emotional texture analysis
//!
//! Pipeline: registry patterns → per-dimension scores → intensity modifier →
//! dominant dimension → signature. Batches aggregate per-message analyses;
//! profiles accumulate analyses per agent over time.

pub mod aggregate;
pub mod profile;
pub mod registry;
pub mod scorer;

pub use aggregate::{BatchResult, Message, aggregate_messages};
pub use profile::ProfileTracker;
pub use registry::Registry;
pub use scorer::{Analysis, Scorer};
