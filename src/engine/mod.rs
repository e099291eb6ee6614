//! High-level operations: distance reports and expiration queries.

pub mod decay;
pub mod query;

pub use decay::{
    count_expired, parse_expiration_queries, run_expiration_queries, ExpirationOutcome,
    ExpirationQuery,
};
pub use query::{distance_report, DistanceReport};
