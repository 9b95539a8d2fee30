//! `mbti-stats` implements the aggregation queries over an immutable
//! [`mbti_model::Table`].
//!
//! Every function here is a pure computation: it takes `&Table`, allocates
//! its own output, and never mutates shared state, so concurrent callers
//! may share one loaded table. Determinism is part of the contract — equal
//! values always break ties the same way (enumeration order for types,
//! name order for countries).

mod axes;
mod distribution;
mod error;
mod extremes;
mod rank;
mod summary;

pub use axes::{dichotomy_aggregate, AxisShares};
pub use distribution::{distribution, global_averages, TypeMean, TypeShare};
pub use error::QueryError;
pub use extremes::{
    dominant_type, dominant_type_counts, least_dominant_type, Extreme, TieBreak, TypeCounts,
};
pub use rank::{top_n_for_type, RankingEntry};
pub use summary::{bottom_k_summary, top_k_summary, DEFAULT_SUMMARY_RANKS};
