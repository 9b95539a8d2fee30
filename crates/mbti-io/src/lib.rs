//! `mbti-io` turns CSV files into [`mbti_model::Table`]s.
//!
//! The loader is tolerant by design: non-numeric cells become missing
//! values (never zero, never an error), duplicate country rows fold by
//! summation, and raw column headers map onto canonical MBTI types through
//! an explicit, caller-supplied merge rule instead of string-slicing
//! heuristics.

mod import;
mod merge;

pub use import::{load_table, load_table_from_path, LoadError, LoadOptions, TextEncoding};
pub use merge::ColumnMergeRule;
