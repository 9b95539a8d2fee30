//! `mbti-model` defines the core in-memory data structures for per-country
//! MBTI share tables.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the CSV loading layer (`mbti-io`)
//! - the aggregation queries (`mbti-stats`)
//! - chart-spec construction and IPC boundaries via `serde` (JSON-safe schema)

mod axis;
mod color;
mod mbti;
mod record;
mod table;

pub use axis::DichotomyAxis;
pub use color::Color;
pub use mbti::{MbtiType, ParseMbtiTypeError};
pub use record::CountryRecord;
pub use table::Table;
