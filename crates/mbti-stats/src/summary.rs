use std::cmp::Ordering;
use std::fmt::Write as _;

use mbti_model::Table;

use crate::{distribution, QueryError};

/// Default rank depth for hover summaries.
pub const DEFAULT_SUMMARY_RANKS: usize = 3;

/// The top-`k` types of a country as a ranked, multi-line string.
///
/// One line per rank: a keycap-digit marker, the type code, and the share
/// to two decimals, e.g. `"1️⃣ INTJ: 50.00%"`. Lines are joined with `\n`.
/// Missing shares never appear, so the result has fewer than `k` lines
/// when fewer present values exist. Pure formatting; no I/O.
pub fn top_k_summary(table: &Table, country: &str, k: usize) -> Result<String, QueryError> {
    ranked_summary(table, country, k, false)
}

/// The bottom-`k` types of a country, smallest share first. Same format as
/// [`top_k_summary`].
pub fn bottom_k_summary(table: &Table, country: &str, k: usize) -> Result<String, QueryError> {
    ranked_summary(table, country, k, true)
}

fn ranked_summary(
    table: &Table,
    country: &str,
    k: usize,
    ascending: bool,
) -> Result<String, QueryError> {
    let mut entries: Vec<_> = distribution(table, country)?
        .into_iter()
        .filter_map(|e| e.share.map(|v| (e.mbti, v)))
        .collect();
    if ascending {
        // Re-sort smallest-first; equal values keep the enumeration-earlier
        // type first, as in the descending order.
        entries.sort_by(|a, b| match a.1.total_cmp(&b.1) {
            Ordering::Equal => a.0.index().cmp(&b.0.index()),
            other => other,
        });
    }

    let mut out = String::new();
    for (rank, (mbti, value)) in entries.into_iter().take(k).enumerate() {
        if rank > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{} {}: {:.2}%", rank_marker(rank + 1), mbti, value);
    }
    Ok(out)
}

/// Keycap rendering of a 1-based rank, e.g. `1️⃣`.
fn rank_marker(rank: usize) -> String {
    format!("{rank}\u{fe0f}\u{20e3}")
}
