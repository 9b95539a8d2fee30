use mbti_model::{DichotomyAxis, Table};
use mbti_stats::{
    bottom_k_summary, dichotomy_aggregate, top_k_summary, Extreme, QueryError,
};

/// Hover snippet for ranked maps: bold country name plus the top (or
/// bottom) `k` summary lines, `<br>`-separated.
///
/// Example: `<b>Freedonia</b><br>1️⃣ INFP: 12.50%<br>…`
pub fn ranked_hover_text(
    table: &Table,
    country: &str,
    k: usize,
    extreme: Extreme,
) -> Result<String, QueryError> {
    let summary = match extreme {
        Extreme::Most => top_k_summary(table, country, k)?,
        Extreme::Least => bottom_k_summary(table, country, k)?,
    };
    Ok(format!("<b>{country}</b><br>{}", summary.replace('\n', "<br>")))
}

/// Hover snippet for dichotomy maps: bold country name plus one line per
/// axis, e.g. `E: 52.10% / I: 47.90%`.
pub fn dichotomy_hover_text(table: &Table, country: &str) -> Result<String, QueryError> {
    let mut lines = vec![format!("<b>{country}</b>")];
    for axis in DichotomyAxis::ALL {
        let shares = dichotomy_aggregate(table, country, axis)?;
        let (a, b) = axis.pole_letters();
        lines.push(format!(
            "{a}: {} / {b}: {}",
            format_share(shares.first),
            format_share(shares.second)
        ));
    }
    Ok(lines.join("<br>"))
}

fn format_share(share: Option<f64>) -> String {
    match share {
        Some(v) => format!("{v:.2}%"),
        None => "n/a".to_string(),
    }
}
