//! ATS (Applicant Tracking System) set matching and coverage scoring

use crate::processing::TermSet;
use serde::{Deserialize, Serialize};

/// Terms of the target set split by whether the source covers them.
/// `matched` and `missing` partition the target exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: TermSet,
    pub missing: TermSet,
}

impl MatchResult {
    pub fn target_len(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// `matched = source ∩ target`, `missing = target − source`. Exact string
/// equality only.
pub fn match_sets(source: &TermSet, target: &TermSet) -> MatchResult {
    let matched = source.intersection(target).cloned().collect();
    let missing = target.difference(source).cloned().collect();

    MatchResult { matched, missing }
}

/// Coverage percentage `|matched| / |jd_terms| * 100`, rounded to `precision`
/// decimals. Exactly 0 when `jd_terms` is empty.
pub fn ratio_score(matched: &TermSet, jd_terms: &TermSet, precision: u32) -> f64 {
    if jd_terms.is_empty() {
        return 0.0;
    }

    let ratio = matched.len() as f64 / jd_terms.len() as f64 * 100.0;
    round_to(ratio, precision)
}

pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(10) as i32);
    (value * factor).round() / factor
}
