//! Payment cadence classification over irregular date sequences.

use chrono::NaiveDate;

use super::projection_constants::{
    ANNUAL_GAP_DAYS, ANNUAL_GAP_TOLERANCE_DAYS, MONTHLY_GAP_DAYS, MONTHLY_GAP_TOLERANCE_DAYS,
    QUARTERLY_GAP_DAYS, QUARTERLY_GAP_TOLERANCE_DAYS,
};
use super::projection_model::Cadence;

/// Classifies a sequence of pay dates into a payment cadence.
///
/// Consecutive gaps are measured in whole days on the ascending-sorted
/// sequence. A cadence is assigned only when every gap falls inside
/// that cadence's tolerance band; bands are checked monthly, then
/// quarterly, then annual. Mixed gaps and gaps in the unclassified
/// ranges between bands resolve to `Irregular`.
pub fn detect_cadence(pay_dates: &[NaiveDate]) -> Cadence {
    if pay_dates.len() < 2 {
        return Cadence::Unknown;
    }

    let mut sorted = pay_dates.to_vec();
    sorted.sort_unstable();
    let gaps: Vec<i64> = sorted
        .windows(2)
        .map(|pair| pair[1].signed_duration_since(pair[0]).num_days())
        .collect();

    let all_within = |expected: i64, tolerance: i64| {
        gaps.iter().all(|gap| (gap - expected).abs() <= tolerance)
    };

    if all_within(MONTHLY_GAP_DAYS, MONTHLY_GAP_TOLERANCE_DAYS) {
        Cadence::Monthly
    } else if all_within(QUARTERLY_GAP_DAYS, QUARTERLY_GAP_TOLERANCE_DAYS) {
        Cadence::Quarterly
    } else if all_within(ANNUAL_GAP_DAYS, ANNUAL_GAP_TOLERANCE_DAYS) {
        Cadence::Annual
    } else {
        Cadence::Irregular
    }
}
