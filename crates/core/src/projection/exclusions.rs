//! Reporting of holdings left out of projections.

use crate::dividends::{group_by_holding, DividendRecord};

use super::projection_model::ExcludedHolding;

/// Lists holdings with too little paid history to project, with a
/// user-facing reason. Ordered by holding key.
pub fn build_excluded(records: &[DividendRecord]) -> Vec<ExcludedHolding> {
    let mut excluded = Vec::new();
    for holding_records in group_by_holding(records).values() {
        let paid_count = holding_records
            .iter()
            .filter(|record| record.is_paid())
            .count();
        if paid_count >= 2 {
            continue;
        }
        let Some(first) = holding_records.first() else {
            continue;
        };
        let reason = if paid_count == 0 {
            "No paid dividends logged".to_string()
        } else {
            format!("Insufficient history ({} dividend logged)", paid_count)
        };
        excluded.push(ExcludedHolding {
            ticker: first.ticker.clone(),
            account_name: first.account_name.clone(),
            reason,
        });
    }
    excluded
}
