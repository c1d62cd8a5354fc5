//! Calendar grouping of dividends by pay date.

use chrono::Datelike;
use std::collections::BTreeMap;

use crate::dividends::DividendRecord;

use super::projection_model::CalendarDay;

/// Groups the given month's dividends by exact pay date, ascending.
///
/// Records outside the requested year/month are ignored; an impossible
/// month simply matches nothing. All statuses are included, so the
/// calendar shows scheduled and projected payments alongside paid ones.
pub fn build_dividend_calendar(
    records: &[DividendRecord],
    year: i32,
    month: u32,
) -> Vec<CalendarDay> {
    let mut by_date: BTreeMap<chrono::NaiveDate, Vec<DividendRecord>> = BTreeMap::new();
    for record in records {
        if record.pay_date.year() == year && record.pay_date.month() == month {
            by_date
                .entry(record.pay_date)
                .or_default()
                .push(record.clone());
        }
    }
    by_date
        .into_iter()
        .map(|(date, dividends)| CalendarDay { date, dividends })
        .collect()
}
