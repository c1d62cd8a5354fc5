//! Service facade over the projection engine.
//!
//! The underlying builders are pure functions taking an explicit
//! `today` anchor; this facade binds the anchor to the current UTC date
//! for transport handlers and keeps their call sites uniform.

use chrono::{NaiveDate, Utc};
use log::debug;

use crate::dividends::DividendRecord;
use crate::errors::{Result, ValidationError};

use super::calendar::build_dividend_calendar;
use super::chart_builder::build_chart_data;
use super::exclusions::build_excluded;
use super::holding_projections::build_holding_projections;
use super::income_projector::project_monthly_income;
use super::projection_model::{
    CalendarDay, ExcludedHolding, HoldingProjection, MonthlyProjection, ProjectionChartMonth,
};

/// Trait for the projection service.
pub trait ProjectionServiceTrait: Send + Sync {
    /// Projects aggregate income the given number of months forward.
    fn get_monthly_projections(
        &self,
        records: &[DividendRecord],
        months_forward: u32,
    ) -> Result<Vec<MonthlyProjection>>;

    /// Builds the 24-month actual/projected chart series.
    fn get_chart_data(&self, records: &[DividendRecord]) -> Result<Vec<ProjectionChartMonth>>;

    /// Builds the ranked per-holding annualized forecast.
    fn get_holding_projections(
        &self,
        records: &[DividendRecord],
    ) -> Result<Vec<HoldingProjection>>;

    /// Lists holdings excluded from projections for lack of history.
    fn get_excluded_holdings(&self, records: &[DividendRecord]) -> Result<Vec<ExcludedHolding>>;

    /// Groups the given month's dividends by pay date.
    fn get_dividend_calendar(
        &self,
        records: &[DividendRecord],
        year: i32,
        month: u32,
    ) -> Result<Vec<CalendarDay>>;
}

/// Stateless projection service. Holds no data and no locks; safe to
/// share across request handlers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        ProjectionService
    }

    fn today(&self) -> NaiveDate {
        Utc::now().naive_utc().date()
    }
}

impl ProjectionServiceTrait for ProjectionService {
    fn get_monthly_projections(
        &self,
        records: &[DividendRecord],
        months_forward: u32,
    ) -> Result<Vec<MonthlyProjection>> {
        debug!(
            "Projecting income {} months forward over {} records",
            months_forward,
            records.len()
        );
        Ok(project_monthly_income(records, months_forward, self.today()))
    }

    fn get_chart_data(&self, records: &[DividendRecord]) -> Result<Vec<ProjectionChartMonth>> {
        debug!("Building projection chart over {} records", records.len());
        Ok(build_chart_data(records, self.today()))
    }

    fn get_holding_projections(
        &self,
        records: &[DividendRecord],
    ) -> Result<Vec<HoldingProjection>> {
        debug!("Ranking holding projections over {} records", records.len());
        Ok(build_holding_projections(records, self.today()))
    }

    fn get_excluded_holdings(&self, records: &[DividendRecord]) -> Result<Vec<ExcludedHolding>> {
        Ok(build_excluded(records))
    }

    fn get_dividend_calendar(
        &self,
        records: &[DividendRecord],
        year: i32,
        month: u32,
    ) -> Result<Vec<CalendarDay>> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidInput(format!(
                "Calendar month must be 1-12, got {}",
                month
            ))
            .into());
        }
        debug!("Building dividend calendar for {}-{:02}", year, month);
        Ok(build_dividend_calendar(records, year, month))
    }
}
