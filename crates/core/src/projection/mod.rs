//! Projection module - cadence detection, amount forecasting, and the
//! monthly aggregation that feeds charts, rankings and the calendar.

mod amount_estimator;
mod cadence_detector;
mod calendar;
mod chart_builder;
mod exclusions;
mod holding_projections;
mod income_projector;
mod projection_constants;
mod projection_model;
mod projection_service;

// Re-export the public interface
pub use amount_estimator::blended_projection_amount;
pub use cadence_detector::detect_cadence;
pub use calendar::build_dividend_calendar;
pub use chart_builder::build_chart_data;
pub use exclusions::build_excluded;
pub use holding_projections::build_holding_projections;
pub use projection_constants::*;
pub use projection_model::*;
pub use projection_service::{ProjectionService, ProjectionServiceTrait};





#[cfg(test)]
mod holding_projections_tests;
