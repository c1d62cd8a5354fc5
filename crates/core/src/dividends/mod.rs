//! Dividends module - domain models for logged dividend payments.

mod dividends_model;

// Re-export the public interface
pub use dividends_model::{group_by_holding, DividendRecord, DividendStatus};
