//! Pricing
//!
//! Job quotes from the business cost settings, and administration of those
//! settings.

mod calculator;
pub mod money;
mod settings;

pub use calculator::{
    MaterialLine, PriceBreakdown, QuoteJob, compute_quote, compute_quote_with_materials,
};
pub use settings::{update_cost_settings, validate_cost_settings};
