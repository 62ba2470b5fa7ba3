//! Orders
//!
//! Status lifecycle, money rules and priority ranking for print jobs.

mod financials;
mod lifecycle;
mod priority;
mod workflow;

pub use financials::{
    MAX_ITEM_QUANTITY, balance_due, set_paid, update_financials, validate_financials,
    validate_items,
};
pub use lifecycle::{TransitionDirection, apply_transition};
pub use priority::{
    priority_score, rank_order, reprioritize, sort_by_priority, update_status_priorities,
    validate_status_priorities,
};
pub use workflow::{OrderWorkflow, next_order_number};
