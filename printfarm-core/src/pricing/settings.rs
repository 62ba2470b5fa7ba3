//! Cost settings administration

use shared::error::AppResult;
use shared::models::{Capability, CostSettings};

use crate::auth::{CurrentUser, require_permission};
use crate::utils::validation::require_non_negative;

/// Every numeric field must be finite, non-negative and within range
///
/// Zero capacity is accepted here; the calculator reports it when quoting.
pub fn validate_cost_settings(settings: &CostSettings) -> AppResult<()> {
    for (field, value) in settings.numeric_fields() {
        require_non_negative(value, field)?;
    }
    Ok(())
}

/// Replace the cost settings
///
/// Returns the validated settings for the caller to persist.
pub fn update_cost_settings(actor: &CurrentUser, new: CostSettings) -> AppResult<CostSettings> {
    require_permission(actor, Capability::EditCostParams)?;
    validate_cost_settings(&new)?;

    tracing::info!(
        user_id = %actor.id,
        username = %actor.username,
        monthly_hours = new.monthly_hours,
        printers = new.printers,
        "Cost settings updated"
    );
    Ok(new)
}
