//! Quote Calculator
//!
//! Machine-hour plus material costing for print jobs.
//! Uses rust_decimal for precise calculations, reports as f64.
//!
//! ```text
//! hourly      = (rent + electricity + water + internet + baseSalary * employees)
//!               / (monthlyHours * printers)
//! adjusted    = hourly * (1 + errorMargin%) * (1 + maintenanceMargin%)
//! material    = weightOrLength / metersPerKg * filamentCost * quantity
//! production  = adjusted * printTimeHours + material + extras
//! suggested   = production * (1 + profitMargin%)
//! ```

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CostSettings, Material};

use super::money::{MONEY_DP, RATE_DP, overflow, percent_factor, to_decimal, to_f64};
use super::settings::validate_cost_settings;
use crate::utils::validation::require_non_negative;

/// Divisor used when `metersPerKg` is 0 (grams per kilogram)
const FALLBACK_YIELD: i64 = 1000;

/// Job to quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteJob {
    pub print_time_hours: f64,
    /// Same unit as `CostSettings::meters_per_kg` (or grams without a yield)
    pub material_weight_or_length: f64,
    pub quantity: f64,
}

/// Catalog material added to a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLine {
    pub material_id: String,
    pub quantity: f64,
}

/// Quote result
///
/// Every field is rounded on its own from full-precision intermediates, so
/// `suggested_price` is not necessarily `production_cost * (1 + margin)` of
/// the rounded figures. For the reference shop: production 9.79625 shows as
/// 9.80, and 9.79625 * 1.5 = 14.694375 shows as 14.69 (not 9.80 * 1.5).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// 4 dp
    pub hourly_machine_cost: f64,
    /// 4 dp
    pub adjusted_hourly_cost: f64,
    pub material_cost: f64,
    /// Catalog materials, 0 for a plain quote
    pub extras_cost: f64,
    pub production_cost: f64,
    pub suggested_price: f64,
}

/// Decimal view of the settings, validated once
struct Rates {
    adjusted_hourly: Decimal,
    hourly: Decimal,
    filament_cost: Decimal,
    yield_per_spool: Decimal,
    profit_factor: Decimal,
}

impl Rates {
    fn from_settings(settings: &CostSettings) -> AppResult<Self> {
        validate_cost_settings(settings)?;

        let d = to_decimal;

        let capacity = d(settings.monthly_hours, "monthlyHours")?
            .checked_mul(d(settings.printers, "printers")?)
            .ok_or_else(|| overflow("capacityHours"))?;
        if capacity.is_zero() {
            return Err(AppError::with_message(
                ErrorCode::ZeroCapacity,
                format!(
                    "Farm capacity is zero (monthlyHours={}, printers={})",
                    settings.monthly_hours, settings.printers
                ),
            ));
        }

        let salaries = d(settings.base_salary, "baseSalary")?
            .checked_mul(d(settings.employees, "employees")?)
            .ok_or_else(|| overflow("salaries"))?;
        let monthly_fixed = [
            d(settings.rent, "rent")?,
            d(settings.electricity, "electricity")?,
            d(settings.water, "water")?,
            d(settings.internet, "internet")?,
            salaries,
        ]
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
        .ok_or_else(|| overflow("monthlyFixedCost"))?;

        let hourly = monthly_fixed
            .checked_div(capacity)
            .ok_or_else(|| overflow("hourlyMachineCost"))?;
        let error_factor = percent_factor(d(settings.error_margin, "errorMargin")?)?;
        let maintenance_factor =
            percent_factor(d(settings.maintenance_margin, "maintenanceMargin")?)?;
        let adjusted_hourly = hourly
            .checked_mul(error_factor)
            .and_then(|v| v.checked_mul(maintenance_factor))
            .ok_or_else(|| overflow("adjustedHourlyCost"))?;

        let meters_per_kg = d(settings.meters_per_kg, "metersPerKg")?;
        let yield_per_spool = if meters_per_kg.is_zero() {
            Decimal::from(FALLBACK_YIELD)
        } else {
            meters_per_kg
        };

        Ok(Self {
            adjusted_hourly,
            hourly,
            filament_cost: d(settings.filament_cost, "filamentCost")?,
            yield_per_spool,
            profit_factor: percent_factor(d(settings.profit_margin, "profitMargin")?)?,
        })
    }
}

fn validate_job(job: &QuoteJob) -> AppResult<()> {
    require_non_negative(job.print_time_hours, "printTimeHours")?;
    require_non_negative(job.material_weight_or_length, "materialWeightOrLength")?;
    require_non_negative(job.quantity, "quantity")?;
    Ok(())
}

fn extras_total(catalog: &[Material], lines: &[MaterialLine]) -> AppResult<Decimal> {
    let mut total = Decimal::ZERO;
    for line in lines {
        let material = catalog
            .iter()
            .find(|m| m.id == line.material_id)
            .ok_or_else(|| AppError::not_found(format!("Material {}", line.material_id)))?;
        require_non_negative(line.quantity, "quantity")?;
        require_non_negative(material.price, "price")?;

        let cost = to_decimal(material.price, "price")?
            .checked_mul(to_decimal(line.quantity, "quantity")?)
            .ok_or_else(|| overflow("extrasCost"))?;
        total = total
            .checked_add(cost)
            .ok_or_else(|| overflow("extrasCost"))?;
    }
    Ok(total)
}

fn quote(rates: &Rates, job: &QuoteJob, extras: Decimal) -> AppResult<PriceBreakdown> {
    validate_job(job)?;

    let amount = to_decimal(job.material_weight_or_length, "materialWeightOrLength")?;
    let quantity = to_decimal(job.quantity, "quantity")?;
    let hours = to_decimal(job.print_time_hours, "printTimeHours")?;

    let material = amount
        .checked_div(rates.yield_per_spool)
        .and_then(|v| v.checked_mul(rates.filament_cost))
        .and_then(|v| v.checked_mul(quantity))
        .ok_or_else(|| overflow("materialCost"))?;

    let production = rates
        .adjusted_hourly
        .checked_mul(hours)
        .and_then(|v| v.checked_add(material))
        .and_then(|v| v.checked_add(extras))
        .ok_or_else(|| overflow("productionCost"))?;

    let suggested = production
        .checked_mul(rates.profit_factor)
        .ok_or_else(|| overflow("suggestedPrice"))?;

    Ok(PriceBreakdown {
        hourly_machine_cost: to_f64(rates.hourly, RATE_DP)?,
        adjusted_hourly_cost: to_f64(rates.adjusted_hourly, RATE_DP)?,
        material_cost: to_f64(material, MONEY_DP)?,
        extras_cost: to_f64(extras, MONEY_DP)?,
        production_cost: to_f64(production, MONEY_DP)?,
        suggested_price: to_f64(suggested, MONEY_DP)?,
    })
}

/// Quote a print job
///
/// # Errors
///
/// - zero `monthlyHours * printers` → `ZeroCapacity`
/// - negative, non-finite or out-of-range input → validation error
pub fn compute_quote(settings: &CostSettings, job: &QuoteJob) -> AppResult<PriceBreakdown> {
    let rates = Rates::from_settings(settings)?;
    quote(&rates, job, Decimal::ZERO)
}

/// Quote a print job plus catalog materials
///
/// Extras join the production cost before the profit margin.
pub fn compute_quote_with_materials(
    settings: &CostSettings,
    catalog: &[Material],
    job: &QuoteJob,
    lines: &[MaterialLine],
) -> AppResult<PriceBreakdown> {
    let rates = Rates::from_settings(settings)?;
    let extras = extras_total(catalog, lines)?;
    let breakdown = quote(&rates, job, extras)?;

    tracing::debug!(
        lines = lines.len(),
        extras = breakdown.extras_cost,
        suggested = breakdown.suggested_price,
        "Quote with catalog materials"
    );
    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorKind;

    fn settings() -> CostSettings {
        CostSettings {
            filament_type: "PLA".to_string(),
            profit_margin: 50.0,
            rent: 1000.0,
            electricity: 200.0,
            water: 50.0,
            internet: 100.0,
            base_salary: 0.0,
            employees: 0.0,
            monthly_hours: 200.0,
            printers: 2.0,
            error_margin: 10.0,
            maintenance_margin: 5.0,
            filament_cost: 20.0,
            meters_per_kg: 330.0,
        }
    }

    fn job() -> QuoteJob {
        QuoteJob {
            print_time_hours: 2.0,
            material_weight_or_length: 33.0,
            quantity: 1.0,
        }
    }

    #[test]
    fn test_reference_quote() {
        let b = compute_quote(&settings(), &job()).unwrap();
        assert_eq!(b.hourly_machine_cost, 3.375);
        assert_eq!(b.adjusted_hourly_cost, 3.8981);
        assert_eq!(b.material_cost, 2.0);
        assert_eq!(b.extras_cost, 0.0);
        assert_eq!(b.production_cost, 9.80);
        assert_eq!(b.suggested_price, 14.69);
    }

    #[test]
    fn test_fields_round_independently() {
        let b = compute_quote(&settings(), &job()).unwrap();
        // Margin applies to the unrounded production cost
        assert_ne!(b.suggested_price, b.production_cost * 1.5);
        assert_eq!(b.suggested_price, 14.69);
    }

    #[test]
    fn test_zero_capacity() {
        let mut s = settings();
        s.printers = 0.0;
        let err = compute_quote(&s, &job()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ZeroCapacity);
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);

        let mut s = settings();
        s.monthly_hours = 0.0;
        assert_eq!(
            compute_quote(&s, &job()).unwrap_err().kind(),
            ErrorKind::InvalidConfiguration
        );
    }

    #[test]
    fn test_meters_per_kg_fallback() {
        let mut s = settings();
        s.meters_per_kg = 0.0;
        let b = compute_quote(
            &s,
            &QuoteJob {
                material_weight_or_length: 250.0,
                ..job()
            },
        )
        .unwrap();
        // 250 g of a 20/kg spool
        assert_eq!(b.material_cost, 5.0);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let mut s = settings();
        s.rent = -1.0;
        let err = compute_quote(&s, &job()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NegativeValue);

        let err = compute_quote(
            &settings(),
            &QuoteJob {
                quantity: -2.0,
                ..job()
            },
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = compute_quote(
            &settings(),
            &QuoteJob {
                print_time_hours: f64::NAN,
                ..job()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NonFiniteValue);
    }

    #[test]
    fn test_extras_join_before_margin() {
        let catalog = vec![Material {
            id: "iman".to_string(),
            name: "Imán".to_string(),
            unit: "unid".to_string(),
            price: 0.5,
        }];
        let lines = vec![MaterialLine {
            material_id: "iman".to_string(),
            quantity: 4.0,
        }];
        let b = compute_quote_with_materials(&settings(), &catalog, &job(), &lines).unwrap();
        assert_eq!(b.extras_cost, 2.0);
        // (9.79625 + 2) * 1.5
        assert_eq!(b.production_cost, 11.80);
        assert_eq!(b.suggested_price, 17.69);
    }

    #[test]
    fn test_unknown_material() {
        let lines = vec![MaterialLine {
            material_id: "nope".to_string(),
            quantity: 1.0,
        }];
        let err = compute_quote_with_materials(&settings(), &[], &job(), &lines).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
