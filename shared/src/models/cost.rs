//! Cost Settings Model

use serde::{Deserialize, Serialize};

/// Business cost parameters used by the quote calculator
///
/// All amounts are monthly; margins are percentages (10 = 10%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSettings {
    /// Informational, e.g. "PLA"
    #[serde(default)]
    pub filament_type: String,
    pub profit_margin: f64,

    // Fixed costs
    pub rent: f64,
    pub electricity: f64,
    pub water: f64,
    pub internet: f64,

    // Labor
    pub base_salary: f64,
    pub employees: f64,

    // Farm capacity
    /// Operational hours per month
    pub monthly_hours: f64,
    /// Active printers
    pub printers: f64,

    // Technical factors
    pub error_margin: f64,
    pub maintenance_margin: f64,

    // Material
    /// Cost of one 1 kg spool
    pub filament_cost: f64,
    /// Yield of one spool (about 330 m for 1.75 mm PLA)
    pub meters_per_kg: f64,
}

impl CostSettings {
    /// Numeric fields with their stored names, for validation messages
    pub fn numeric_fields(&self) -> [(&'static str, f64); 13] {
        [
            ("profitMargin", self.profit_margin),
            ("rent", self.rent),
            ("electricity", self.electricity),
            ("water", self.water),
            ("internet", self.internet),
            ("baseSalary", self.base_salary),
            ("employees", self.employees),
            ("monthlyHours", self.monthly_hours),
            ("printers", self.printers),
            ("errorMargin", self.error_margin),
            ("maintenanceMargin", self.maintenance_margin),
            ("filamentCost", self.filament_cost),
            ("metersPerKg", self.meters_per_kg),
        ]
    }
}

/// Catalog material referenced by quote line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    /// "unid", "m2", ...
    pub unit: String,
    pub price: f64,
}
