//! Shared fixtures for integration tests

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use printfarm_core::{CurrentUser, RoleRegistry};
use shared::models::{
    AppConfig, CostSettings, LegacyRole, Material, OrderStatus, Permissions, User,
};

pub fn user(id: &str, role: LegacyRole, role_id: Option<&str>) -> User {
    User {
        id: id.to_string(),
        username: id.to_string(),
        role,
        role_id: role_id.map(str::to_string),
        name: format!("User {id}"),
        permissions: Permissions::none(),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        image: None,
        phone: None,
    }
}

pub fn resolved(role: LegacyRole) -> CurrentUser {
    CurrentUser::resolve(
        &user(&format!("{role:?}").to_lowercase(), role, None),
        &RoleRegistry::with_defaults(),
    )
}

/// Reference shop: 1350/month fixed, 400 machine hours
pub fn reference_costs() -> CostSettings {
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

pub fn reference_config() -> AppConfig {
    AppConfig {
        job_types: vec!["Llavero".to_string(), "Figura".to_string()],
        materials: vec![Material {
            id: "argolla".to_string(),
            name: "Argolla metálica".to_string(),
            unit: "unid".to_string(),
            price: 0.25,
        }],
        costs: reference_costs(),
        logo_url: String::new(),
        background_url: String::new(),
        status_priorities: vec![
            OrderStatus::EnProduccion,
            OrderStatus::Disenado,
            OrderStatus::FaltaDisenar,
            OrderStatus::PendienteEntrega,
            OrderStatus::Presupuesto,
            OrderStatus::Entregado,
        ],
        business_info: None,
    }
}
