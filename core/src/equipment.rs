//! Equipment selection — the primary-sensor and accessory decision
//! tables.
//!
//! RULES:
//!   - First matching row of the primary table wins; exactly one
//!     `node-` item per recommendation batch.
//!   - Accessory rows are checked in a fixed order; all that match are
//!     appended after the primary.
//!   - Selection is pure and deterministic: the same scenario always
//!     yields the same ids, order, and quantities.

use crate::catalog::{self, CatalogEntry};
use crate::quantity::estimate_quantity;
use crate::scenario::ScenarioDescriptor;
use crate::types::{Environment, MissionType};
use serde::{Deserialize, Serialize};

/// One line of a recommendation: a catalog entry plus a user-editable
/// quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EquipmentItem {
    pub id:          String,
    pub name:        String,
    pub description: String,
    pub specs:       Vec<String>,
    pub quantity:    u32,
    pub unit_price:  f64,
}

impl EquipmentItem {
    /// Primary RF sensors carry the `node-` catalog prefix; everything
    /// else is an accessory.
    pub fn is_primary_sensor(&self) -> bool {
        self.id.starts_with(catalog::PRIMARY_PREFIX)
    }

    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Primary sensor decision table, first match wins. Anything the table
/// does not name (signal intelligence, unknown values, unset mission)
/// falls through to the general-purpose node.
fn primary_sensor(mission: Option<MissionType>) -> &'static CatalogEntry {
    match mission {
        Some(MissionType::SpectrumMonitoring) => &catalog::NODE_100_8,
        Some(MissionType::DroneDetection)     => &catalog::NODE_100_18,
        Some(MissionType::BorderSecurity | MissionType::InfrastructureProtection) => {
            &catalog::NODE_100_6_DF
        }
        _ => &catalog::NODE_100_6,
    }
}

/// Build the recommended equipment list for a scenario:
/// `[primary, matched accessories…]`.
pub fn select_equipment(scenario: &ScenarioDescriptor) -> Vec<EquipmentItem> {
    let primary_qty = estimate_quantity(scenario.area_size, scenario.environment);
    let primary = primary_sensor(scenario.mission_type);

    let mut items = vec![primary.with_quantity(primary_qty)];

    // Off-grid sites get solar power.
    if matches!(
        scenario.environment,
        Environment::Rural | Environment::Desert | Environment::Mountain
    ) {
        items.push(catalog::SOLAR_KIT.with_quantity(primary_qty));
    }

    // Built-up and coastal sites get backhaul, one kit per sensor pair.
    if matches!(scenario.environment, Environment::Urban | Environment::Coastal) {
        items.push(catalog::WIFI_BACKHAUL.with_quantity(primary_qty.div_ceil(2)));
    }

    // Every deployment ships in protective cases.
    items.push(catalog::STORMCASE.with_quantity(primary_qty));

    log::info!(
        "equipment: recommended {} items for '{}' ({} x {})",
        items.len(),
        scenario.project_name,
        primary_qty,
        primary.id,
    );

    items
}

/// Number of primary sensors across an equipment list. Accessories do
/// not count toward placement.
pub fn primary_sensor_count(items: &[EquipmentItem]) -> u32 {
    items
        .iter()
        .filter(|item| item.is_primary_sensor())
        .map(|item| item.quantity)
        .sum()
}
