//! Plan document assembly — the read-only export of a finalized plan.
//!
//! The document recomputes its totals through the same shared
//! aggregators the live summary uses, so the two surfaces always show
//! identical figures.

use crate::cost::total_cost;
use crate::equipment::EquipmentItem;
use crate::error::PlanResult;
use crate::placement::{DeploymentPlan, SensorLocation};
use crate::scenario::ScenarioDescriptor;
use serde::{Deserialize, Serialize};

/// One equipment table row in the exported document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EquipmentLine {
    pub id:         String,
    pub name:       String,
    pub quantity:   u32,
    pub unit_price: f64,
    pub line_total: f64,
}

impl From<&EquipmentItem> for EquipmentLine {
    fn from(item: &EquipmentItem) -> Self {
        Self {
            id:         item.id.clone(),
            name:       item.name.clone(),
            quantity:   item.quantity,
            unit_price: item.unit_price,
            line_total: item.line_total(),
        }
    }
}

/// The finalized deployment requirements document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlanDocument {
    pub project_name:      String,
    pub generated_on:      String,
    pub scenario:          ScenarioDescriptor,
    pub equipment:         Vec<EquipmentLine>,
    pub total_cost:        f64,
    pub sensor_count:      u32,
    pub sensor_locations:  Vec<SensorLocation>,
    pub coverage_radius_m: f64,
    pub coverage_area_km2: u64,
    pub deployment_notes:  String,
}

impl PlanDocument {
    /// Snapshot the finalized scenario, equipment, and plan into an
    /// exportable document.
    pub fn assemble(
        scenario: &ScenarioDescriptor,
        equipment: &[EquipmentItem],
        plan: &DeploymentPlan,
    ) -> Self {
        Self {
            project_name:      scenario.project_name.clone(),
            generated_on:      chrono::Local::now().format("%B %d, %Y").to_string(),
            scenario:          scenario.clone(),
            equipment:         equipment.iter().map(EquipmentLine::from).collect(),
            total_cost:        total_cost(equipment),
            sensor_count:      plan.sensor_count(),
            sensor_locations:  plan.sensor_locations.clone(),
            coverage_radius_m: plan.coverage_radius_m,
            coverage_area_km2: plan.coverage_area_km2(),
            deployment_notes:  plan.deployment_notes.clone(),
        }
    }

    pub fn to_json(&self) -> PlanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
