//! Wizard workflow — scenario, equipment selection, and deployment as
//! explicit staged values.
//!
//! RULES:
//!   - Each stage owns the edits the user may make at that step;
//!     moving forward consumes nothing and produces the next stage as
//!     a new value. No shared mutable state crosses stages.
//!   - The engine functions behind each stage stay pure; recommendation
//!     runs exactly once per scenario submission, so a superseded
//!     submission can never overwrite a newer stage.
//!   - Skipping a step is a `MissingInput` error naming the step to
//!     return to, never a silent default.

use crate::cost::total_cost;
use crate::equipment::{primary_sensor_count, select_equipment, EquipmentItem};
use crate::error::{PlanError, PlanResult, WizardStep};
use crate::placement::{generate_placements, DeploymentPlan, DEFAULT_COVERAGE_RADIUS_M};
use crate::report::PlanDocument;
use crate::scenario::ScenarioDescriptor;
use crate::types::GeoPoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Equipment-selection step: the recommendation list plus the user's
/// inclusion set and quantity edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EquipmentStage {
    scenario:        ScenarioDescriptor,
    recommendations: Vec<EquipmentItem>,
    selected:        BTreeSet<String>,
}

impl EquipmentStage {
    /// Run the selector for a submitted scenario. Recommendation runs
    /// once, here; nothing regenerates the list unless a new scenario
    /// is submitted.
    pub fn build(scenario: ScenarioDescriptor) -> Self {
        let recommendations = select_equipment(&scenario);
        log::info!(
            "workflow: scenario '{}' produced {} recommendations",
            scenario.project_name,
            recommendations.len(),
        );
        Self {
            scenario,
            recommendations,
            selected: BTreeSet::new(),
        }
    }

    /// Entry point for callers holding possibly-absent form output
    /// (state restored from an external surface).
    pub fn from_form(scenario: Option<ScenarioDescriptor>) -> PlanResult<Self> {
        let scenario = scenario.ok_or(PlanError::MissingInput {
            step: WizardStep::Scenario,
        })?;
        Ok(Self::build(scenario))
    }

    pub fn scenario(&self) -> &ScenarioDescriptor {
        &self.scenario
    }

    pub fn recommendations(&self) -> &[EquipmentItem] {
        &self.recommendations
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Toggle an item in or out of the selection. Ids not present in
    /// the recommendation list are ignored.
    pub fn toggle(&mut self, id: &str) {
        if !self.recommendations.iter().any(|item| item.id == id) {
            log::warn!("workflow: toggle ignored for unknown equipment id {id}");
            return;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn select_all(&mut self) {
        for item in &self.recommendations {
            self.selected.insert(item.id.clone());
        }
    }

    /// Apply a user quantity edit. Zero and transient empty-field
    /// states are normalized up to one unit rather than rejected.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        let Some(item) = self.recommendations.iter_mut().find(|item| item.id == id) else {
            log::warn!("workflow: quantity edit ignored for unknown equipment id {id}");
            return;
        };
        let normalized = quantity.max(1);
        if normalized != quantity {
            log::warn!("workflow: quantity {quantity} for {id} normalized to {normalized}");
        }
        item.quantity = normalized;
    }

    /// The selected items in recommendation order.
    pub fn selected_items(&self) -> Vec<EquipmentItem> {
        self.recommendations
            .iter()
            .filter(|item| self.selected.contains(&item.id))
            .cloned()
            .collect()
    }

    /// Running total for the current selection.
    pub fn selected_cost(&self) -> f64 {
        total_cost(&self.selected_items())
    }

    /// Move on to deployment: seed the sensor ring around the map
    /// center from the selected primary-sensor count. Errors when
    /// nothing is selected; recoverable by reselecting.
    pub fn proceed(&self, map_center: GeoPoint) -> PlanResult<DeploymentStage> {
        if self.selected.is_empty() {
            return Err(PlanError::EmptySelection);
        }

        let equipment = self.selected_items();
        let sensor_count = primary_sensor_count(&equipment);
        let ring = generate_placements(map_center, sensor_count, self.scenario.area_size);
        log::info!(
            "workflow: seeded {} sensor placements around ({:.4}, {:.4})",
            ring.len(),
            map_center.lat,
            map_center.lng,
        );

        Ok(DeploymentStage {
            scenario: self.scenario.clone(),
            equipment,
            plan: DeploymentPlan::seeded(ring, DEFAULT_COVERAGE_RADIUS_M),
        })
    }
}

/// Live figures for the deployment summary card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeploymentSummary {
    pub total_sensors:     u32,
    pub coverage_radius_m: f64,
    pub coverage_area_km2: u64,
    pub total_cost:        f64,
}

/// Deployment step: the finalized equipment list plus the freely
/// editable sensor layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeploymentStage {
    scenario:  ScenarioDescriptor,
    equipment: Vec<EquipmentItem>,
    pub plan:  DeploymentPlan,
}

impl DeploymentStage {
    pub fn scenario(&self) -> &ScenarioDescriptor {
        &self.scenario
    }

    pub fn equipment(&self) -> &[EquipmentItem] {
        &self.equipment
    }

    /// Current summary figures, computed through the same aggregators
    /// the exported document uses.
    pub fn summary(&self) -> DeploymentSummary {
        DeploymentSummary {
            total_sensors:     self.plan.sensor_count(),
            coverage_radius_m: self.plan.coverage_radius_m,
            coverage_area_km2: self.plan.coverage_area_km2(),
            total_cost:        total_cost(&self.equipment),
        }
    }

    /// Take the read-only snapshot for export.
    pub fn finalize(&self) -> PlanDocument {
        PlanDocument::assemble(&self.scenario, &self.equipment, &self.plan)
    }
}
