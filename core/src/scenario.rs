//! ScenarioDescriptor — the validated output of the scenario form.
//!
//! Created once per planning run and read-only from then on. The engine
//! never mutates it; every stage receives it by reference.

use crate::error::{PlanError, PlanResult};
use crate::types::{AreaSize, CoverageObjective, Environment, MissionType, TerrainComplexity};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScenarioDescriptor {
    pub project_name:         String,
    #[serde(default)]
    pub mission_type:         Option<MissionType>,
    pub environment:          Environment,
    pub coverage_objective:   CoverageObjective,
    pub area_size:            AreaSize,
    #[serde(default)]
    pub terrain_complexity:   TerrainComplexity,
    #[serde(default)]
    pub special_requirements: Option<String>,
}

impl ScenarioDescriptor {
    /// Submit-time required-field check, mirroring the scenario form.
    /// The engine itself tolerates an unset mission type (it falls
    /// through to the general-purpose sensor); this guard exists for
    /// callers feeding the pipeline from external input.
    pub fn validate(&self) -> PlanResult<()> {
        if self.project_name.trim().is_empty() {
            return Err(PlanError::InvalidScenario { field: "project_name" });
        }
        if self.mission_type.is_none() {
            return Err(PlanError::InvalidScenario { field: "mission_type" });
        }
        Ok(())
    }
}
