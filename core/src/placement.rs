//! Deployment geometry — the initial ring placement and the
//! user-edited sensor set.
//!
//! The generator seeds a `DeploymentPlan`; after that the plan only
//! changes through the add/move/remove operations driven by the map
//! surface, until a read-only snapshot is taken for export.

use crate::coverage::estimate_coverage_area_km2;
use crate::types::{AreaSize, GeoPoint};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Policy default for the per-sensor coverage radius slider.
pub const DEFAULT_COVERAGE_RADIUS_M: f64 = 2000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SensorLocation {
    pub id:       String,
    pub position: GeoPoint,
    pub name:     String,
    pub notes:    String,
}

/// Ring radius in degrees by area-size tier. Unrecognized tiers use
/// the medium-area default.
fn ring_radius_deg(area: AreaSize) -> f64 {
    match area {
        AreaSize::Small     => 0.01,
        AreaSize::Medium    => 0.02,
        AreaSize::Large     => 0.04,
        AreaSize::VeryLarge => 0.08,
        AreaSize::Other     => 0.02,
    }
}

/// Place `sensor_count` sensors evenly on a circle around `center`.
///
/// Sensor `i` sits at angle `i * 2π/n`, offset by the area-derived ring
/// radius: latitude takes the sine component, longitude the cosine.
/// A count of zero returns an empty vec; the angle step is undefined
/// there and an empty deployment is a legitimate transient state before
/// equipment is chosen.
pub fn generate_placements(
    center: GeoPoint,
    sensor_count: u32,
    area: AreaSize,
) -> Vec<SensorLocation> {
    if sensor_count == 0 {
        return Vec::new();
    }

    let radius = ring_radius_deg(area);
    let step = TAU / f64::from(sensor_count);

    (0..sensor_count)
        .map(|i| {
            let angle = f64::from(i) * step;
            SensorLocation {
                id:   format!("sensor-{}", i + 1),
                position: GeoPoint {
                    lat: center.lat + radius * angle.sin(),
                    lng: center.lng + radius * angle.cos(),
                },
                name: format!("RFeye Sensor {}", i + 1),
                notes: String::new(),
            }
        })
        .collect()
}

/// The working sensor layout: the placed sensors, the assumed
/// per-sensor coverage radius, and free-text notes.
///
/// Ids are handed out from a monotonically increasing counter, never
/// re-derived from the current length, so a remove-then-add cycle can
/// never produce a duplicate id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DeploymentPlan {
    pub sensor_locations:  Vec<SensorLocation>,
    pub coverage_radius_m: f64,
    pub deployment_notes:  String,
    next_sensor_seq:       u32,
}

impl DeploymentPlan {
    /// An empty plan with the given coverage radius.
    pub fn new(coverage_radius_m: f64) -> Self {
        Self {
            sensor_locations:  Vec::new(),
            coverage_radius_m,
            deployment_notes:  String::new(),
            next_sensor_seq:   1,
        }
    }

    /// A plan seeded from generated placements. The id counter starts
    /// past the highest generated index.
    pub fn seeded(locations: Vec<SensorLocation>, coverage_radius_m: f64) -> Self {
        let next_sensor_seq = locations.len() as u32 + 1;
        Self {
            sensor_locations: locations,
            coverage_radius_m,
            deployment_notes: String::new(),
            next_sensor_seq,
        }
    }

    pub fn sensor_count(&self) -> u32 {
        self.sensor_locations.len() as u32
    }

    /// Place one sensor at an explicit coordinate with an optional note.
    /// Returns the new sensor's id.
    pub fn add_sensor(&mut self, position: GeoPoint, note: &str) -> String {
        let seq = self.next_sensor_seq;
        self.next_sensor_seq += 1;

        let sensor = SensorLocation {
            id:       format!("sensor-{seq}"),
            position,
            name:     format!("RFeye Sensor {seq}"),
            notes:    note.to_string(),
        };
        let id = sensor.id.clone();
        self.sensor_locations.push(sensor);

        log::debug!("placement: added {id} at ({:.4}, {:.4})", position.lat, position.lng);
        id
    }

    /// Move a sensor to a new coordinate. Unknown ids are a no-op;
    /// drag events can race a removal.
    pub fn move_sensor(&mut self, id: &str, position: GeoPoint) -> bool {
        match self.sensor_locations.iter_mut().find(|s| s.id == id) {
            Some(sensor) => {
                sensor.position = position;
                true
            }
            None => {
                log::warn!("placement: move ignored for unknown sensor {id}");
                false
            }
        }
    }

    /// Remove a sensor. Unknown ids are a no-op.
    pub fn remove_sensor(&mut self, id: &str) -> bool {
        let before = self.sensor_locations.len();
        self.sensor_locations.retain(|s| s.id != id);
        let removed = self.sensor_locations.len() < before;
        if !removed {
            log::warn!("placement: remove ignored for unknown sensor {id}");
        }
        removed
    }

    /// Update the assumed per-sensor coverage radius. The 500–5000 m
    /// band is UI policy; the engine accepts any positive value and
    /// drops non-positive ones, which only arise transiently.
    pub fn set_coverage_radius(&mut self, meters: f64) {
        if meters > 0.0 && meters.is_finite() {
            self.coverage_radius_m = meters;
        } else {
            log::warn!("placement: ignoring non-positive coverage radius {meters}");
        }
    }

    /// Total estimated coverage for the current layout, via the shared
    /// disk formula.
    pub fn coverage_area_km2(&self) -> u64 {
        estimate_coverage_area_km2(self.sensor_count(), self.coverage_radius_m)
    }
}
