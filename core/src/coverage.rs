//! Coverage estimation — the shared non-overlapping-disks formula.
//!
//! RULE: every surface that displays a coverage figure calls this one
//! function, so the live summary and the exported plan can never
//! disagree.

use std::f64::consts::PI;

/// Estimated total coverage in km²: `round(n * π * (r/1000)²)`.
///
/// Each sensor is treated as an independent disk; overlap between
/// adjacent circles is ignored. This is an upper bound on the true
/// union-of-circles area, not a propagation model.
pub fn estimate_coverage_area_km2(sensor_count: u32, coverage_radius_m: f64) -> u64 {
    let radius_km = coverage_radius_m / 1000.0;
    (f64::from(sensor_count) * PI * radius_km * radius_km).round() as u64
}
