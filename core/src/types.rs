//! Shared scenario vocabulary — the enumerated values the scenario form
//! produces, plus geographic primitives.
//!
//! RULE: every enum that crosses the form boundary carries a catch-all
//! variant. Unrecognized wire values fall through to the documented
//! defaults in the decision tables; they never fail deserialization.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionType {
    BorderSecurity,
    InfrastructureProtection,
    SpectrumMonitoring,
    DroneDetection,
    SignalIntelligence,
    #[serde(other)]
    Other,
}

impl MissionType {
    pub fn label(self) -> &'static str {
        match self {
            MissionType::BorderSecurity           => "Border Security",
            MissionType::InfrastructureProtection => "Infrastructure Protection",
            MissionType::SpectrumMonitoring       => "Spectrum Monitoring",
            MissionType::DroneDetection           => "Drone Detection",
            MissionType::SignalIntelligence       => "Signal Intelligence",
            MissionType::Other                    => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Urban,
    Rural,
    Coastal,
    Desert,
    Forest,
    Mountain,
    #[serde(other)]
    Other,
}

impl Environment {
    pub const ALL: [Environment; 6] = [
        Environment::Urban,
        Environment::Rural,
        Environment::Coastal,
        Environment::Desert,
        Environment::Forest,
        Environment::Mountain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Environment::Urban    => "Urban",
            Environment::Rural    => "Rural",
            Environment::Coastal  => "Coastal",
            Environment::Desert   => "Desert",
            Environment::Forest   => "Forest",
            Environment::Mountain => "Mountainous",
            Environment::Other    => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageObjective {
    AreaCoverage,
    PerimeterProtection,
    SiteProtection,
    TrafficMonitoring,
    #[serde(other)]
    Other,
}

impl CoverageObjective {
    pub fn label(self) -> &'static str {
        match self {
            CoverageObjective::AreaCoverage        => "General Area Coverage",
            CoverageObjective::PerimeterProtection => "Perimeter Protection",
            CoverageObjective::SiteProtection      => "Specific Site Protection",
            CoverageObjective::TrafficMonitoring   => "Traffic Monitoring",
            CoverageObjective::Other               => "Other",
        }
    }
}

/// Area-size tiers from the scenario form. The km² bands are the labels
/// shown to the user; the tiers themselves drive the quantity and
/// placement tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaSize {
    Small,
    Medium,
    Large,
    VeryLarge,
    #[serde(other)]
    Other,
}

impl AreaSize {
    pub const ALL: [AreaSize; 4] = [
        AreaSize::Small,
        AreaSize::Medium,
        AreaSize::Large,
        AreaSize::VeryLarge,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AreaSize::Small     => "Small (< 5 km²)",
            AreaSize::Medium    => "Medium (5-50 km²)",
            AreaSize::Large     => "Large (50-200 km²)",
            AreaSize::VeryLarge => "Very Large (> 200 km²)",
            AreaSize::Other     => "Unspecified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerrainComplexity {
    Low,
    High,
    // Unknown wire values land on the form's default tier.
    #[serde(other)]
    Medium,
}

impl Default for TerrainComplexity {
    fn default() -> Self { TerrainComplexity::Medium }
}

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Straight-line distance in degree space. Good enough for the ring
    /// geometry checks; this is not a geodesic.
    pub fn planar_distance(self, other: GeoPoint) -> f64 {
        let dlat = self.lat - other.lat;
        let dlng = self.lng - other.lng;
        (dlat * dlat + dlng * dlng).sqrt()
    }
}
