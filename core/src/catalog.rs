//! Equipment catalog — static reference data for every sensor and
//! accessory the selector can recommend.
//!
//! Entries are fixed: names, descriptions, spec sheets, and unit prices
//! never change at runtime. The decision tables in `equipment` pick
//! from this table; nothing else creates equipment items from scratch.

use crate::equipment::EquipmentItem;

/// Primary RF sensors carry this id prefix. Downstream code counts
/// sensors (vs. accessories) by matching on it.
pub const PRIMARY_PREFIX: &str = "node-";

#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id:          &'static str,
    pub name:        &'static str,
    pub description: &'static str,
    pub specs:       [&'static str; 4],
    pub unit_price:  f64,
}

impl CatalogEntry {
    /// Materialize a catalog entry as an equipment item with the given
    /// quantity. Quantities below one are normalized up: a zero-unit
    /// line never appears in a recommendation.
    pub fn with_quantity(&self, quantity: u32) -> EquipmentItem {
        EquipmentItem {
            id:          self.id.to_string(),
            name:        self.name.to_string(),
            description: self.description.to_string(),
            specs:       self.specs.iter().map(|s| s.to_string()).collect(),
            quantity:    quantity.max(1),
            unit_price:  self.unit_price,
        }
    }
}

// ── Primary sensors ────────────────────────────────────────────────

pub const NODE_100_8: CatalogEntry = CatalogEntry {
    id:          "node-100-8",
    name:        "RFeye Node 100-8",
    description: "High-performance spectrum monitoring node with 8 MHz instantaneous bandwidth",
    specs: [
        "Frequency Range: 10 kHz - 8 GHz",
        "IBW: 8 MHz",
        "Sensitivity: -167 dBm/Hz",
        "Dynamic Range: > 90 dB",
    ],
    unit_price: 12_000.0,
};

pub const NODE_100_18: CatalogEntry = CatalogEntry {
    id:          "node-100-18",
    name:        "RFeye Node 100-18",
    description: "Wide-band monitoring node optimized for drone detection and tracking",
    specs: [
        "Frequency Range: 10 kHz - 18 GHz",
        "IBW: 20 MHz",
        "Direction Finding: Yes",
        "Drone Classification: AI-powered",
    ],
    unit_price: 18_000.0,
};

pub const NODE_100_6_DF: CatalogEntry = CatalogEntry {
    id:          "node-100-6-df",
    name:        "RFeye Node 100-6-DF",
    description: "Direction-finding spectrum monitoring node for security applications",
    specs: [
        "Frequency Range: 10 kHz - 6 GHz",
        "IBW: 10 MHz",
        "Direction Finding: Yes",
        "Geo-location: Multilateration capable",
    ],
    unit_price: 15_000.0,
};

pub const NODE_100_6: CatalogEntry = CatalogEntry {
    id:          "node-100-6",
    name:        "RFeye Node 100-6",
    description: "General-purpose spectrum monitoring node",
    specs: [
        "Frequency Range: 10 kHz - 6 GHz",
        "IBW: 5 MHz",
        "Sensitivity: -165 dBm/Hz",
        "Dynamic Range: > 85 dB",
    ],
    unit_price: 10_000.0,
};

// ── Accessories ────────────────────────────────────────────────────

pub const SOLAR_KIT: CatalogEntry = CatalogEntry {
    id:          "solar-kit",
    name:        "Solar Power Kit",
    description: "Self-contained solar power solution for remote deployments",
    specs: [
        "120W Solar Panel",
        "100Ah Battery",
        "Charge Controller",
        "3 Days Autonomy",
    ],
    unit_price: 1_200.0,
};

pub const WIFI_BACKHAUL: CatalogEntry = CatalogEntry {
    id:          "wifi-backhaul",
    name:        "WiFi Backhaul Kit",
    description: "Long-range WiFi connectivity for data backhaul",
    specs: [
        "Range: Up to 5km",
        "Bandwidth: 50 Mbps",
        "Encryption: WPA3",
        "PoE Powered",
    ],
    unit_price: 800.0,
};

pub const STORMCASE: CatalogEntry = CatalogEntry {
    id:          "stormcase",
    name:        "RFeye Stormcase",
    description: "Rugged transportation and deployment case for RFeye Nodes",
    specs: [
        "IP67 Rated",
        "Drop Protection",
        "Integrated Connectors",
        "Quick Deployment",
    ],
    unit_price: 1_500.0,
};
