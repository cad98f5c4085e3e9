//! Quantity estimation — area-size base counts scaled by an
//! environment density multiplier.
//!
//! Total over every `(area, environment)` pair: unknown tiers land on
//! the widest base count and the neutral multiplier, never an error.

use crate::types::{AreaSize, Environment};

/// Base sensor count by area-size tier. Anything outside the three
/// named tiers (very large areas included) gets the widest count.
fn base_quantity(area: AreaSize) -> u32 {
    match area {
        AreaSize::Small  => 3,
        AreaSize::Medium => 5,
        AreaSize::Large  => 8,
        _                => 12,
    }
}

/// Environment density multiplier. Urban deployments need extra units
/// for building clutter, mountainous ones for terrain shadowing.
fn environment_multiplier(env: Environment) -> f64 {
    match env {
        Environment::Urban    => 1.5,
        Environment::Mountain => 1.3,
        _                     => 1.0,
    }
}

/// Estimate how many primary sensors a scenario needs.
///
/// `max(1, round(base * multiplier))`, rounding half away from zero
/// (`f64::round`). Never returns zero.
pub fn estimate_quantity(area: AreaSize, env: Environment) -> u32 {
    let raw = f64::from(base_quantity(area)) * environment_multiplier(env);
    let rounded = raw.round() as u32;
    rounded.max(1)
}
