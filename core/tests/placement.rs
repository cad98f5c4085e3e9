use rfdeploy_core::placement::{generate_placements, DeploymentPlan};
use rfdeploy_core::types::{AreaSize, GeoPoint};
use std::collections::HashSet;
use std::f64::consts::TAU;

const CENTER: GeoPoint = GeoPoint { lat: 34.0522, lng: -118.2437 };

#[test]
fn zero_sensors_yields_empty_ring() {
    // The 2π/n step is undefined at n = 0; the guard must return an
    // empty layout instead of propagating a non-finite angle.
    for area in AreaSize::ALL {
        assert!(generate_placements(CENTER, 0, area).is_empty());
    }
}

#[test]
fn ring_has_one_location_per_sensor() {
    for count in [1, 2, 3, 8, 12] {
        let ring = generate_placements(CENTER, count, AreaSize::Medium);
        assert_eq!(ring.len(), count as usize);
    }
}

#[test]
fn ring_ids_and_names_are_sequential() {
    let ring = generate_placements(CENTER, 3, AreaSize::Small);
    assert_eq!(ring[0].id, "sensor-1");
    assert_eq!(ring[2].id, "sensor-3");
    assert_eq!(ring[0].name, "RFeye Sensor 1");
    assert_eq!(ring[2].name, "RFeye Sensor 3");
    assert!(ring.iter().all(|s| s.notes.is_empty()));
}

#[test]
fn ring_radius_follows_area_size() {
    let expected = [
        (AreaSize::Small, 0.01),
        (AreaSize::Medium, 0.02),
        (AreaSize::Large, 0.04),
        (AreaSize::VeryLarge, 0.08),
        (AreaSize::Other, 0.02),
    ];
    for (area, radius) in expected {
        for sensor in generate_placements(CENTER, 6, area) {
            let dist = sensor.position.planar_distance(CENTER);
            assert!(
                (dist - radius).abs() < 1e-12,
                "{area:?}: {} sits {dist} degrees out, expected {radius}",
                sensor.id
            );
        }
    }
}

#[test]
fn ring_angles_are_evenly_spaced() {
    let count = 8u32;
    let ring = generate_placements(CENTER, count, AreaSize::Medium);
    let step = TAU / f64::from(count);
    for (i, sensor) in ring.iter().enumerate() {
        let angle = (i as f64) * step;
        let expected_lat = CENTER.lat + 0.02 * angle.sin();
        let expected_lng = CENTER.lng + 0.02 * angle.cos();
        assert!(
            (sensor.position.lat - expected_lat).abs() < 1e-12
                && (sensor.position.lng - expected_lng).abs() < 1e-12,
            "sensor {i} off its ring slot"
        );
    }
}

#[test]
fn added_ids_never_collide_after_removal() {
    // The counter keeps climbing; remove-then-add must not reuse an id
    // the way a length-derived scheme would.
    let ring = generate_placements(CENTER, 3, AreaSize::Small);
    let mut plan = DeploymentPlan::seeded(ring, 2000.0);

    assert!(plan.remove_sensor("sensor-2"));
    let new_id = plan.add_sensor(GeoPoint::new(34.10, -118.20), "rooftop unit");
    assert_eq!(new_id, "sensor-4");

    assert!(plan.remove_sensor("sensor-1"));
    let another = plan.add_sensor(GeoPoint::new(34.11, -118.21), "");
    assert_eq!(another, "sensor-5");

    let ids: HashSet<&str> = plan.sensor_locations.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids.len(),
        plan.sensor_locations.len(),
        "sensor ids must stay unique: {ids:?}"
    );
}

#[test]
fn add_sensor_carries_the_note() {
    let mut plan = DeploymentPlan::new(2000.0);
    let id = plan.add_sensor(GeoPoint::new(1.0, 2.0), "gate camera mast");
    let sensor = plan.sensor_locations.iter().find(|s| s.id == id).unwrap();
    assert_eq!(sensor.notes, "gate camera mast");
    assert_eq!(sensor.name, "RFeye Sensor 1");
}

#[test]
fn move_updates_position_and_ignores_unknown_ids() {
    let ring = generate_placements(CENTER, 2, AreaSize::Medium);
    let mut plan = DeploymentPlan::seeded(ring, 2000.0);

    let target = GeoPoint::new(34.06, -118.25);
    assert!(plan.move_sensor("sensor-1", target));
    assert_eq!(plan.sensor_locations[0].position, target);

    let before = plan.sensor_locations.clone();
    assert!(!plan.move_sensor("sensor-99", target));
    assert!(!plan.remove_sensor("sensor-99"));
    assert_eq!(plan.sensor_locations, before, "unknown ids must be no-ops");
}

#[test]
fn coverage_radius_rejects_non_positive_values() {
    let mut plan = DeploymentPlan::new(2000.0);
    plan.set_coverage_radius(0.0);
    plan.set_coverage_radius(-500.0);
    plan.set_coverage_radius(f64::NAN);
    assert_eq!(plan.coverage_radius_m, 2000.0);

    plan.set_coverage_radius(750.0);
    assert_eq!(plan.coverage_radius_m, 750.0);
}
