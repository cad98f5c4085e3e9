use rfdeploy_core::error::PlanError;
use rfdeploy_core::scenario::ScenarioDescriptor;
use rfdeploy_core::types::{
    AreaSize, CoverageObjective, Environment, GeoPoint, MissionType, TerrainComplexity,
};
use rfdeploy_core::workflow::EquipmentStage;

const CENTER: GeoPoint = GeoPoint { lat: 34.0522, lng: -118.2437 };

fn urban_drone_scenario() -> ScenarioDescriptor {
    ScenarioDescriptor {
        project_name:         "Harbor Watch".into(),
        mission_type:         Some(MissionType::DroneDetection),
        environment:          Environment::Urban,
        coverage_objective:   CoverageObjective::PerimeterProtection,
        area_size:            AreaSize::Medium,
        terrain_complexity:   TerrainComplexity::Low,
        special_requirements: None,
    }
}

#[test]
fn urban_drone_pipeline_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut stage = EquipmentStage::build(urban_drone_scenario());

    // Primary: node-100-18, quantity round(5 * 1.5) = 8. Accessories:
    // wifi-backhaul ceil(8/2) = 4 and stormcase 8, no solar-kit.
    let ids: Vec<&str> = stage.recommendations().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["node-100-18", "wifi-backhaul", "stormcase"]);
    assert_eq!(stage.recommendations()[0].quantity, 8);
    assert_eq!(stage.recommendations()[1].quantity, 4);
    assert_eq!(stage.recommendations()[2].quantity, 8);

    stage.select_all();
    assert_eq!(
        stage.selected_cost(),
        8.0 * 18_000.0 + 4.0 * 800.0 + 8.0 * 1_500.0
    );

    let deployment = stage.proceed(CENTER).unwrap();
    let summary = deployment.summary();
    assert_eq!(summary.total_sensors, 8, "one placement per primary sensor");
    assert_eq!(summary.coverage_radius_m, 2000.0);
    assert_eq!(summary.coverage_area_km2, 101);
}

#[test]
fn rural_small_scenario_with_unset_mission() {
    let mut stage = EquipmentStage::build(ScenarioDescriptor {
        project_name:         "Ranch Perimeter".into(),
        mission_type:         None,
        environment:          Environment::Rural,
        coverage_objective:   CoverageObjective::AreaCoverage,
        area_size:            AreaSize::Small,
        terrain_complexity:   TerrainComplexity::Medium,
        special_requirements: None,
    });

    let ids: Vec<&str> = stage.recommendations().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["node-100-6", "solar-kit", "stormcase"]);
    assert!(stage.recommendations().iter().all(|i| i.quantity == 3));

    stage.select_all();
    assert_eq!(stage.selected_cost(), 38_100.0);
}

#[test]
fn missing_scenario_is_a_blocking_error() {
    let err = EquipmentStage::from_form(None).unwrap_err();
    assert!(matches!(err, PlanError::MissingInput { .. }));
    assert!(
        err.to_string().contains("scenario builder"),
        "error must point back to the scenario step: {err}"
    );
}

#[test]
fn proceeding_with_nothing_selected_is_recoverable() {
    let mut stage = EquipmentStage::build(urban_drone_scenario());
    let err = stage.proceed(CENTER).unwrap_err();
    assert!(matches!(err, PlanError::EmptySelection));

    // Reselect and retry.
    stage.toggle("node-100-18");
    let deployment = stage.proceed(CENTER).unwrap();
    assert_eq!(deployment.summary().total_sensors, 8);
}

#[test]
fn selection_filters_the_cost() {
    let mut stage = EquipmentStage::build(urban_drone_scenario());
    stage.toggle("node-100-18");
    assert_eq!(stage.selected_cost(), 8.0 * 18_000.0);

    stage.toggle("stormcase");
    assert_eq!(stage.selected_cost(), 8.0 * 18_000.0 + 8.0 * 1_500.0);

    stage.toggle("stormcase");
    assert_eq!(stage.selected_cost(), 8.0 * 18_000.0, "toggle off removes the line");

    stage.toggle("no-such-item");
    assert_eq!(stage.selected_cost(), 8.0 * 18_000.0, "unknown ids are ignored");
}

#[test]
fn quantity_edits_clamp_to_one_unit() {
    let mut stage = EquipmentStage::build(urban_drone_scenario());
    stage.set_quantity("node-100-18", 0);
    assert_eq!(stage.recommendations()[0].quantity, 1);

    stage.set_quantity("node-100-18", 10);
    stage.toggle("node-100-18");
    assert_eq!(stage.selected_cost(), 10.0 * 18_000.0);
}

#[test]
fn quantity_edits_flow_through_to_placement() {
    let mut stage = EquipmentStage::build(urban_drone_scenario());
    stage.set_quantity("node-100-18", 3);
    stage.select_all();

    let deployment = stage.proceed(CENTER).unwrap();
    assert_eq!(deployment.summary().total_sensors, 3);
}

#[test]
fn summary_and_document_figures_agree_exactly() {
    let mut stage = EquipmentStage::build(urban_drone_scenario());
    stage.select_all();
    let mut deployment = stage.proceed(CENTER).unwrap();

    // Edit the layout the way a user would before exporting.
    deployment.plan.set_coverage_radius(3200.0);
    deployment.plan.remove_sensor("sensor-2");
    deployment.plan.add_sensor(GeoPoint::new(34.07, -118.26), "overlook");

    let summary = deployment.summary();
    let document = deployment.finalize();

    assert_eq!(document.coverage_area_km2, summary.coverage_area_km2);
    assert_eq!(document.total_cost, summary.total_cost);
    assert_eq!(document.sensor_count, summary.total_sensors);
    assert_eq!(document.coverage_radius_m, summary.coverage_radius_m);
}

#[test]
fn document_snapshot_is_complete_and_serializable() {
    let mut stage = EquipmentStage::build(urban_drone_scenario());
    stage.select_all();
    let mut deployment = stage.proceed(CENTER).unwrap();
    deployment.plan.deployment_notes = "Stage from the north lot.".into();

    let document = deployment.finalize();
    assert_eq!(document.project_name, "Harbor Watch");
    assert_eq!(document.equipment.len(), 3);
    assert_eq!(document.deployment_notes, "Stage from the north lot.");

    let json = document.to_json().unwrap();
    assert!(json.contains("node-100-18"));
    assert!(json.contains("coverage_area_km2"));
}

#[test]
fn recommendation_runs_identically_per_submission() {
    let a = EquipmentStage::build(urban_drone_scenario());
    let b = EquipmentStage::build(urban_drone_scenario());
    assert_eq!(
        a.recommendations(),
        b.recommendations(),
        "same scenario must produce the same recommendation list"
    );
}
