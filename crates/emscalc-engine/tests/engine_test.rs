use emscalc_engine::*;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn number_inputs(values: &[(&str, f64)]) -> InputSet {
    values.iter().map(|(k, v)| (k.to_string(), RawValue::Number(*v))).collect()
}

#[test]
fn test_engine_registers_all_builtin_calculators() {
    init_tracing();
    let engine = Engine::new();
    let mut names: Vec<_> = engine.names().collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "anion_gap",
            "apgar",
            "bmi",
            "cardiac_output",
            "glasgow_coma",
            "iv_drip",
            "minute_ventilation",
            "oxygen_tank",
            "parkland",
            "pediatric_weight",
            "shock_index",
            "stroke_befast",
            "stroke_fast",
        ]
    );
}

#[test]
fn test_cardiac_output_reference_values() {
    init_tracing();
    let engine = Engine::new();
    let inputs = number_inputs(&[("heart_rate", 80.0), ("stroke_volume", 70.0)]);

    let result = engine.compute("cardiac_output", &inputs).unwrap();
    assert!((result.primary_value - 5.6).abs() < 1e-12);
    assert_eq!(result.primary_unit, "L/min");
    assert_eq!(result.category, "Normal");

    // The cardiac index carries its own classification.
    let ci = result.secondary("cardiac_index").unwrap();
    assert!((ci - 3.2941176470588234).abs() < 1e-12);
    assert_eq!(result.secondary_category("cardiac_index"), Some("Normal"));
}

#[test]
fn test_cardiac_index_classified_independently_of_output() {
    let engine = Engine::new();
    // CO 4.1 is in its normal band while CI 2.41 falls below the index's.
    let inputs = number_inputs(&[("heart_rate", 82.0), ("stroke_volume", 50.0)]);

    let result = engine.compute("cardiac_output", &inputs).unwrap();
    assert_eq!(result.category, "Normal");
    assert_eq!(result.secondary_category("cardiac_index"), Some("Low"));
    assert_eq!(result.secondary_category("mean_arterial_pressure"), None);
}

#[test]
fn test_parkland_reference_values() {
    let engine = Engine::new();
    let inputs = number_inputs(&[
        ("weight", 70.0),
        ("burn_percentage", 20.0),
        ("time_since_burn", 1.0),
    ]);

    let result = engine.compute("parkland", &inputs).unwrap();
    assert_eq!(result.primary_value, 5600.0);
    assert_eq!(result.secondary("first_8h"), Some(2800.0));
    assert_eq!(result.secondary("hourly_rate_first_8h"), Some(350.0));
    assert_eq!(result.secondary("second_8h"), Some(1400.0));
    assert_eq!(result.category, "Major");
}

#[test]
fn test_oxygen_tank_reference_values() {
    let engine = Engine::new();
    let mut inputs = number_inputs(&[("pressure", 1500.0), ("flow_rate", 2.0)]);
    inputs.insert("tank_size".to_string(), RawValue::Text("E".to_string()));

    let result = engine.compute("oxygen_tank", &inputs).unwrap();
    let volume = result.secondary("remaining_volume").unwrap();
    assert!((volume - 463.6363636363636).abs() < 1e-9);
    assert!((result.primary_value - 231.81818181818181).abs() < 1e-9);
    assert_eq!(display::format_minutes(result.primary_value), "3h 52m");
}

#[test]
fn test_unknown_calculator_name() {
    let engine = Engine::new();
    let err = engine.compute("troponin", &InputSet::new()).unwrap_err();
    match err {
        EngineError::UnknownCalculator { name } => assert_eq!(name, "troponin"),
        other => panic!("expected UnknownCalculator, got {other:?}"),
    }
    assert!(engine.session("troponin").is_err());
}

#[test]
fn test_computation_is_deterministic() {
    let engine = Engine::new();
    let inputs = number_inputs(&[("heart_rate", 110.0), ("systolic_bp", 90.0)]);

    let first = engine.compute("shock_index", &inputs).unwrap();
    let second = engine.compute("shock_index", &inputs).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.primary_value.to_bits(), second.primary_value.to_bits());
}

#[test]
fn test_session_history_caps_at_five_newest_first() {
    let engine = Engine::new();
    let mut session = engine.session("glasgow_coma").unwrap();

    for motor in 1..=6 {
        let inputs = number_inputs(&[("eye", 4.0), ("verbal", 5.0), ("motor", motor as f64)]);
        session.run(&inputs).unwrap();
    }

    assert_eq!(session.history().len(), 5);
    // Newest first: motor 6 down to motor 2, the motor-1 run was evicted.
    let totals: Vec<f64> =
        session.history().list().map(|e| e.result.primary_value).collect();
    assert_eq!(totals, vec![15.0, 14.0, 13.0, 12.0, 11.0]);
}

#[test]
fn test_failed_computation_never_recorded() {
    let engine = Engine::new();
    let mut session = engine.session("glasgow_coma").unwrap();

    let bad = number_inputs(&[("eye", 9.0), ("verbal", 5.0), ("motor", 6.0)]);
    assert!(session.run(&bad).is_err());
    assert!(session.history().is_empty());

    let good = number_inputs(&[("eye", 4.0), ("verbal", 5.0), ("motor", 6.0)]);
    session.run(&good).unwrap();
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_sessions_are_independent() {
    let engine = Engine::new();
    let mut first = engine.session("shock_index").unwrap();
    let mut second = engine.session("shock_index").unwrap();

    first.run(&number_inputs(&[("heart_rate", 80.0), ("systolic_bp", 120.0)])).unwrap();
    assert_eq!(first.history().len(), 1);
    assert!(second.history().is_empty());

    second.run(&number_inputs(&[("heart_rate", 120.0), ("systolic_bp", 80.0)])).unwrap();
    assert_eq!(first.history().len(), 1);
    assert_eq!(second.history().len(), 1);
}

#[test]
fn test_inputs_deserialized_from_json() {
    init_tracing();
    let engine = Engine::new();

    // Form layers submit mixed payloads: numbers, numeric strings, extra
    // UI state. Undeclared fields are ignored; text numbers parse.
    let inputs: InputSet = serde_json::from_value(json!({
        "sodium": 140,
        "chloride": "100",
        "bicarbonate": 24.0,
        "form_step": "review",
        "submitted": true
    }))
    .unwrap();

    let result = engine.compute("anion_gap", &inputs).unwrap();
    assert_eq!(result.primary_value, 16.0);
    assert_eq!(result.category, "high");
}

#[test]
fn test_validation_collects_every_issue() {
    let engine = Engine::new();
    let inputs: InputSet = serde_json::from_value(json!({
        "sodium": "not a number",
        "chloride": 900
    }))
    .unwrap();

    let err = engine.compute("anion_gap", &inputs).unwrap_err();
    match err {
        EngineError::InvalidInput { issues } => {
            // sodium unparsable, chloride out of range, bicarbonate missing
            assert_eq!(issues.len(), 3);
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_history_entry_serializes_with_timestamp() {
    let engine = Engine::new();
    let mut session = engine.session("apgar").unwrap();

    let inputs: InputSet = serde_json::from_value(json!({
        "appearance": 2, "pulse": 2, "grimace": 2, "activity": 2, "respiratory": 2
    }))
    .unwrap();
    session.run(&inputs).unwrap();

    let entry = session.history().list().next().unwrap();
    let value = serde_json::to_value(entry).unwrap();
    assert!(value.get("timestamp").is_some());
    assert_eq!(value["result"]["primary_value"], json!(10.0));
    assert_eq!(value["result"]["category"], json!("normal"));
}
