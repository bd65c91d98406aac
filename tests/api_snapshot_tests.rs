use logplot::api::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1};
use logplot::core::{IndexWindow, IngestOptions, RawInput, ZoomBasis};
use logplot::render::NullRenderer;
use logplot::{LogPlotEngine, LogPlotEngineConfig, LogPlotError};

fn loaded_engine() -> LogPlotEngine<NullRenderer> {
    let mut engine = LogPlotEngine::new(NullRenderer::default(), LogPlotEngineConfig::default())
        .expect("engine init");
    engine
        .load(RawInput::Delimited(
            "Time,rpm,Oil Temp\n0,800,90\n1,,91\n2,2400,\n3,3000,93\n",
        ))
        .expect("load");
    engine
}

#[test]
fn snapshot_summarizes_installed_state() {
    let mut engine = loaded_engine();
    engine.set_window(1, 3).expect("set");
    engine.set_label_filter("oil");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.generation, Some(1));
    assert_eq!(snapshot.row_count, 4);
    assert_eq!(snapshot.window, Some(IndexWindow { start: 1, end: 3 }));
    assert_eq!(snapshot.label_filter, "oil");

    let rpm = &snapshot.series[0];
    assert_eq!(rpm.key, "rpm");
    assert!(!rpm.hidden);
    assert!(rpm.default_visible);
    assert_eq!(rpm.min, Some(800.0));
    assert_eq!(rpm.max, Some(3000.0));
    assert_eq!(rpm.gap_count, 1);

    let oil = &snapshot.series[1];
    assert!(oil.hidden);
    assert_eq!(oil.gap_count, 1);
}

#[test]
fn empty_engine_snapshot_has_no_window() {
    let engine = LogPlotEngine::new(NullRenderer::default(), LogPlotEngineConfig::default())
        .expect("engine init");
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.generation, None);
    assert_eq!(snapshot.window, None);
    assert!(snapshot.series.is_empty());
}

#[test]
fn snapshot_json_contract_v1_round_trips() {
    let engine = loaded_engine();
    let json = engine.snapshot_json_contract_v1_pretty().expect("json");

    let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(&json).expect("payload");
    assert_eq!(payload.schema_version, ENGINE_SNAPSHOT_JSON_SCHEMA_V1);

    let parsed = EngineSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, engine.snapshot());
}

#[test]
fn snapshot_parser_accepts_bare_snapshot() {
    let engine = loaded_engine();
    let bare = serde_json::to_string(&engine.snapshot()).expect("bare json");
    let parsed = EngineSnapshot::from_json_compat_str(&bare).expect("parse");
    assert_eq!(parsed, engine.snapshot());
}

#[test]
fn snapshot_parser_rejects_unknown_schema_version() {
    let engine = loaded_engine();
    let payload = EngineSnapshotJsonContractV1 {
        schema_version: 99,
        snapshot: engine.snapshot(),
    };
    let json = serde_json::to_string(&payload).expect("json");
    assert!(matches!(
        EngineSnapshot::from_json_compat_str(&json),
        Err(LogPlotError::InvalidData(_))
    ));
}

#[test]
fn snapshot_parser_rejects_malformed_documents() {
    for input in ["not json", r#"{"schema_version": 1}"#, r#"{"row_count": "four"}"#] {
        assert!(matches!(
            EngineSnapshot::from_json_compat_str(input),
            Err(LogPlotError::InvalidData(_))
        ));
    }
}

#[test]
fn config_json_round_trips() {
    let config = LogPlotEngineConfig::default()
        .with_ingest_options(
            IngestOptions::default()
                .with_skip_lines(3)
                .with_comment_prefix(Some("//"))
                .with_delimiter(';'),
        )
        .with_priority_keywords(["Lambda"])
        .with_zoom_basis(ZoomBasis::Absolute);

    let json = config.to_json_pretty().expect("json");
    let parsed = LogPlotEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn config_json_fills_missing_fields_with_defaults() {
    let parsed = LogPlotEngineConfig::from_json_str("{}").expect("parse");
    assert_eq!(parsed, LogPlotEngineConfig::default());
    assert_eq!(parsed.priority_keywords, vec!["Engine Speed", "rpm", "Boost"]);
    assert_eq!(parsed.zoom_basis, ZoomBasis::WindowRelative);
}

#[test]
fn invalid_config_is_rejected_at_engine_init() {
    let config = LogPlotEngineConfig::default().with_priority_keywords(["Boost", ""]);
    assert!(matches!(
        LogPlotEngine::new(NullRenderer::default(), config),
        Err(LogPlotError::InvalidData(_))
    ));

    let config = LogPlotEngineConfig::default()
        .with_ingest_options(IngestOptions::default().with_delimiter('\n'));
    assert!(LogPlotEngine::new(NullRenderer::default(), config).is_err());
}

#[test]
fn custom_keywords_drive_default_visibility() {
    let config = LogPlotEngineConfig::default().with_priority_keywords(["Temp"]);
    let mut engine = LogPlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .load(RawInput::Delimited("t,Coolant Temp,rpm\n0,1,2\n"))
        .expect("load");
    assert!(!engine.series_hidden("Coolant Temp").expect("hidden"));
    assert!(engine.series_hidden("rpm").expect("hidden"));
}
