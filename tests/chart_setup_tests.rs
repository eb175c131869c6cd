use deck_rs::DeckError;
use deck_rs::charts::{
    ASR_CHART_MOUNT_ID, BarDataset, QUANT_VRAM_CHART_MOUNT_ID, RecordingChartBackend,
    asr_comparison_chart, init_charts, init_charts_with, quantization_vram_chart,
};
use deck_rs::render::Color;

#[test]
fn both_charts_render_when_mounts_exist() {
    let mut backend =
        RecordingChartBackend::with_mounts([ASR_CHART_MOUNT_ID, QUANT_VRAM_CHART_MOUNT_ID]);
    let report = init_charts(&mut backend).expect("chart setup");

    assert_eq!(report.rendered, vec!["chartASR", "chartQuantVRAM"]);
    assert!(report.skipped.is_empty());
    assert_eq!(backend.rendered.len(), 2);
    assert_eq!(backend.rendered[0].1, asr_comparison_chart());
    assert_eq!(backend.rendered[1].1, quantization_vram_chart());
}

#[test]
fn missing_mount_is_skipped_without_error() {
    let mut backend = RecordingChartBackend::with_mounts([QUANT_VRAM_CHART_MOUNT_ID]);
    let report = init_charts(&mut backend).expect("chart setup");

    assert_eq!(report.rendered, vec!["chartQuantVRAM"]);
    assert_eq!(report.skipped, vec!["chartASR"]);
    assert_eq!(backend.rendered.len(), 1);
}

#[test]
fn page_without_mounts_renders_nothing() {
    let mut backend = RecordingChartBackend::default();
    let report = init_charts(&mut backend).expect("chart setup");
    assert!(report.rendered.is_empty());
    assert_eq!(report.skipped.len(), 2);
}

#[test]
fn asr_chart_serializes_to_dual_axis_bar_config() {
    let json = asr_comparison_chart().to_json_value().expect("json");

    assert_eq!(json["type"], "bar");
    assert_eq!(json["data"]["labels"][0], "Tiny (39M)");
    let datasets = json["data"]["datasets"].as_array().expect("datasets");
    assert_eq!(datasets.len(), 2);
    assert_eq!(datasets[0]["yAxisID"], "y");
    assert_eq!(datasets[1]["yAxisID"], "y1");
    assert_eq!(datasets[0]["data"][2], 382.0);
    assert_eq!(datasets[0]["backgroundColor"], "rgba(37, 99, 235, 0.8)");
    assert_eq!(datasets[0]["borderColor"], "#2563eb");
    assert_eq!(datasets[0]["borderWidth"], 1.0);

    let options = &json["options"];
    assert_eq!(options["maintainAspectRatio"], true);
    assert_eq!(options["interaction"]["mode"], "index");
    assert_eq!(options["interaction"]["intersect"], false);
    assert_eq!(options["plugins"]["legend"]["position"], "bottom");
    assert_eq!(options["scales"]["y"]["position"], "left");
    assert_eq!(options["scales"]["y1"]["position"], "right");
    assert_eq!(options["scales"]["y1"]["grid"]["drawOnChartArea"], false);
    assert_eq!(options["scales"]["x"]["grid"]["display"], false);
}

#[test]
fn quantization_chart_carries_vram_limit_annotation() {
    let json = quantization_vram_chart().to_json_value().expect("json");
    let scale = &json["options"]["scales"]["y"];
    assert_eq!(scale["beginAtZero"], true);
    assert_eq!(scale["max"], 16.0);

    let line = &json["options"]["plugins"]["annotation"]["annotations"]["line1"];
    assert_eq!(line["type"], "line");
    assert_eq!(line["yMin"], 16.0);
    assert_eq!(line["yMax"], 16.0);
    assert_eq!(line["borderColor"], "rgba(239, 68, 68, 0.7)");
    assert_eq!(line["borderDash"], serde_json::json!([5.0, 5.0]));
    assert_eq!(line["label"]["content"], "Limite T4 (16GB)");
    assert_eq!(line["label"]["position"], "end");
}

#[test]
fn chart_config_roundtrips_through_json() {
    let chart = quantization_vram_chart();
    let json = chart.to_json_pretty().expect("json");
    let restored: deck_rs::charts::ChartConfig = serde_json::from_str(&json).expect("parse");
    assert_eq!(restored, chart);
}

#[test]
fn invalid_chart_aborts_setup_with_mount_context() {
    let mut broken = asr_comparison_chart();
    broken.data.datasets.push(BarDataset::tinted(
        "Broken",
        vec![1.0],
        Color::rgb(0.0, 0.0, 0.0),
    ));

    let mut backend = RecordingChartBackend::with_mounts(["chartBroken"]);
    let err = init_charts_with(&mut backend, [("chartBroken", broken)]).expect_err("invalid");
    match err {
        DeckError::Chart { mount_id, .. } => assert_eq!(mount_id, "chartBroken"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(backend.rendered.is_empty());
}

#[test]
fn unknown_axis_reference_is_invalid() {
    let mut chart = quantization_vram_chart();
    chart.data.datasets[0].y_axis_id = Some("y9".to_owned());
    assert!(chart.validate().is_err());
}
