use std::fs;
use std::path::Path;

use tempfile::TempDir;
use ttc_delay_risk::ctx::Ctx;
use ttc_delay_risk::features::{Selection, Weekday};
use ttc_delay_risk::pipeline::Pipeline;

const MODEL: &str = include_str!("fixtures/model.json");
const DATASET: &str = include_str!("fixtures/ttc_small.csv");

fn write_inputs(dir: &Path) {
    fs::write(dir.join("model.json"), MODEL).unwrap();
    fs::write(dir.join("ttc.csv"), DATASET).unwrap();
}

fn run(dir: &Path, line: &str, hour: u8, day: Weekday) -> Ctx {
    let mut ctx = Ctx::new(
        dir.join("model.json"),
        dir.join("ttc.csv"),
        dir.join("out"),
        true,
        true,
        true,
        "0.0.0-test",
    );
    ctx.selection = Some(Selection {
        line: line.to_string(),
        hour,
        day,
    });
    Pipeline::predict().run(&mut ctx).unwrap();
    ctx
}

#[test]
fn predict_writes_all_outputs() {
    let tmp = TempDir::new().unwrap();
    write_inputs(tmp.path());
    let ctx = run(tmp.path(), "YU", 8, Weekday::Monday);

    assert!(ctx.output.json_path.exists());
    assert!(ctx.output.tsv_path.exists());
    assert!(ctx.output.geojson_path.exists());
    assert!(ctx.warnings.is_empty());

    let p = ctx.prediction.as_ref().unwrap().probability;
    assert!((p - 0.700567142).abs() < 1e-6);
    let marker = ctx.map.as_ref().unwrap();
    assert!((marker.radius_m - p * 10_000.0).abs() < 1e-9);
}

#[test]
fn default_line_is_first_choice() {
    let tmp = TempDir::new().unwrap();
    write_inputs(tmp.path());
    let ctx = run(tmp.path(), "", 13, Weekday::Tuesday);

    assert_eq!(ctx.line_choices, vec!["BD".to_string(), "YU".to_string()]);
    assert_eq!(ctx.selection.as_ref().unwrap().line, "BD");
    let p = ctx.prediction.as_ref().unwrap().probability;
    assert!((p - 0.425557483).abs() < 1e-6);
}

#[test]
fn unknown_line_warns_and_skips_map() {
    let tmp = TempDir::new().unwrap();
    write_inputs(tmp.path());
    let ctx = run(tmp.path(), "XYZ", 18, Weekday::Saturday);

    assert!(ctx.map.is_none());
    assert!(!ctx.output.geojson_path.exists());
    assert!(ctx.output.json_path.exists());
    assert_eq!(ctx.warnings.len(), 2);
    assert!(ctx.warnings[0].contains("line_XYZ"));
    assert_eq!(ctx.warnings[1], "No map coordinates available for this line.");

    let assembled = ctx.assembled.as_ref().unwrap();
    assert!(!assembled.line_matched);
    assert!(assembled.is_peak && assembled.is_weekend);
    let p = ctx.prediction.as_ref().unwrap().probability;
    assert!((p - 0.574442517).abs() < 1e-6);
}

#[test]
fn delay_causes_are_tallied() {
    let tmp = TempDir::new().unwrap();
    write_inputs(tmp.path());
    let ctx = run(tmp.path(), "YU", 8, Weekday::Monday);

    let causes = ctx.delay_causes.as_ref().unwrap();
    let got: Vec<(&str, u64)> = causes.iter().map(|c| (c.cause.as_str(), c.count)).collect();
    assert_eq!(
        got,
        vec![
            ("Mechanical", 3),
            ("Signal", 2),
            ("Passenger", 2),
            ("Weather", 1),
            ("Security", 1),
        ]
    );
}

#[test]
fn missing_delay_reason_skips_causes() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("model.json"), MODEL).unwrap();
    let stripped: String = DATASET
        .lines()
        .map(|l| l.split(',').take(7).collect::<Vec<_>>().join(","))
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(tmp.path().join("ttc.csv"), stripped).unwrap();

    let ctx = run(tmp.path(), "YU", 8, Weekday::Monday);
    assert!(ctx.delay_causes.is_none());
    assert!(ctx.prediction.is_some());
}

#[test]
fn schema_mismatch_fails_the_run() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("model.json"), MODEL).unwrap();
    let csv = "hour,line_BD,line_SHP,line_YU,cause_category_Mechanical\n8,0,0,1,0\n";
    fs::write(tmp.path().join("ttc.csv"), csv).unwrap();

    let mut ctx = Ctx::new(
        tmp.path().join("model.json"),
        tmp.path().join("ttc.csv"),
        tmp.path().join("out"),
        false,
        false,
        false,
        "0.0.0-test",
    );
    ctx.selection = Some(Selection {
        line: "YU".to_string(),
        hour: 8,
        day: Weekday::Monday,
    });
    let err = Pipeline::predict().run(&mut ctx).unwrap_err();
    assert!(err.to_string().contains("model expects 7"));
    assert!(ctx.prediction.is_none());
}
