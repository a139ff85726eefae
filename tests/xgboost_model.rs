use serde_json::{Value, json};
use ttc_delay_risk::io::xgboost::{parse_base_score, parse_model_str, read_model};
use ttc_delay_risk::model::Objective;

const MODEL: &str = include_str!("fixtures/model.json");

fn fixture() -> Value {
    serde_json::from_str(MODEL).unwrap()
}

fn parse(v: &Value) -> anyhow::Result<ttc_delay_risk::model::TreeEnsemble> {
    parse_model_str(&v.to_string())
}

#[test]
fn fixture_model_loads() {
    let model = parse_model_str(MODEL).unwrap();
    assert_eq!(model.num_trees(), 2);
    assert_eq!(model.num_features, 7);
    assert_eq!(model.objective, Objective::BinaryLogistic);
    assert!(model.base_margin.abs() < 1e-12);
    let names = model.feature_names.as_ref().unwrap();
    assert_eq!(names[5], "line_YU");
}

#[test]
fn base_score_accepts_plain_and_bracketed_forms() {
    assert!((parse_base_score("5E-1").unwrap() - 0.5).abs() < 1e-12);
    assert!((parse_base_score("[2.5E-1]").unwrap() - 0.25).abs() < 1e-12);
    assert!(parse_base_score("[5E-1,5E-1]").is_err());
    assert!(parse_base_score("abc").is_err());
}

#[test]
fn bracketed_base_score_sets_margin() {
    let mut v = fixture();
    v["learner"]["learner_model_param"]["base_score"] = json!("[7.5E-1]");
    let model = parse(&v).unwrap();
    assert!((model.base_margin - 3.0f64.ln()).abs() < 1e-9);
}

#[test]
fn logitraw_keeps_base_score_as_margin() {
    let mut v = fixture();
    v["learner"]["objective"]["name"] = json!("binary:logitraw");
    v["learner"]["learner_model_param"]["base_score"] = json!("-2E-1");
    let model = parse(&v).unwrap();
    assert_eq!(model.objective, Objective::BinaryLogitRaw);
    assert!((model.base_margin + 0.2).abs() < 1e-12);
}

#[test]
fn boolean_default_left_is_accepted() {
    let mut v = fixture();
    v["learner"]["gradient_booster"]["model"]["trees"][1]["default_left"] =
        json!([true, true, false, false, false]);
    let model = parse(&v).unwrap();
    let mut row = vec![0.0; 7];
    row[5] = f64::NAN;
    row[2] = f64::NAN;
    // Missing values follow default_left down to the 0.1 leaf.
    assert!((model.trees[1].predict(&row) - 0.1).abs() < 1e-12);
}

#[test]
fn missing_feature_names_are_optional() {
    let mut v = fixture();
    v["learner"].as_object_mut().unwrap().remove("feature_names");
    let model = parse(&v).unwrap();
    assert!(model.feature_names.is_none());
}

#[test]
fn categorical_splits_are_rejected() {
    let mut v = fixture();
    v["learner"]["gradient_booster"]["model"]["trees"][0]["split_type"] = json!([1, 0, 0]);
    let err = parse(&v).unwrap_err();
    assert!(format!("{:#}", err).contains("categorical split"));
}

#[test]
fn multiclass_models_are_rejected() {
    let mut v = fixture();
    v["learner"]["learner_model_param"]["num_class"] = json!("3");
    v["learner"]["objective"]["name"] = json!("binary:logistic");
    let err = parse(&v).unwrap_err();
    assert!(err.to_string().contains("multi-class"));
}

#[test]
fn non_binary_objectives_are_rejected() {
    let mut v = fixture();
    v["learner"]["objective"]["name"] = json!("reg:squarederror");
    assert!(parse(&v).is_err());
}

#[test]
fn non_tree_boosters_are_rejected() {
    let mut v = fixture();
    v["learner"]["gradient_booster"]["name"] = json!("gblinear");
    assert!(parse(&v).is_err());
}

#[test]
fn out_of_range_children_are_rejected() {
    let mut v = fixture();
    v["learner"]["gradient_booster"]["model"]["trees"][0]["right_children"] = json!([7, -1, -1]);
    let err = parse(&v).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid child index"));
}

#[test]
fn split_feature_beyond_num_feature_is_rejected() {
    let mut v = fixture();
    v["learner"]["learner_model_param"]["num_feature"] = json!("4");
    v["learner"].as_object_mut().unwrap().remove("feature_names");
    let err = parse(&v).unwrap_err();
    assert!(err.to_string().contains("splits on feature 5"));
}

#[test]
fn missing_file_is_fatal_with_path() {
    let err = read_model(std::path::Path::new("does/not/exist.json")).unwrap_err();
    assert!(format!("{:#}", err).contains("does/not/exist.json"));
}

#[test]
fn garbage_file_is_fatal() {
    assert!(parse_model_str("not json").is_err());
    assert!(parse_model_str("{\"learner\": {}}").is_err());
}

#[test]
fn schema_check_compares_names_in_order() {
    let model = parse_model_str(MODEL).unwrap();
    let mut names: Vec<String> = model.feature_names.clone().unwrap();
    assert!(model.check_schema(&names).is_ok());

    names.swap(4, 5);
    let err = model.check_schema(&names).unwrap_err();
    assert!(err.to_string().contains("feature 4"));

    names.pop();
    assert!(model.check_schema(&names).is_err());
}
