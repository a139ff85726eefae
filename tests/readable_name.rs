use ttc_delay_risk::features::{readable_name, title_case};

#[test]
fn line_columns_are_retitled() {
    assert_eq!(readable_name("line_YU"), "Line Yu");
    assert_eq!(readable_name("line_SHP"), "Line Shp");
}

#[test]
fn cause_category_prefix_is_shortened() {
    assert_eq!(readable_name("cause_category_Mechanical"), "Cause Mechanical");
    assert_eq!(readable_name("cause_category_signal_fault"), "Cause Signal Fault");
}

#[test]
fn base_features_are_title_cased() {
    assert_eq!(readable_name("is_peak"), "Is Peak");
    assert_eq!(readable_name("is_weekend"), "Is Weekend");
    assert_eq!(readable_name("day_of_week"), "Day Of Week");
    assert_eq!(readable_name("hour"), "Hour");
}

#[test]
fn title_case_restarts_after_non_letters() {
    assert_eq!(title_case("abc1def"), "Abc1Def");
    assert_eq!(title_case("o'neil"), "O'Neil");
    assert_eq!(title_case("ALL CAPS"), "All Caps");
    assert_eq!(title_case(""), "");
}
