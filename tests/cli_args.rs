use clap::Parser;
use ttc_delay_risk::cli::{Cli, Commands, DayArg};
use ttc_delay_risk::features::Weekday;

#[test]
fn predict_defaults_match_dashboard_controls() {
    let cli = Cli::parse_from(["ttc-delay-risk", "predict"]);
    match cli.command {
        Commands::Predict(args) => {
            assert_eq!(args.hour, 8);
            assert_eq!(args.day, DayArg::Monday);
            assert!(args.line.is_none());
            assert_eq!(args.model.to_str(), Some("model.json"));
            assert_eq!(args.data.to_str(), Some("ttc_final_dataset.csv"));
            assert_eq!(args.max_display, 10);
            assert!(!args.json && !args.tsv && !args.geojson);
        }
        _ => panic!("expected predict command"),
    }
}

#[test]
fn day_is_case_insensitive() {
    let cli = Cli::parse_from(["ttc-delay-risk", "predict", "--day", "Saturday"]);
    match cli.command {
        Commands::Predict(args) => assert_eq!(Weekday::from(args.day), Weekday::Saturday),
        _ => panic!("expected predict command"),
    }
}

#[test]
fn hour_out_of_range_is_rejected() {
    let res = Cli::try_parse_from(["ttc-delay-risk", "predict", "--hour", "24"]);
    assert!(res.is_err());
    let res = Cli::try_parse_from(["ttc-delay-risk", "predict", "--hour", "23"]);
    assert!(res.is_ok());
}

#[test]
fn unknown_day_is_rejected() {
    let res = Cli::try_parse_from(["ttc-delay-risk", "predict", "--day", "Funday"]);
    assert!(res.is_err());
}

#[test]
fn max_display_must_be_positive() {
    let res = Cli::try_parse_from(["ttc-delay-risk", "predict", "--max-display", "0"]);
    assert!(res.is_err());
}
