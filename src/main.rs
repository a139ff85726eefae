use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use ttc_delay_risk::cli::{Cli, Commands, LinesArgs, ValidateArgs};
use ttc_delay_risk::ctx::Ctx;
use ttc_delay_risk::features::{FeatureSchema, Selection};
use ttc_delay_risk::io;
use ttc_delay_risk::pipeline::Pipeline;
use ttc_delay_risk::pipeline::stage1_load::Stage1Load;
use ttc_delay_risk::pipeline::stage2_schema::Stage2Schema;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict(args) => {
            let mut ctx = Ctx::new(
                args.model,
                args.data,
                args.out,
                args.json,
                args.tsv,
                args.geojson,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.selection = Some(Selection {
                line: args.line.unwrap_or_default(),
                hour: args.hour,
                day: args.day.into(),
            });
            ctx.max_display = args.max_display as usize;

            Pipeline::predict().run(&mut ctx)?;

            print_summary(&ctx)?;
        }
        Commands::Lines(args) => handle_lines(args)?,
        Commands::Validate(args) => handle_validate(args)?,
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn handle_lines(args: LinesArgs) -> Result<()> {
    let dataset = io::dataset::read_dataset(&args.data)?;
    let schema = FeatureSchema::from_headers(&dataset.headers)?;
    for line in schema.line_choices() {
        println!("{}", line);
    }
    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.model,
        args.data,
        PathBuf::from("."),
        false,
        false,
        false,
        env!("CARGO_PKG_VERSION"),
    );
    let pipeline = Pipeline::new(vec![Box::new(Stage1Load::new()), Box::new(Stage2Schema::new())]);
    pipeline.run(&mut ctx)?;

    let model = ctx.model.as_ref().context("model not loaded")?;
    let schema = ctx.schema.as_ref().context("feature schema missing")?;
    let dataset = ctx.dataset.as_ref().context("dataset not loaded")?;

    println!("ttc-delay-risk validate ok");
    println!("features: {}", schema.len());
    println!("trees: {}", model.num_trees());
    println!("rows: {}", dataset.rows);
    println!("lines: {}", ctx.line_choices.join(", "));
    if dataset.delay_reasons.is_none() {
        println!("delay_reason: absent");
    }
    Ok(())
}
