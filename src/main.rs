use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod allocate;
mod error;
mod export;
mod import;
mod models;
mod report;
mod score;
mod session;
mod teachers;

use allocate::{AllocationConfig, DEFAULT_THRESHOLD};
use session::{SessionStore, DEFAULT_SCHOOL_NAME};

#[derive(Parser)]
#[command(name = "efficiency-mapper")]
#[command(about = "Class performance scoring and teacher allocation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the predictive score for one grade distribution
    Score {
        #[arg(long)]
        a: i64,
        #[arg(long)]
        b: i64,
        #[arg(long)]
        c: i64,
        #[arg(long)]
        d: i64,
    },
    /// Match every performance record to its best-available teacher
    Allocate {
        #[arg(long)]
        performance: PathBuf,
        #[arg(long)]
        teachers: PathBuf,
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
        /// Print the full allocation list as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Write a markdown report plus per-tier CSV exports
    Report {
        #[arg(long)]
        performance: PathBuf,
        #[arg(long)]
        teachers: PathBuf,
        #[arg(long)]
        classes: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
        #[arg(long, default_value = DEFAULT_SCHOOL_NAME)]
        school_name: String,
        #[arg(long, default_value = "reports")]
        out: PathBuf,
    },
    /// Show the allocations assigned to one teacher
    TeacherReport {
        #[arg(long)]
        performance: PathBuf,
        #[arg(long)]
        teachers: PathBuf,
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
    },
}

fn load_session(
    school_name: &str,
    performance: &PathBuf,
    teachers: &PathBuf,
    classes: Option<&PathBuf>,
) -> anyhow::Result<SessionStore> {
    let mut store = SessionStore::new(school_name);
    store.performance = import::read_performance_csv(performance)?;
    store.teachers = import::read_teachers_csv(teachers)?;
    if let Some(classes) = classes {
        store.roster = import::read_classes_csv(classes)?;
    }
    Ok(store)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score { a, b, c, d } => {
            let score = score::predictive_score(a, b, c, d)?;
            println!("Predictive score: {score:.2}");
        }
        Commands::Allocate {
            performance,
            teachers,
            threshold,
            json,
        } => {
            let mut store = load_session(DEFAULT_SCHOOL_NAME, &performance, &teachers, None)?;
            let config = AllocationConfig::with_threshold(threshold);
            store.recompute_allocations(&config);

            if json {
                println!("{}", serde_json::to_string_pretty(&store.allocations)?);
                return Ok(());
            }

            if store.allocations.is_empty() {
                println!("No performance records to allocate.");
                return Ok(());
            }

            let tiers = report::partition(&store.allocations);
            for (status, records) in &tiers {
                println!("{status} ({}):", records.len());
                for record in records {
                    println!(
                        "- {} / {}: {} (score {:.2})",
                        record.class_id, record.subject, record.teacher_name, record.current_score
                    );
                }
            }
        }
        Commands::Report {
            performance,
            teachers,
            classes,
            threshold,
            school_name,
            out,
        } => {
            let mut store =
                load_session(&school_name, &performance, &teachers, classes.as_ref())?;
            let config = AllocationConfig::with_threshold(threshold);
            store.recompute_allocations(&config);

            let roster = (!store.roster.is_empty()).then_some(&store.roster);
            let summary = report::build_report(
                &store.school_name,
                threshold,
                roster,
                &store.allocations,
            );

            std::fs::create_dir_all(&out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            let summary_path = out.join("report.md");
            std::fs::write(&summary_path, summary)?;

            let tiers = report::partition(&store.allocations);
            let written = export::write_tier_csvs(&tiers, &out)?;

            println!("Report written to {}.", summary_path.display());
            for file_name in written {
                println!("- {}", out.join(file_name).display());
            }
        }
        Commands::TeacherReport {
            performance,
            teachers,
            name,
            threshold,
        } => {
            let mut store = load_session(DEFAULT_SCHOOL_NAME, &performance, &teachers, None)?;
            let config = AllocationConfig::with_threshold(threshold);
            store.recompute_allocations(&config);

            let assigned = report::allocations_for_teacher(&store.allocations, &name);
            if assigned.is_empty() {
                println!("No allocations found for {name}. Run allocate with matching data first.");
                return Ok(());
            }

            println!("Allocations for {name}:");
            for record in assigned {
                println!(
                    "- {} / {}: score {:.2} ({})",
                    record.class_id, record.subject, record.current_score, record.status
                );
            }
        }
    }

    Ok(())
}
