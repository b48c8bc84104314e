use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod aggregate;
mod assess;
mod charts;
mod contact;
mod dataset;
mod models;
mod report;

#[derive(Parser)]
#[command(name = "habit-survey-insights")]
#[command(about = "Aggregate habit survey data and score self-assessments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the JSON summary of the survey dataset
    Summary {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Write chart-ready series files for the dataset
    Charts {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "static/charts")]
        out: PathBuf,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Score a self-assessment and print the risk band
    Assess {
        #[arg(long)]
        alcohol: Option<String>,
        #[arg(long)]
        withdrawal: Option<String>,
        #[arg(long)]
        cigarettes: Option<String>,
        #[arg(long)]
        stress: Option<String>,
        #[arg(long)]
        sleep: Option<String>,
        #[arg(long)]
        support: Option<String>,
    },
    /// Record a contact message in the flat-file log
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "data/messages.csv")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { csv } => {
            let data = dataset::load_csv(&csv)?;
            let summary = aggregate::compute_summary(&data);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Charts { csv, out } => {
            let data = dataset::load_csv(&csv)?;
            let series = aggregate::compute_chart_series(&data);
            if series.is_empty() {
                println!("No chartable columns in this dataset.");
                return Ok(());
            }
            let written = charts::write_chart_files(&series, &out)?;
            for path in written {
                println!("Chart data written to {}.", path.display());
            }
        }
        Commands::Report { csv, out } => {
            let data = dataset::load_csv(&csv)?;
            let report = report::build_report(&data);
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
        Commands::Assess {
            alcohol,
            withdrawal,
            cigarettes,
            stress,
            sleep,
            support,
        } => {
            let answers = models::AnswerSet::from_raw(
                alcohol.as_deref(),
                withdrawal.as_deref(),
                cigarettes.as_deref(),
                stress.as_deref(),
                sleep.as_deref(),
                support.as_deref(),
            );
            let result = assess::score(&answers);
            println!("Score: {}", result.score);
            println!("{}: {}", result.band.label(), result.message);
        }
        Commands::Contact {
            name,
            email,
            message,
            out,
        } => {
            contact::append_message(&out, &name, &email, &message)?;
            println!("Message recorded in {}.", out.display());
        }
    }

    Ok(())
}
