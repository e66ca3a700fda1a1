//! `insight` - review polarity and categorization pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use commands::{
    cmd_analyze, cmd_categorize, cmd_course, cmd_courses, cmd_import, cmd_report, cmd_show,
    cmd_stats, cmd_subject, Context,
};

#[derive(Parser)]
#[command(name = "insight", version)]
#[command(about = "Polarity and lexicon analysis of student reviews")]
#[command(after_help = "\
QUICK START:
  insight import --file reviews.json    # Load reviews into the store
  insight analyze                       # Analyze everything pending
  insight stats                         # Show outstanding work

A missing or non-positive --limit processes every pending review.")]
struct Cli {
    /// Configuration file (TOML). Defaults apply when omitted.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze all pending reviews
    Analyze {
        /// Maximum reviews to process
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
        /// Pending reviews to skip first
        #[arg(long, default_value = "0")]
        skip: usize,
        /// Texts per classifier batch (default: pipeline.batch_size)
        #[arg(long)]
        batch_size: Option<usize>,
    },
    /// Analyze pending reviews of one teacher
    Subject {
        /// Teacher identifier
        #[arg(long)]
        id: i64,
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
        #[arg(long)]
        batch_size: Option<usize>,
    },
    /// Analyze pending reviews whose course name contains NAME (any case)
    Course {
        /// Course name fragment
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
        #[arg(long)]
        batch_size: Option<usize>,
    },
    /// Fill in lexicon categorization for reviews that lack it
    Categorize {
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
        /// Reviews per page (default: pipeline.backfill_batch_size)
        #[arg(long)]
        batch_size: Option<usize>,
    },
    /// Show one review with its stored results
    Show {
        /// Review identifier
        #[arg(long)]
        id: String,
    },
    /// Coverage and label distribution for one teacher or course
    Report {
        /// Teacher identifier
        #[arg(long, conflicts_with = "course", required_unless_present = "course")]
        subject: Option<i64>,
        /// Course name fragment (any case)
        #[arg(long)]
        course: Option<String>,
    },
    /// List courses by number of reviews
    Courses {
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Load reviews from a JSON array file
    Import {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },
    /// Show pending counts and scorer versions
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::load(cli.config.as_deref(), cli.json)?;
    tracing_setup::init_tracing(&ctx.config.observability);

    match cli.command {
        Commands::Analyze {
            limit,
            skip,
            batch_size,
        } => cmd_analyze(&ctx, limit, skip, batch_size),
        Commands::Subject {
            id,
            limit,
            batch_size,
        } => cmd_subject(&ctx, id, limit, batch_size),
        Commands::Course {
            name,
            limit,
            batch_size,
        } => cmd_course(&ctx, &name, limit, batch_size),
        Commands::Categorize { limit, batch_size } => cmd_categorize(&ctx, limit, batch_size),
        Commands::Show { id } => cmd_show(&ctx, &id),
        Commands::Report { subject, course } => cmd_report(&ctx, subject, course),
        Commands::Courses { limit } => cmd_courses(&ctx, limit),
        Commands::Import { file } => cmd_import(&ctx, &file),
        Commands::Stats => cmd_stats(&ctx),
    }
}
