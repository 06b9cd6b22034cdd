use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use edumind_print::pipeline::export_batch;
use edumind_print::{BuildMode, BuildOptions, InputKind, PipelineBuilder, PipelineError};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "edumind-print")]
#[command(version)]
#[command(about = "Export quizzes and test papers as printable PDFs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export quiz JSON files as question papers and answer keys
    Quiz(ExportArgs),

    /// Export test paper JSON files as question papers and marking schemes
    Test(ExportArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Input JSON files
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// JSON layout overlay
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Export only the paper or only the key
    #[arg(long, value_enum)]
    only: Option<Only>,

    /// Issue date printed on quiz papers (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD")]
    date: Option<NaiveDate>,

    /// Also write each page plan as JSON next to its PDF
    #[arg(long, default_value_t = false)]
    dump_plan: bool,

    /// Worker threads for batch exports (0 = one per core)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Only {
    Paper,
    Key,
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let (kind, args) = match cli.command {
        Commands::Quiz(args) => (InputKind::Quiz, args),
        Commands::Test(args) => (InputKind::Test, args),
    };

    #[cfg(feature = "rayon-executor")]
    edumind_print::pipeline::configure_rayon_pool(args.threads);
    #[cfg(not(feature = "rayon-executor"))]
    if args.threads > 1 {
        log::warn!("--threads ignored: built without the rayon-executor feature");
    }

    let issued_on = args.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut builder = PipelineBuilder::new()
        .with_build_options(BuildOptions::default().issued_on(issued_on))
        .with_plan_dump(args.dump_plan);
    if let Some(config) = &args.config {
        builder = builder.with_config_file(config)?;
    }
    let pipeline = builder.build()?;

    let modes: &[BuildMode] = match args.only {
        Some(Only::Paper) => &[BuildMode::Paper],
        Some(Only::Key) => &[BuildMode::Key],
        None => &[BuildMode::Paper, BuildMode::Key],
    };

    fs::create_dir_all(&args.out_dir)?;
    let results = export_batch(&pipeline, kind, &args.inputs, modes, &args.out_dir);

    let mut first_error = None;
    for (input, result) in args.inputs.iter().zip(results) {
        match result {
            Ok(outcomes) => {
                for outcome in outcomes {
                    println!("✓ {} ({} page(s))", outcome.path.display(), outcome.page_count);
                    if let Some(plan_path) = outcome.plan_path {
                        println!("  plan: {}", plan_path.display());
                    }
                }
            }
            Err(e) => {
                log::error!("Failed to export '{}': {}", input.display(), e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
