use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use lead_attribution::config::{Config, DataMode};
use lead_attribution::leads::{LeadQuery, SegmentFilter, SortBy, SourceFilter};
use lead_attribution::LeadQueryEngine;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 1;
const EXIT_NOT_FOUND: i32 = 2;
const EXIT_CONFIG: i32 = 4;

/// What real mode tells the user is missing
const SCORING_REQUIREMENT: &str = "Scoring engine deployment";

#[derive(Subcommand, Debug)]
enum Commands {
    /// List leads, filtered and sorted (default if no subcommand)
    List {
        /// Segment filter: all, hot, warm, cool (anything else means all)
        #[arg(long)]
        segment: Option<String>,

        /// Source filter: all, TV, Internet, Referral, Other, or a source name
        #[arg(long)]
        source: Option<String>,

        /// Sort order: score-desc, score-asc, newest, oldest
        #[arg(long)]
        sort: Option<SortBy>,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Show score breakdown, attribution and journey for one lead
    Show {
        /// Lead id, e.g. lead-001
        id: String,
    },
    /// Summary counters over all leads
    Metrics,
    /// List attribution windows, or classify an elapsed time
    Windows {
        /// Elapsed time since the spot, e.g. "12 min" or "2 hours"
        #[arg(long)]
        elapsed: Option<String>,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Write the built-in sample dataset as JSON
    Export {
        /// Destination file
        path: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Demo,
    Real,
}

impl From<ModeArg> for DataMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Demo => DataMode::Demo,
            ModeArg::Real => DataMode::Real,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lead-attribution")]
#[command(about = "TV attribution lead explorer", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lead-attribution/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// JSON dataset to use instead of the built-in sample
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Presentation mode (overrides config)
    #[arg(long, global = true, value_enum)]
    mode: Option<ModeArg>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "lead_attribution=debug"
    } else {
        "lead_attribution=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Everything the lead views need, loaded after config
struct Session {
    config: Config,
    mode: DataMode,
    engine: LeadQueryEngine,
}

/// Load config and dataset, exiting with the matching code on failure
fn load_session(config_path: Option<PathBuf>, data: Option<PathBuf>, mode: Option<ModeArg>) -> Session {
    let config = match lead_attribution::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    let mode: DataMode = mode.map(Into::into).unwrap_or(config.mode);

    let data_path = data.or_else(|| config.data_file.clone());
    let dataset = match lead_attribution::data::load_or_sample(data_path.as_deref()) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Dataset error: {:#}", e);
            std::process::exit(EXIT_DATA);
        }
    };
    if let Err(errors) = lead_attribution::data::validate_dataset(&dataset) {
        eprintln!("Dataset errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_DATA);
    }

    tracing::debug!(
        leads = dataset.leads.len(),
        home_dma = %config.home_dma,
        mode = ?mode,
        "Dataset ready"
    );

    let engine = LeadQueryEngine::new(dataset, config.home_dma.clone());
    Session {
        config,
        mode,
        engine,
    }
}

fn print_client_header(engine: &LeadQueryEngine, use_colors: bool) {
    println!(
        "{}",
        lead_attribution::output::format_client_header(
            &engine.dataset().client,
            engine.home_dma(),
            use_colors
        )
    );
    println!();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::List {
        segment: None,
        source: None,
        sort: None,
        tsv: false,
    });
    let start_time = Instant::now();
    let config_path = cli.config.map(PathBuf::from);
    let use_colors = lead_attribution::output::should_use_colors();

    match command {
        Commands::Init { force } => {
            match lead_attribution::config::write_default_config(config_path, force) {
                Ok(path) => println!("Wrote config to {}", path.display()),
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
        Commands::Export { path } => {
            let dataset = lead_attribution::data::sample_dataset();
            if let Err(e) = lead_attribution::data::save_dataset(&path, &dataset) {
                eprintln!("Export failed: {:#}", e);
                std::process::exit(EXIT_DATA);
            }
            println!(
                "Exported {} leads to {}",
                dataset.leads.len(),
                path.display()
            );
        }
        Commands::List {
            segment,
            source,
            sort,
            tsv,
        } => {
            let session = load_session(config_path, cli.data, cli.mode);
            let engine = &session.engine;

            if !session.mode.shows_lead_data() {
                print_client_header(engine, use_colors);
                println!(
                    "{}",
                    lead_attribution::output::format_real_leads_view(
                        &engine.dataset().journeys,
                        SCORING_REQUIREMENT,
                        use_colors
                    )
                );
                std::process::exit(EXIT_SUCCESS);
            }

            let defaults = session.config.list.to_query();
            let query = LeadQuery::new(
                segment
                    .as_deref()
                    .map(SegmentFilter::parse_lenient)
                    .unwrap_or(defaults.segment),
                source
                    .as_deref()
                    .map(SourceFilter::parse_lenient)
                    .unwrap_or(defaults.source),
                sort.unwrap_or(defaults.sort_by),
            );
            let result = engine.query(&query);

            if tsv {
                let output = lead_attribution::output::format_tsv(&result.leads);
                if !output.is_empty() {
                    println!("{}", output);
                }
            } else {
                print_client_header(engine, use_colors);
                println!(
                    "{}",
                    lead_attribution::output::format_query_summary(&result, &query)
                );
                println!();
                println!(
                    "{}",
                    lead_attribution::output::format_lead_table(&result, use_colors)
                );
            }
        }
        Commands::Show { id } => {
            let session = load_session(config_path, cli.data, cli.mode);
            let engine = &session.engine;

            if !session.mode.shows_lead_data() {
                println!(
                    "{}",
                    lead_attribution::output::format_locked("Lead detail", SCORING_REQUIREMENT)
                );
                std::process::exit(EXIT_SUCCESS);
            }

            let Some(detail) = engine.detail(&id) else {
                eprintln!("No lead with id '{}'.", id);
                let known: Vec<&str> = engine.leads().iter().map(|l| l.id.as_str()).collect();
                if !known.is_empty() {
                    eprintln!("Known ids: {}", known.join(", "));
                }
                std::process::exit(EXIT_NOT_FOUND);
            };
            println!(
                "{}",
                lead_attribution::output::format_lead_detail(&detail, use_colors)
            );
        }
        Commands::Metrics => {
            let session = load_session(config_path, cli.data, cli.mode);
            let engine = &session.engine;

            if !session.mode.shows_lead_data() {
                println!(
                    "{}",
                    lead_attribution::output::format_locked("Lead metrics", SCORING_REQUIREMENT)
                );
                std::process::exit(EXIT_SUCCESS);
            }

            match engine.metrics() {
                Ok(metrics) => {
                    print_client_header(engine, use_colors);
                    println!("{}", lead_attribution::output::format_metrics(&metrics));
                }
                Err(e) => {
                    eprintln!("Metrics unavailable: {}", e);
                    std::process::exit(EXIT_DATA);
                }
            }
        }
        Commands::Windows { elapsed } => {
            let session = load_session(config_path, cli.data, cli.mode);
            let windows = &session.engine.dataset().attribution_windows;
            match elapsed {
                None => println!("{}", lead_attribution::output::format_windows(windows)),
                Some(text) => {
                    let Some(duration) = lead_attribution::leads::parse_elapsed(&text) else {
                        eprintln!("Could not parse elapsed time '{}'. Try \"12 min\" or \"2 hours\".", text);
                        std::process::exit(EXIT_CONFIG);
                    };
                    match lead_attribution::scoring::classify_elapsed(duration, windows) {
                        Some(matched) => println!(
                            "{}: {}",
                            format_elapsed(duration),
                            lead_attribution::output::format_window_match(&matched)
                        ),
                        None => println!(
                            "{}: outside every attribution window",
                            format_elapsed(duration)
                        ),
                    }
                }
            }
        }
    }

    if cli.verbose {
        eprintln!();
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}

fn format_elapsed(duration: Duration) -> String {
    humantime::format_duration(duration).to_string()
}
