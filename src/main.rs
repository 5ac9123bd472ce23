//! College Predictor - command line front end.
//!
//! Loads a catalog export, runs one ranked query or a browse listing, and
//! prints the result as text or JSON.
//!
//! ```bash
//! college-predictor --catalog colleges.json --rank 4800 \
//!     --branch "Computer Science and Engineering" --location Mumbai
//!
//! college-predictor --catalog colleges.json --browse --search "government"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use college_predictor::engine::{BrowseFilter, EngineConfig, MatchResult, MatchingEngine};
use college_predictor::normalize::NormalizerTables;
use college_predictor::types::score::format_score;
use college_predictor::types::{Catalog, CollegeRecord, FilterCriteria, QueryMode};

#[derive(Debug, Parser)]
#[command(name = "college-predictor", version, about = "Rank colleges by how close their cutoffs are to a student's result")]
struct Cli {
    /// Catalog export (JSON array or object of records)
    #[arg(long, value_name = "FILE")]
    catalog: PathBuf,

    /// Student's exam rank
    #[arg(long, conflicts_with = "score")]
    rank: Option<String>,

    /// Student's percentage, e.g. 89.5 or 89.5%
    #[arg(long)]
    score: Option<String>,

    #[arg(long)]
    branch: Option<String>,

    /// City or district cluster (e.g. Mumbai)
    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    main_category: Option<String>,

    #[arg(long)]
    sub_category: Option<String>,

    /// Maximum colleges to show; 0 shows all
    #[arg(long)]
    limit: Option<usize>,

    /// Normalizer tables JSON, overriding the bundled ones
    #[arg(long, value_name = "FILE")]
    tables: Option<PathBuf>,

    /// Engine config JSON
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List deduplicated colleges instead of ranking
    #[arg(long)]
    browse: bool,

    /// Browse: college name substring
    #[arg(long, requires = "browse")]
    search: Option<String>,

    /// Browse: exact city
    #[arg(long, requires = "browse")]
    city: Option<String>,

    /// Browse: exact status
    #[arg(long, requires = "browse")]
    status: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let engine = build_engine(&cli)?;
    let catalog = load_catalog(&cli.catalog)?;
    info!(
        records = catalog.len(),
        fingerprint = %catalog.fingerprint_hex(),
        "catalog loaded"
    );

    if cli.browse {
        let filter = BrowseFilter::new()
            .with_search(cli.search.clone().unwrap_or_default())
            .with_city(cli.city.clone().unwrap_or_default())
            .with_status(cli.status.clone().unwrap_or_default());
        let listing = engine.browse(&catalog, &filter);
        if cli.json {
            let records: Vec<&CollegeRecord> = listing.iter().map(|(_, record)| *record).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            for (index, record) in &listing {
                println!("{index:>6}  {}  ({}, {})", record.college_name, record.city, record.status);
            }
            println!("{} colleges", listing.len());
        }
        return Ok(());
    }

    let criteria = build_criteria(&cli)?;
    let result = engine.query(&catalog, &criteria);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_engine(cli: &Cli) -> Result<MatchingEngine> {
    let tables = match &cli.tables {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            NormalizerTables::from_json_str(&json).with_context(|| format!("loading tables {}", path.display()))?
        }
        None => NormalizerTables::builtin(),
    };

    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            EngineConfig::from_json_str(&json).with_context(|| format!("loading config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(limit) = cli.limit {
        config = config.with_result_limit(limit);
    }

    Ok(MatchingEngine::new(tables, config))
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Catalog::from_json_str(&json).with_context(|| format!("decoding catalog {}", path.display()))
}

fn build_criteria(cli: &Cli) -> Result<FilterCriteria> {
    let criteria = match (&cli.rank, &cli.score) {
        (Some(rank), None) => FilterCriteria::parse_target(QueryMode::ByRank, rank)?,
        (None, Some(score)) => FilterCriteria::parse_target(QueryMode::ByScore, score)?,
        (None, None) => FilterCriteria::new(QueryMode::ByScore),
        (Some(_), Some(_)) => bail!("--rank and --score are mutually exclusive"),
    };
    Ok(criteria
        .with_branch(cli.branch.clone().unwrap_or_default())
        .with_location(cli.location.clone().unwrap_or_default())
        .with_main_category(cli.main_category.clone().unwrap_or_default())
        .with_sub_category(cli.sub_category.clone().unwrap_or_default()))
}

fn print_result(result: &MatchResult<'_>) {
    let show = |value: Option<Decimal>| match (value, result.mode) {
        (None, _) => "-".to_string(),
        (Some(v), QueryMode::ByScore) => format_score(v),
        (Some(v), QueryMode::ByRank) => v.to_string(),
    };

    println!(
        "{} matches by {} (target {}), showing {}",
        result.total_matched,
        result.mode.label(),
        show(result.target),
        result.len()
    );
    for (position, college) in result.colleges.iter().enumerate() {
        let record = college.record;
        println!(
            "{:>3}. {}  |  {}  |  {}  |  cutoff {}",
            position + 1,
            record.college_name,
            record.course_name,
            record.city,
            show(college.reference)
        );
        for cutoff in &college.cutoffs {
            let rank = cutoff.rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string());
            let score = cutoff.score.map(format_score).unwrap_or_else(|| "-".to_string());
            println!("       {:<10} rank {:>7}  score {:>8}", cutoff.category, rank, score);
        }
    }
}
