// 🔢 Numerology CLI
// Calculate numbers, full readings and CSV batches from the command line

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use numerology_engine::{
    batch, formula, letter_map_explanation, Birthdate, Config, ForecastCycles, InsightType,
    LanguageCode, Reading,
};

#[derive(Parser, Debug)]
#[command(name = "numerology")]
#[command(about = "Pythagorean numerology calculator", version)]
struct Args {
    /// JSON config file (environment variables still override it)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Life Path, Attitude, Generation and Day of Birth for a birthdate
    LifePath {
        /// YYYY-MM-DD
        birthdate: String,
    },
    /// Expression, Soul Urge and Personality for a name
    Name { name: String },
    /// Personal Day, Month and Year cycles
    Forecast {
        birthdate: String,
        /// Target date (defaults to today)
        #[arg(long)]
        on: Option<NaiveDate>,
    },
    /// Full reading with meanings, as JSON
    Reading {
        #[arg(long)]
        birthdate: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        on: Option<NaiveDate>,
        #[arg(long)]
        lang: Option<String>,
    },
    /// Every meaning of one number type
    Meanings {
        /// e.g. life-path, soul-urge, personal-year
        kind: InsightType,
        #[arg(long)]
        lang: Option<String>,
    },
    /// Readings for every row of a name,birthdate CSV, written to stdout
    Batch { csv: PathBuf },
    /// Letter-to-number chart
    Letters,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        env::var("NUMEROLOGY_LOG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Level::WARN)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => Config::from_file(path)?.with_env(),
        None => Config::from_env(),
    };

    match args.command {
        Command::LifePath { birthdate } => run_life_path(&birthdate),
        Command::Name { name } => run_name(&name),
        Command::Forecast { birthdate, on } => run_forecast(&birthdate, on),
        Command::Reading { birthdate, name, on, lang } => {
            run_reading(&config, birthdate.as_deref(), name.as_deref(), on, lang.as_deref())
        }
        Command::Meanings { kind, lang } => run_meanings(&config, kind, lang.as_deref()),
        Command::Batch { csv } => run_batch(&csv),
        Command::Letters => {
            println!("{}", letter_map_explanation());
            Ok(())
        }
    }
}

fn language(config: &Config, lang: Option<&str>) -> LanguageCode {
    lang.map(LanguageCode::parse_or_default)
        .unwrap_or(config.default_language)
}

fn run_life_path(input: &str) -> Result<()> {
    let date = Birthdate::parse(input)?;

    println!("🎂 Birthdate: {}", date);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Life Path:    {:>2}   {}", numerology_engine::life_path(&date)?, formula::life_path(&date)?);
    println!("Attitude:     {:>2}   {}", numerology_engine::attitude(&date)?, formula::attitude(&date)?);
    println!("Generation:   {:>2}   {}", numerology_engine::generation(&date)?, formula::generation(&date));
    println!("Day of Birth: {:>2}   {}", numerology_engine::day_of_birth(&date), formula::day_of_birth(&date));
    Ok(())
}

fn run_name(name: &str) -> Result<()> {
    println!("✍️  Name: {}", name);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Expression:  {:>2}   {}", numerology_engine::expression(name)?, formula::expression(name)?);
    println!("Soul Urge:   {:>2}   {}", numerology_engine::soul_urge(name)?, formula::soul_urge(name)?);
    println!("Personality: {:>2}   {}", numerology_engine::personality(name)?, formula::personality(name)?);
    Ok(())
}

fn run_forecast(input: &str, on: Option<NaiveDate>) -> Result<()> {
    let date = Birthdate::parse(input)?;
    let target = on.unwrap_or_else(|| Local::now().date_naive());
    let cycles = ForecastCycles::for_date(&date, target)?;

    println!("📅 Forecast for {} on {}", date, target);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Personal Day:   {:>2}   {}", cycles.personal_day, formula::personal_day(&date, target)?);
    println!("Personal Month: {:>2}   {}", cycles.personal_month, formula::personal_month(&date, target)?);
    println!("Personal Year:  {:>2}   {}", cycles.personal_year, formula::personal_year(&date, target)?);
    Ok(())
}

fn run_reading(
    config: &Config,
    birthdate: Option<&str>,
    name: Option<&str>,
    on: Option<NaiveDate>,
    lang: Option<&str>,
) -> Result<()> {
    let target = on.unwrap_or_else(|| Local::now().date_naive());
    let reading = Reading::calculate(birthdate, name, target)?;

    let resolver = config.build_resolver();
    let insights = reading.insights(&resolver, language(config, lang));
    println!("{}", serde_json::to_string_pretty(&insights)?);
    Ok(())
}

fn run_meanings(config: &Config, kind: InsightType, lang: Option<&str>) -> Result<()> {
    let resolver = config.build_resolver();
    let language = language(config, lang);

    println!("📖 {} meanings ({})", kind.label(), language.name());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    for (number, meaning) in resolver.all_meanings(kind, language) {
        println!("\n{:>2}. {}", number, meaning.title);
        println!("    {}", meaning.description);
    }
    Ok(())
}

fn run_batch(path: &PathBuf) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open CSV file: {:?}", path))?;
    let target = Local::now().date_naive();

    let summary = batch::run(file, io::stdout().lock(), target)?;

    eprintln!(
        "✓ Processed {} rows ({} ok, {} failed)",
        summary.processed,
        summary.succeeded(),
        summary.failed
    );
    Ok(())
}
