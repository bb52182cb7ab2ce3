#![forbid(unsafe_code)]
use anyhow::Result;
use bebe_ical::{
    browser::{prepare_scrape, SystemAssist},
    calendar::DEFAULT_LOCATION,
    locate::{FixedPath, InputLocator, NewestMatching, DEFAULT_PATTERN},
    parser::DEFAULT_CONFIRMED_MARKER,
    pipeline::{Pipeline, PipelineConfig, RatingSource},
    storage::FileSink,
};
use chrono::{Local, Utc};
use clap::Parser;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

const BUNDLED_RATINGS: &[u8] = include_bytes!("../../assets/ratings.csv");
const SCRAPE_SCRIPT: &str = include_str!("../../assets/scrape.js");

/// Convertit l'export de planning (JSON) en calendrier iCalendar
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Ne pas ouvrir le navigateur
    #[arg(long)]
    skip: bool,

    /// Page de planning à ouvrir avant la conversion
    #[arg(long, env = "BEBE_SCHEDULE_URL")]
    schedule_url: Option<String>,

    /// Page d'import du calendrier (affichée à la fin)
    #[arg(long, env = "BEBE_EXPORT_URL")]
    export_url: Option<String>,

    /// Dossier où chercher le dernier export `jb*.json` (défaut : Téléchargements)
    #[arg(long, conflicts_with = "input")]
    downloads: Option<PathBuf>,

    /// Export JSON explicite
    #[arg(long)]
    input: Option<PathBuf>,

    /// Fichier iCalendar produit
    #[arg(long, default_value = "bebe.ical")]
    out: PathBuf,

    /// CSV `unit,rating` remplaçant la table embarquée
    #[arg(long)]
    ratings: Option<PathBuf>,

    /// Marqueur de statut d'un shift confirmé
    #[arg(long, default_value = DEFAULT_CONFIRMED_MARKER)]
    marker: String,

    /// Lieu des événements
    #[arg(long, default_value = DEFAULT_LOCATION)]
    location: String,

    /// Coupe les logs
    #[arg(long)]
    quiet: bool,
}

fn wait_for_enter() -> Result<()> {
    print!("Press enter to continue. ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if !cli.quiet {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    }

    match cli.schedule_url.as_deref() {
        None => info!("schedule URL is not defined"),
        Some(_) if cli.skip => {}
        Some(url) => {
            println!("Opening in browser...");
            prepare_scrape(&SystemAssist::default(), url, SCRAPE_SCRIPT)?;
            println!("Log in to the website and paste the JavaScript code into the console.");
            wait_for_enter()?;
        }
    }

    let ratings = match cli.ratings {
        Some(path) => RatingSource::File(path),
        None => RatingSource::Bytes(Cow::Borrowed(BUNDLED_RATINGS)),
    };
    let mut config = PipelineConfig::new(Local).with_ratings(ratings);
    config.parse.confirmed_marker = cli.marker;
    config.location = cli.location;
    let pipeline = Pipeline::new(config);

    let locator: Box<dyn InputLocator> = match (cli.input, cli.downloads) {
        (Some(path), _) => Box::new(FixedPath(path)),
        (None, Some(dir)) => Box::new(NewestMatching::new(dir, DEFAULT_PATTERN)?),
        (None, None) => Box::new(NewestMatching::in_downloads()?),
    };
    let sink = FileSink::new(&cli.out);

    let report = pipeline.run(locator.as_ref(), &sink, Utc::now())?;
    println!(
        "{} event(s) written to {} ({} skipped) from {}",
        report.events_written,
        report.target,
        report.dropped,
        report.input.display()
    );
    if !report.missing_ratings.is_empty() {
        eprintln!("No rating for: {}", report.missing_ratings.join(", "));
    }
    if let Some(url) = cli.export_url {
        println!("Import the calendar in {url}");
    }
    Ok(())
}
