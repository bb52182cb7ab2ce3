use crate::calendar::{CalendarBuilder, CalendarOutput, ShiftLabels, DEFAULT_LOCATION};
use crate::io;
use crate::locate::{InputLocator, LocateError};
use crate::parser::{ParseError, ParseOptions, ShiftParser};
use crate::ratings::{RatingError, RatingTable};
use crate::storage::CalendarSink;
use anyhow::Context;
use chrono::{DateTime, TimeZone, Utc};
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("malformed input JSON: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error("reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Origine de la table de notes.
#[derive(Debug, Clone)]
pub enum RatingSource {
    /// CSV embarqué ou fourni en mémoire.
    Bytes(Cow<'static, [u8]>),
    /// CSV sur disque (`--ratings`).
    File(PathBuf),
}

impl RatingSource {
    pub fn load(&self) -> Result<RatingTable, RatingError> {
        match self {
            RatingSource::Bytes(bytes) => RatingTable::from_csv(bytes),
            RatingSource::File(path) => RatingTable::from_path(path),
        }
    }
}

/// Entrées explicites du pipeline (aucun état global).
#[derive(Debug, Clone)]
pub struct PipelineConfig<Tz: TimeZone> {
    pub ratings: Option<RatingSource>,
    pub tz: Tz,
    pub parse: ParseOptions,
    pub labels: ShiftLabels,
    pub location: String,
}

impl<Tz: TimeZone> PipelineConfig<Tz> {
    pub fn new(tz: Tz) -> Self {
        Self {
            ratings: None,
            tz,
            parse: ParseOptions::default(),
            labels: ShiftLabels::default(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }

    pub fn with_ratings(mut self, source: RatingSource) -> Self {
        self.ratings = Some(source);
        self
    }
}

/// Conversion en mémoire, avant toute écriture.
#[derive(Debug)]
pub struct Conversion {
    pub output: CalendarOutput,
    pub total_records: usize,
    pub ratings_loaded: bool,
}

impl Conversion {
    /// Enregistrements écartés (passés ou non confirmés).
    pub fn dropped(&self) -> usize {
        self.total_records - self.output.event_count()
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub input: PathBuf,
    pub target: String,
    pub events_written: usize,
    pub dropped: usize,
    pub ratings_loaded: bool,
    pub missing_ratings: Vec<String>,
}

/// Pipeline : notes -> lecture JSON -> normalisation -> calendrier -> écriture.
pub struct Pipeline<Tz: TimeZone> {
    ratings: Option<RatingSource>,
    parser: ShiftParser<Tz>,
    builder: CalendarBuilder,
}

impl<Tz: TimeZone> Pipeline<Tz> {
    pub fn new(config: PipelineConfig<Tz>) -> Self {
        Self {
            ratings: config.ratings,
            parser: ShiftParser::new(config.tz, config.parse),
            builder: CalendarBuilder::new(config.labels, config.location),
        }
    }

    /// Une table absente ou invalide dégrade l'enrichissement sans interrompre
    /// la conversion (un seul avertissement).
    pub fn load_ratings(&self) -> Option<RatingTable> {
        let Some(source) = &self.ratings else {
            warn!("no rating table configured; descriptions omitted");
            return None;
        };
        match source.load() {
            Ok(table) => {
                info!(units = table.len(), "ratings loaded");
                Some(table)
            }
            Err(e) => {
                warn!(error = %e, "ratings unavailable; descriptions omitted");
                None
            }
        }
    }

    /// Conversion pure : n'écrit rien.
    pub fn convert<R: Read>(
        &self,
        input: R,
        now: DateTime<Utc>,
    ) -> Result<Conversion, PipelineError> {
        let ratings = self.load_ratings();
        let raw = io::read_shifts_json(input)?;
        let shifts = self.parser.parse(&raw, now)?;
        let output = self.builder.build(&shifts, ratings.as_ref(), now);
        Ok(Conversion {
            output,
            total_records: raw.len(),
            ratings_loaded: ratings.is_some(),
        })
    }

    /// Localise l'export, convertit, puis écrit le document complet.
    pub fn run(
        &self,
        locator: &dyn InputLocator,
        sink: &dyn CalendarSink,
        now: DateTime<Utc>,
    ) -> Result<RunReport, PipelineError> {
        let path = locator.locate()?;
        info!(path = %path.display(), "reading JSON");
        let file = File::open(&path).map_err(|source| PipelineError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let conversion = self.convert(file, now)?;
        let target = sink.describe();
        sink.write(&conversion.output.render())
            .with_context(|| format!("writing calendar to {target}"))?;

        info!(
            events = conversion.output.event_count(),
            dropped = conversion.dropped(),
            target = %target,
            "calendar written"
        );
        Ok(RunReport {
            input: path,
            target,
            events_written: conversion.output.event_count(),
            dropped: conversion.dropped(),
            ratings_loaded: conversion.ratings_loaded,
            missing_ratings: conversion.output.missing_ratings,
        })
    }
}
