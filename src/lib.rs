#![forbid(unsafe_code)]
//! Bebe-ical : conversion d'un export de planning (JSON) en calendrier iCalendar.
//!
//! - Lecture du tableau JSON produit par le script de scraping.
//! - Dates sans année résolues dans le fuseau local ; passage de minuit.
//! - Filtrage des shifts confirmés et à venir.
//! - UID stable par shift : réimporter met à jour au lieu de dupliquer.
//! - Enrichissement par une table de notes d'unités (CSV).

pub mod browser;
pub mod calendar;
pub mod io;
pub mod locate;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod ratings;
pub mod storage;

pub use browser::{prepare_scrape, ScrapeAssist, SystemAssist};
pub use calendar::{CalendarBuilder, CalendarOutput, ShiftLabels};
pub use locate::{FixedPath, InputLocator, LocateError, NewestMatching};
pub use model::{EventUid, RawShift, Shift};
pub use parser::{parse_shifts, ParseError, ParseOptions, ShiftParser};
pub use pipeline::{Conversion, Pipeline, PipelineConfig, PipelineError, RatingSource, RunReport};
pub use ratings::{RatingError, RatingTable};
pub use storage::{CalendarSink, FileSink};
