mod time;
mod types;
mod util;

pub use types::{ParseError, ParseOptions, DEFAULT_CONFIRMED_MARKER};

use crate::model::{RawShift, Shift};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use tracing::{debug, warn};

/// ShiftParser : normalise les lignes brutes dans un fuseau donné.
#[derive(Debug, Clone)]
pub struct ShiftParser<Tz: TimeZone> {
    tz: Tz,
    opts: ParseOptions,
}

impl<Tz: TimeZone> ShiftParser<Tz> {
    pub fn new(tz: Tz, opts: ParseOptions) -> Self {
        Self { tz, opts }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.opts
    }

    /// Résout, filtre, puis normalise. Tout ou rien : le premier
    /// enregistrement illisible interrompt le lot ; les lignes écartées par
    /// le filtre ne sont jamais examinées plus loin.
    pub fn parse(
        &self,
        records: &[RawShift],
        now: DateTime<Utc>,
    ) -> Result<Vec<Shift>, ParseError> {
        let year = now.with_timezone(&self.tz).year();
        let mut out = Vec::with_capacity(records.len());
        for raw in records {
            if let Some(shift) = self.normalize(raw, year, now)? {
                out.push(shift);
            }
        }
        Ok(out)
    }

    fn normalize(
        &self,
        raw: &RawShift,
        year: i32,
        now: DateTime<Utc>,
    ) -> Result<Option<Shift>, ParseError> {
        let date_err = |reason: String| ParseError::DateParse {
            record: Box::new(raw.clone()),
            reason,
        };
        let start = time::resolve(&raw.date, &raw.starttime, year, &self.tz).map_err(date_err)?;
        let end = time::resolve(&raw.date, &raw.endtime, year, &self.tz).map_err(date_err)?;
        let end = time::roll_overnight(start, end);

        if !util::qualifies(end, &raw.status, now, &self.opts) {
            debug!(record = %raw, "shift skipped (past or not confirmed)");
            return Ok(None);
        }

        let unit = util::bare_unit(&raw.unit).ok_or_else(|| ParseError::MalformedUnit {
            record: Box::new(raw.clone()),
        })?;

        // ex. 07:00 -> 07:00 : même heure, pas de report
        let shift = match Shift::new(
            raw.symbol.trim().to_string(),
            start,
            end,
            raw.status.clone(),
            unit.to_string(),
        ) {
            Ok(shift) => shift,
            Err(_) => {
                warn!(record = %raw, "shift skipped (end not after start)");
                return Ok(None);
            }
        };
        debug!(unit = %shift.unit, minutes = shift.duration_minutes(), "shift normalized");
        Ok(Some(shift))
    }
}

/// Raccourci sans construire de `ShiftParser`.
pub fn parse_shifts<Tz: TimeZone>(
    records: &[RawShift],
    now: DateTime<Utc>,
    tz: Tz,
    opts: ParseOptions,
) -> Result<Vec<Shift>, ParseError> {
    ShiftParser::new(tz, opts).parse(records, now)
}
