mod labels;

pub use labels::ShiftLabels;

use crate::model::{EventUid, Shift};
use crate::ratings::RatingTable;
use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, Event, EventLike, Property};
use tracing::warn;

/// Lieu par défaut des événements.
pub const DEFAULT_LOCATION: &str = "Hospital";

/// Format UTC « basique » RFC 5545 pour CREATED / LAST-MODIFIED.
const ICAL_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Résultat de la construction : le calendrier et les unités sans note.
#[derive(Debug)]
pub struct CalendarOutput {
    pub calendar: Calendar,
    pub uids: Vec<EventUid>,
    pub missing_ratings: Vec<String>,
}

impl CalendarOutput {
    pub fn event_count(&self) -> usize {
        self.uids.len()
    }

    /// Sérialisation iCalendar (CRLF).
    pub fn render(&self) -> String {
        self.calendar.to_string()
    }
}

/// Construit un événement par shift, dans l'ordre d'entrée.
#[derive(Debug, Clone)]
pub struct CalendarBuilder {
    labels: ShiftLabels,
    location: String,
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        Self::new(ShiftLabels::default(), DEFAULT_LOCATION)
    }
}

impl CalendarBuilder {
    pub fn new<L: Into<String>>(labels: ShiftLabels, location: L) -> Self {
        Self {
            labels,
            location: location.into(),
        }
    }

    /// `"<libellé> at <unité>"`
    pub fn summary(&self, shift: &Shift) -> String {
        format!("{} at {}", self.labels.label(&shift.symbol), shift.unit)
    }

    /// `ratings = None` : table indisponible, aucune description.
    pub fn build(
        &self,
        shifts: &[Shift],
        ratings: Option<&RatingTable>,
        now: DateTime<Utc>,
    ) -> CalendarOutput {
        let mut calendar = Calendar::new();
        calendar.append_property(Property::new("METHOD", "ADD"));

        let stamp = now.format(ICAL_UTC_FORMAT).to_string();
        let mut uids = Vec::with_capacity(shifts.len());
        let mut missing_ratings: Vec<String> = Vec::new();

        for shift in shifts {
            let uid = EventUid::for_shift(shift);
            let mut event = Event::new();
            event
                .uid(uid.as_str())
                .timestamp(now)
                .add_property("CREATED", stamp.as_str())
                .add_property("LAST-MODIFIED", stamp.as_str())
                .starts(shift.start.with_timezone(&Utc))
                .ends(shift.end.with_timezone(&Utc))
                .summary(&self.summary(shift))
                .location(&self.location);

            if let Some(table) = ratings {
                match table.get(&shift.unit) {
                    Some(rating) => {
                        event.description(&format!("Bebe's rating: {rating}"));
                    }
                    None => {
                        if !missing_ratings.contains(&shift.unit) {
                            warn!(unit = %shift.unit, "no rating for unit");
                            missing_ratings.push(shift.unit.clone());
                        }
                    }
                }
            }

            calendar.push(event.done());
            uids.push(uid);
        }

        CalendarOutput {
            calendar: calendar.done(),
            uids,
            missing_ratings,
        }
    }
}
