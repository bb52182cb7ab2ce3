use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ligne brute de l'export du site de planning (une ligne du tableau HTML).
///
/// Le champ `date` n'a pas d'année (`"Mon Jan 02"`), les heures sont `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShift {
    pub date: String,
    pub starttime: String,
    pub endtime: String,
    #[serde(default)]
    pub paidhours: String,
    #[serde(default)]
    pub payreason: String,
    #[serde(default)]
    pub occ: String,
    /// `Booked Off` / `Relieved` ...
    pub status: String,
    pub symbol: String,
    /// `<établissement>-<unité>`
    pub unit: String,
}

impl fmt::Display for RawShift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} [{}] {} ({})",
            self.date, self.starttime, self.endtime, self.symbol, self.unit, self.status
        )
    }
}

/// Shift normalisé : horodatages absolus, unité sans préfixe d'établissement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub symbol: String,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub status: String,
    pub unit: String,
}

impl Shift {
    /// Crée un shift en validant que `end > start`.
    pub fn new(
        symbol: String,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        status: String,
        unit: String,
    ) -> Result<Self, String> {
        if end <= start {
            return Err("end must be strictly after start".to_string());
        }
        Ok(Self {
            symbol,
            start,
            end,
            status,
            unit,
        })
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Identifiant stable d'un événement : `<unité>-<début RFC3339>`.
///
/// Deux conversions du même export donnent le même UID, le calendrier
/// cible met donc à jour l'entrée existante au lieu de la dupliquer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventUid(String);

impl EventUid {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn for_shift(shift: &Shift) -> Self {
        Self(format!(
            "{}-{}",
            shift.unit,
            shift.start.to_rfc3339_opts(SecondsFormat::Secs, true)
        ))
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
