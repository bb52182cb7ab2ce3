use super::ParseOptions;
use chrono::{DateTime, FixedOffset, Utc};

/// `HOSP-ICU` -> `ICU` (second composant).
pub(super) fn bare_unit(raw: &str) -> Option<&str> {
    raw.split('-').nth(1)
}

/// Fin strictement future et statut confirmé.
pub(super) fn qualifies(
    end: DateTime<FixedOffset>,
    status: &str,
    now: DateTime<Utc>,
    opts: &ParseOptions,
) -> bool {
    end > now && status.contains(opts.confirmed_marker.as_str())
}
