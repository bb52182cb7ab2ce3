use crate::model::RawShift;
use thiserror::Error;

/// Marqueur de statut par défaut : le shift est confirmé.
pub const DEFAULT_CONFIRMED_MARKER: &str = "Relieved";

/// Options de normalisation
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Sous-chaîne (sensible à la casse) exigée dans `status`.
    pub confirmed_marker: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            confirmed_marker: DEFAULT_CONFIRMED_MARKER.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid date/time in record `{record}`: {reason}")]
    DateParse {
        record: Box<RawShift>,
        reason: String,
    },
    #[error("malformed unit in record `{record}`: expected <facility>-<unit>")]
    MalformedUnit { record: Box<RawShift> },
}

impl ParseError {
    /// Enregistrement fautif, pour le diagnostic.
    pub fn record(&self) -> &RawShift {
        match self {
            ParseError::DateParse { record, .. } | ParseError::MalformedUnit { record } => record,
        }
    }
}
