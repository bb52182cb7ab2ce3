use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("malformed ratings CSV: {0}")]
    Malformed(String),
    #[error("reading ratings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Table `unité -> note`, chargée une fois puis partagée en lecture seule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingTable {
    ratings: HashMap<String, String>,
}

impl RatingTable {
    /// CSV sans en-tête, deux colonnes `unit,rating`. Un doublon écrase le précédent.
    ///
    /// Les deux champs sont débarrassés des espaces en bordure (`ER, 3 ` -> `ER`/`3`).
    pub fn from_csv(bytes: &[u8]) -> Result<Self, RatingError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);
        let mut ratings = HashMap::new();
        for (idx, rec) in rdr.records().enumerate() {
            let rec = rec.map_err(|e| RatingError::Malformed(e.to_string()))?;
            if rec.len() != 2 {
                return Err(RatingError::Malformed(format!(
                    "line {}: expected 2 columns, found {}",
                    idx + 1,
                    rec.len()
                )));
            }
            let unit = rec[0].trim();
            if unit.is_empty() {
                return Err(RatingError::Malformed(format!(
                    "line {}: empty unit name",
                    idx + 1
                )));
            }
            ratings.insert(unit.to_string(), rec[1].trim().to_string());
        }
        Ok(Self { ratings })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RatingError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| RatingError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_csv(&data)
    }

    pub fn get(&self, unit: &str) -> Option<&str> {
        self.ratings.get(unit).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}
