use crate::model::RawShift;
use std::io::{BufReader, Read};

/// Décode le tableau JSON produit par le script de scraping.
///
/// Tout écart de structure (tableau tronqué, champ manquant) est une erreur.
pub fn read_shifts_json<R: Read>(reader: R) -> serde_json::Result<Vec<RawShift>> {
    serde_json::from_reader(BufReader::new(reader))
}
