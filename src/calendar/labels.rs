use std::collections::HashMap;

/// Table `code de shift -> libellé affiché`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftLabels {
    labels: HashMap<String, String>,
}

impl ShiftLabels {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            labels: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Code inconnu : libellé vide, jamais d'erreur.
    pub fn label(&self, symbol: &str) -> &str {
        self.labels.get(symbol).map(String::as_str).unwrap_or("")
    }
}

impl Default for ShiftLabels {
    fn default() -> Self {
        Self::new([
            ("D", "Days"),
            ("N", "Nights"),
            ("E", "Evenings"),
            ("A", "Days 12 (A)"),
            ("B", "Nights 12 (B)"),
        ])
    }
}
