use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Motif par défaut des exports téléchargés par le script (`jb.json`, `jb (1).json`...).
pub const DEFAULT_PATTERN: &str = r"jb.*\.json$";

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("no file matching `{pattern}` found in {dir}")]
    NoFileFound { dir: String, pattern: String },
    #[error("no downloads directory could be determined")]
    NoDownloadsDir,
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("listing {dir}: {source}")]
    Io {
        dir: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait InputLocator {
    /// Chemin de l'export à convertir.
    fn locate(&self) -> Result<PathBuf, LocateError>;
}

/// Chemin imposé (`--input`).
pub struct FixedPath(pub PathBuf);

impl InputLocator for FixedPath {
    fn locate(&self) -> Result<PathBuf, LocateError> {
        Ok(self.0.clone())
    }
}

/// Fichier le plus récent (mtime) dont le nom correspond au motif.
pub struct NewestMatching {
    dir: PathBuf,
    pattern: Regex,
}

impl NewestMatching {
    pub fn new<P: AsRef<Path>>(dir: P, pattern: &str) -> Result<Self, LocateError> {
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            pattern: Regex::new(pattern)?,
        })
    }

    /// `~/Downloads` (ou l'équivalent de la plateforme) avec le motif par défaut.
    pub fn in_downloads() -> Result<Self, LocateError> {
        let dir = dirs::download_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join("Downloads")))
            .ok_or(LocateError::NoDownloadsDir)?;
        Self::new(dir, DEFAULT_PATTERN)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl InputLocator for NewestMatching {
    fn locate(&self) -> Result<PathBuf, LocateError> {
        let io_err = |source: std::io::Error| LocateError::Io {
            dir: self.dir.display().to_string(),
            source,
        };
        let mut candidates: Vec<(SystemTime, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let meta = entry.metadata().map_err(io_err)?;
            if !meta.is_file() {
                continue;
            }
            let name = entry.file_name();
            if !self.pattern.is_match(&name.to_string_lossy()) {
                continue;
            }
            let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            candidates.push((modified, entry.path()));
        }

        // plus récent d'abord, puis nom décroissant à égalité
        candidates.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));
        candidates
            .into_iter()
            .next()
            .map(|(_, path)| path)
            .ok_or_else(|| LocateError::NoFileFound {
                dir: self.dir.display().to_string(),
                pattern: self.pattern.as_str().to_string(),
            })
    }
}
